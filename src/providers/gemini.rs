use crate::{
    config::GeminiConfig,
    error::AppError,
    models::gemini::{GenerateContentRequest, GenerateContentResponse},
};
use reqwest::Client;
use std::time::Duration;

/// Call Gemini Generate Content API
/// Note: Model name is part of the URL path
pub async fn generate_content(
    client: &Client,
    config: &GeminiConfig,
    request: GenerateContentRequest,
) -> Result<GenerateContentResponse, AppError> {
    // Gemini API format: /v1beta/models/{model}:generateContent
    let url = format!("{}/models/{}:generateContent", config.base_url, config.model);

    let response = client
        .post(&url)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(config.timeout_seconds))
        .query(&[("key", &config.api_key)])
        .json(&request)
        .send()
        .await?;

    // Check for HTTP errors
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::UpstreamError {
            status,
            message: error_text,
        });
    }

    Ok(response.json::<GenerateContentResponse>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> GeminiConfig {
        GeminiConfig {
            enabled: true,
            api_key: "test-key".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_seconds: 30,
            max_multiplier: 50.0,
        }
    }

    #[tokio::test]
    async fn test_generate_content_request_format() {
        let _config = create_test_config();
        let request = GenerateContentRequest::user_prompt("Hello!", Some("application/json"));

        // Verify serialization works
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("Hello!"));
        assert!(json.contains("contents"));
    }
}

use serde::{Deserialize, Serialize};

/// Gemini Generate Content Request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Contents (messages)
    pub contents: Vec<Content>,
    /// Generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "generationConfig")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single-turn user prompt, optionally constrained to a response MIME
    /// type ("application/json" for machine-parsable replies).
    pub fn user_prompt(prompt: &str, response_mime_type: Option<&str>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: response_mime_type.map(|mime| GenerationConfig {
                temperature: None,
                max_output_tokens: None,
                response_mime_type: Some(mime.to_string()),
            }),
        }
    }
}

/// Content block (message)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model"
    pub role: String,
    /// Parts (text content)
    pub parts: Vec<Part>,
}

/// Part (text content)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: Option<String>,
}

/// Gemini Generate Content Response (non-streaming)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Model version
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "modelVersion")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, if the model produced any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
            .filter(|text| !text.trim().is_empty())
    }
}

/// Candidate response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Content
    pub content: Content,
    /// Finish reason
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_user_prompt_with_json_mime() {
        let request =
            GenerateContentRequest::user_prompt("Price this.", Some("application/json"));
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("Price this."));
        assert!(json.contains("responseMimeType"));
        assert!(json.contains("application/json"));
    }

    #[test]
    fn test_plain_prompt_omits_generation_config() {
        let request = GenerateContentRequest::user_prompt("Describe this.", None);
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("generationConfig"));
    }

    #[test]
    fn test_first_text_empty_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_first_text_blank_is_none() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    role: "model".to_string(),
                    parts: vec![Part {
                        text: "   ".to_string(),
                    }],
                },
                finish_reason: None,
            }],
            model_version: None,
        };
        assert!(response.first_text().is_none());
    }
}

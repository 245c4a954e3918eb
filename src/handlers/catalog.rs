use crate::catalog::{PlanetProfile, Product, SpaceAgency};
use crate::handlers::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct PlanetsResponse {
    pub planets: Vec<PlanetProfile>,
}

#[derive(Debug, Serialize)]
pub struct AgenciesResponse {
    pub agencies: Vec<SpaceAgency>,
}

/// Handle /v1/products endpoint
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    Json(ProductsResponse {
        products: state.catalog.products().to_vec(),
    })
}

/// Handle /v1/planets endpoint
pub async fn list_planets(State(state): State<AppState>) -> impl IntoResponse {
    Json(PlanetsResponse {
        planets: state.catalog.planets().to_vec(),
    })
}

/// Handle /v1/agencies endpoint
pub async fn list_agencies(State(state): State<AppState>) -> impl IntoResponse {
    Json(AgenciesResponse {
        agencies: state.catalog.agencies().to_vec(),
    })
}

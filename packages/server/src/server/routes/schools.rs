use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::domains::schools::{normalize_school_name, School, SCHOOLS};

#[derive(Debug, Deserialize)]
pub struct NormalizeQuery {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub input: String,
    pub code: Option<String>,
}

/// Known schools in match priority order
pub async fn list_schools_handler() -> Json<&'static [School]> {
    Json(SCHOOLS)
}

pub async fn normalize_school_handler(
    Query(params): Query<NormalizeQuery>,
) -> Json<NormalizeResponse> {
    let code = normalize_school_name(&params.name);
    Json(NormalizeResponse {
        input: params.name,
        code,
    })
}

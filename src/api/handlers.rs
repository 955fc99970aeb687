//! REST API handlers for the municipality directory
//!
//! The directory is a process-wide static, so handlers carry no state.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::counties;
use crate::error::DirectoryError;
use crate::models::{CountySummary, MunicipalityRecord};
use crate::muni_names;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct MunicipalityResponse {
    pub code: &'static str,
    pub name: &'static str,
    pub county: &'static str,
}

impl MunicipalityResponse {
    fn from_record(record: MunicipalityRecord) -> Result<Self, DirectoryError> {
        Ok(Self {
            code: record.code(),
            name: record.name(),
            county: counties::county_name(record.county_code())?,
        })
    }
}

#[derive(Serialize)]
pub struct CountyResponse {
    pub code: String,
    pub name: &'static str,
    pub municipalities: Vec<MunicipalityRecord>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn not_found(e: DirectoryError) -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error: e.to_string() }))
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct CountyQuery {
    pub county: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok", "entries": muni_names::len()}))
}

/// GET /api/v1/municipalities
pub async fn list_municipalities(
    Query(params): Query<CountyQuery>,
) -> Result<Json<Vec<MunicipalityRecord>>, ApiError> {
    match params.county {
        Some(county) => {
            counties::county_name(&county).map_err(not_found)?;
            Ok(Json(muni_names::in_county(&county)))
        }
        None => Ok(Json(muni_names::records().collect())),
    }
}

/// GET /api/v1/municipalities/:code
pub async fn get_municipality(
    Path(code): Path<String>,
) -> Result<Json<MunicipalityResponse>, ApiError> {
    let record = muni_names::get_record(&code).map_err(not_found)?;
    MunicipalityResponse::from_record(record)
        .map(Json)
        .map_err(not_found)
}

/// GET /api/v1/counties
pub async fn list_counties() -> Json<Vec<CountySummary>> {
    Json(counties::summaries())
}

/// GET /api/v1/counties/:code
pub async fn get_county(Path(code): Path<String>) -> Result<Json<CountyResponse>, ApiError> {
    let name = counties::county_name(&code).map_err(not_found)?;
    let municipalities = muni_names::in_county(&code);
    Ok(Json(CountyResponse { code, name, municipalities }))
}

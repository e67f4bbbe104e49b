//! API handlers.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info};

use dnasim_core::storage::{NewPreset, Preset};
use dnasim_core::{decode, Encoding, SymbolMapping};

use super::error::ApiError;
use super::AppState;

type ApiResult<T> = std::result::Result<T, ApiError>;

pub async fn list_presets(State(state): State<AppState>) -> ApiResult<Json<Vec<Preset>>> {
    let presets = state.store.list_presets()?;
    debug!(count = presets.len(), "listed presets");
    Ok(Json(presets))
}

pub async fn get_preset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Preset>> {
    let id = parse_id(&id)?;
    let preset = state.store.get_preset(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(preset))
}

pub async fn create_preset(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let payload = parse_object(&body)?;
    let input = NewPreset::from_json(&payload)?;
    let preset = state.store.create_preset(&input)?;
    info!(id = preset.id, name = %preset.name, "created preset");
    Ok((StatusCode::CREATED, Json(preset)))
}

pub async fn delete_preset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    if !state.store.delete_preset(id)? {
        return Err(ApiError::NotFound);
    }
    info!(id, "deleted preset");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct EncodeRequest {
    text: String,
    #[serde(default)]
    mapping: Option<SymbolMapping>,
}

pub async fn encode(body: Bytes) -> ApiResult<Json<Encoding>> {
    let request: EncodeRequest = serde_json::from_value(parse_object(&body)?)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let mapping = request.mapping.unwrap_or_default();
    Ok(Json(Encoding::compute(&request.text, &mapping)))
}

#[derive(Deserialize)]
struct DecodeRequest {
    binary: String,
}

pub async fn decode_binary(body: Bytes) -> ApiResult<Json<serde_json::Value>> {
    let request: DecodeRequest = serde_json::from_value(parse_object(&body)?)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    Ok(Json(serde_json::json!({ "text": decode(&request.binary) })))
}

/// Ids that are not integers cannot name a preset.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.trim().parse().map_err(|_| ApiError::NotFound)
}

fn parse_object(body: &[u8]) -> ApiResult<serde_json::Value> {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) if value.is_object() => Ok(value),
        _ => Err(ApiError::bad_request("Invalid JSON body")),
    }
}

//! Operation handlers for the registry endpoints.
//!
//! # Responsibility
//! - Extract and validate query parameters at the HTTP boundary.
//! - Run storage work off the async workers and shape text responses.
//!
//! # Invariants
//! - Malformed input is rejected before any storage call.
//! - Handlers keep no state between requests.

use crate::error::{ApiError, Operation};
use crate::router::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use jdm_registry_core::{
    PartId, PartRepository, PartRows, PartService, PartServiceError, RepoError, ServiceResult,
};
use log::{debug, info, warn};
use std::sync::Arc;

pub const WELCOME_TEXT: &str =
    "Welcome to the JDM Parts Registry API!\nUse /parts to see inventory.\n";
pub const INVENTORY_HEADER: &str = "Current Inventory:\n";

/// Raw query pairs in request order, duplicates kept.
pub type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Query parameters accepted by the collection endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub model: Option<String>,
}

impl PartParams {
    /// Picks `id`, `name` and `model` from `pairs`; the first occurrence of
    /// a repeated key wins and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "id" => &mut params.id,
                "name" => &mut params.name,
                "model" => &mut params.model,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

type TextResponse = (StatusCode, String);

pub async fn welcome() -> &'static str {
    WELCOME_TEXT
}

pub async fn not_found() -> TextResponse {
    (StatusCode::NOT_FOUND, "Not found\n".to_string())
}

pub async fn unknown_method() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn list_parts<R>(State(state): State<AppState<R>>) -> Result<TextResponse, ApiError>
where
    R: PartRepository + Send + Sync + 'static,
{
    let body = run_blocking(&state, |service| service.with_inventory(render_inventory))
        .await
        .map_err(|err| ApiError::from_service(Operation::List, err))?;
    Ok((StatusCode::OK, body))
}

pub async fn create_part<R>(
    State(state): State<AppState<R>>,
    query: QueryPairs,
) -> Result<TextResponse, ApiError>
where
    R: PartRepository + Send + Sync + 'static,
{
    let params = part_params(query)?;
    let name = required(params.name)?;
    let model = required(params.model)?;

    let id = run_blocking(&state, move |service| service.create_part(&name, &model))
        .await
        .map_err(|err| ApiError::from_service(Operation::Create, err))?;

    info!("event={} module=http status=ok id={id}", Operation::Create.as_str());
    Ok((
        StatusCode::CREATED,
        format!("Item added successfully (ID: {id})\n"),
    ))
}

pub async fn update_part<R>(
    State(state): State<AppState<R>>,
    query: QueryPairs,
) -> Result<TextResponse, ApiError>
where
    R: PartRepository + Send + Sync + 'static,
{
    let params = part_params(query)?;
    let id = parse_part_id(params.id.as_deref())?;
    let name = required(params.name)?;

    run_blocking(&state, move |service| service.rename_part(id, &name))
        .await
        .map_err(|err| ApiError::from_service(Operation::Update, err))?;

    info!("event={} module=http status=ok id={id}", Operation::Update.as_str());
    Ok((StatusCode::OK, "Item updated\n".to_string()))
}

pub async fn delete_part<R>(
    State(state): State<AppState<R>>,
    query: QueryPairs,
) -> Result<TextResponse, ApiError>
where
    R: PartRepository + Send + Sync + 'static,
{
    let params = part_params(query)?;
    let id = parse_part_id(params.id.as_deref())?;

    run_blocking(&state, move |service| service.delete_part(id))
        .await
        .map_err(|err| ApiError::from_service(Operation::Delete, err))?;

    info!("event={} module=http status=ok id={id}", Operation::Delete.as_str());
    Ok((StatusCode::OK, "Item deleted\n".to_string()))
}

/// Writes the inventory header plus one line per decodable row.
pub fn render_inventory(rows: &mut PartRows<'_>) -> String {
    let mut body = String::from(INVENTORY_HEADER);
    for row in rows {
        match row {
            Ok(part) => body.push_str(&format!(
                "[ID: {}] {} for {}\n",
                part.id, part.name, part.car_model
            )),
            Err(err) => debug!(
                "event={} module=http status=skipped_row error={err}",
                Operation::List.as_str()
            ),
        }
    }
    body
}

/// Parses the `id` parameter into a storage id.
pub fn parse_part_id(raw: Option<&str>) -> Result<PartId, ApiError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ApiError::MissingParams);
    }
    raw.parse::<PartId>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

fn part_params(query: QueryPairs) -> Result<PartParams, ApiError> {
    match query {
        Ok(Query(pairs)) => Ok(PartParams::from_pairs(pairs)),
        Err(rejection) => {
            warn!("event=http_query module=http status=rejected error={rejection}");
            Err(ApiError::MissingParams)
        }
    }
}

fn required(value: Option<String>) -> Result<String, ApiError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or(ApiError::MissingParams)
}

async fn run_blocking<R, T>(
    state: &AppState<R>,
    op: impl FnOnce(&PartService<R>) -> ServiceResult<T> + Send + 'static,
) -> ServiceResult<T>
where
    R: PartRepository + Send + Sync + 'static,
    T: Send + 'static,
{
    let service: Arc<PartService<R>> = Arc::clone(state.service());
    match tokio::task::spawn_blocking(move || op(&service)).await {
        Ok(result) => result,
        Err(err) => Err(PartServiceError::Repo(RepoError::Unavailable(format!(
            "storage task failed: {err}"
        )))),
    }
}

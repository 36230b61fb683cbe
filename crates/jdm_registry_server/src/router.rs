//! Request router and shared handler state.
//!
//! # Responsibility
//! - Map `/` and `/parts` to handlers by method.
//! - Wrap every route, including fallbacks, in request logging.

use crate::handlers::{
    create_part, delete_part, list_parts, not_found, unknown_method, update_part, welcome,
};
use crate::observability::log_requests;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use jdm_registry_core::{PartRepository, PartService};
use std::sync::Arc;

pub const PARTS_PATH: &str = "/parts";

/// Injected storage handle shared by all request tasks.
pub struct AppState<R: PartRepository> {
    service: Arc<PartService<R>>,
}

impl<R: PartRepository> AppState<R> {
    pub fn new(repo: R) -> Self {
        Self {
            service: Arc::new(PartService::new(repo)),
        }
    }

    pub fn service(&self) -> &Arc<PartService<R>> {
        &self.service
    }
}

impl<R: PartRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Builds the full application router around `state`.
pub fn build_router<R>(state: AppState<R>) -> Router
where
    R: PartRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(welcome))
        .route(
            PARTS_PATH,
            // HEAD is otherwise served by the GET handler.
            get(list_parts::<R>)
                .head(unknown_method)
                .post(create_part::<R>)
                .put(update_part::<R>)
                .delete(delete_part::<R>)
                .fallback(unknown_method),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

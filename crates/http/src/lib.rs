//! Web front end for the catalogue client.
//!
//! Every route drives the one shared [`Controller`] and answers with the
//! screen it ends up on.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod api_error;
mod handlers;
mod query_types;
mod router_tests;
mod viewer;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use catalogue_app::Controller;
use catalogue_gateway::CatalogueClient;
use catalogue_view::routes;
use tokio::sync::{Mutex, MutexGuard};
use tower_http::trace::TraceLayer;

use crate::api_error::ApiError;

/// Shared application state for all HTTP handlers.
///
/// One controller serves every request. Reads queue on the mutex; writes use
/// [`AppState::try_controller`] and are refused while it is held.
pub struct AppState {
    pub controller: Mutex<Controller<CatalogueClient>>,
}

impl AppState {
    pub fn new(client: CatalogueClient) -> Self {
        Self { controller: Mutex::new(Controller::new(client)) }
    }

    pub(crate) fn try_controller(
        &self,
    ) -> Result<MutexGuard<'_, Controller<CatalogueClient>>, ApiError> {
        self.controller.try_lock().map_err(|_| {
            tracing::warn!("write action refused, another request is in flight");
            ApiError::Busy
        })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(routes::HOME, get(handlers::pages::home))
        .route(routes::HEALTH, get(health))
        .route(routes::CREATE, get(handlers::pages::create_form).post(handlers::actions::create))
        .route(routes::LIST, get(handlers::pages::list))
        .route(routes::VIEW_BY_ID, get(handlers::pages::view_by_id))
        .route(routes::DETAIL_PATTERN, get(handlers::pages::detail))
        .route(
            routes::EDIT_PATTERN,
            get(handlers::pages::edit_form).post(handlers::actions::update),
        )
        .route(routes::DELETE_PATTERN, post(handlers::actions::delete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

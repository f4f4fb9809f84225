//! Read actions. These wait for the controller rather than refusing.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use catalogue_app::PresetPrompter;
use catalogue_core::CatalogueId;

use crate::query_types::{ListParams, ViewParams};
use crate::viewer::serve_screen;
use crate::AppState;

pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    let mut controller = state.controller.lock().await;
    controller.show_home();
    serve_screen(&controller)
}

pub async fn create_form(State(state): State<Arc<AppState>>) -> Response {
    let mut controller = state.controller.lock().await;
    controller.show_create();
    serve_screen(&controller)
}

pub async fn list(State(state): State<Arc<AppState>>, Query(params): Query<ListParams>) -> Response {
    let mut controller = state.controller.lock().await;
    controller.show_list(params.query(), params.refresh()).await;
    serve_screen(&controller)
}

/// The "View by ID" box: the submitted `id` answers the prompt.
pub async fn view_by_id(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
) -> Response {
    let mut controller = state.controller.lock().await;
    let mut prompter = PresetPrompter::answering(params.id);
    controller.prompt_view_by_id(&mut prompter).await;
    if let Some(alert) = prompter.last_alert() {
        controller.flash_error(alert);
    }
    serve_screen(&controller)
}

pub async fn detail(State(state): State<Arc<AppState>>, Path(id): Path<CatalogueId>) -> Response {
    let mut controller = state.controller.lock().await;
    controller.view_by_id(id).await;
    serve_screen(&controller)
}

pub async fn edit_form(State(state): State<Arc<AppState>>, Path(id): Path<CatalogueId>) -> Response {
    let mut controller = state.controller.lock().await;
    controller.edit(id).await;
    serve_screen(&controller)
}

//! Write actions. Refused with a busy answer while another action runs.

use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use catalogue_app::PresetPrompter;
use catalogue_core::{CatalogueForm, CatalogueId};
use catalogue_view::View;

use crate::api_error::ApiError;
use crate::query_types::DeleteForm;
use crate::viewer::serve_screen;
use crate::AppState;

pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CatalogueForm>,
) -> Result<Response, ApiError> {
    let mut controller = state.try_controller()?;
    controller.submit_create(form).await;
    Ok(serve_screen(&controller))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CatalogueId>,
    Form(form): Form<CatalogueForm>,
) -> Result<Response, ApiError> {
    let submitted_id = form.catalogue_id.trim();
    if !submitted_id.is_empty() && submitted_id != id.to_string() {
        return Err(ApiError::BadRequest(format!(
            "form is for catalogue {submitted_id}, not {id}"
        )));
    }
    let mut controller = state.try_controller()?;
    let editing = matches!(controller.view(), View::Edit(record) if record.catalogue_id == id);
    if !editing {
        controller.edit(id).await;
    }
    controller.submit_update(id, form).await;
    Ok(serve_screen(&controller))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CatalogueId>,
    Form(form): Form<DeleteForm>,
) -> Result<Response, ApiError> {
    let mut controller = state.try_controller()?;
    let mut prompter = PresetPrompter::confirming(form.confirmed());
    controller.delete(id, &mut prompter).await;
    Ok(serve_screen(&controller))
}

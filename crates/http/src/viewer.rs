//! HTML responses for the controller's current screen.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use catalogue_app::Controller;
use catalogue_gateway::CatalogueApi;

/// Render whatever screen the controller is on.
pub fn serve_screen<A: CatalogueApi>(controller: &Controller<A>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Html(controller.render()),
    )
        .into_response()
}

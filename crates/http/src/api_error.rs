//! Typed API error for HTTP handlers.
//!
//! Handlers return `Result<Response, ApiError>`. The error side is a full
//! page: the home screen with the reason in the status area, under a
//! matching status code.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use catalogue_core::{BUSY_MESSAGE, STATUS_CLEAR_AFTER, StatusMessage};
use catalogue_view::{Screen, View, render};

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: the submitted form contradicts the URL.
    BadRequest(String),
    /// 409 Conflict: another write action holds the controller.
    Busy,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Busy => (StatusCode::CONFLICT, BUSY_MESSAGE.to_owned()),
        };
        // The controller may be locked here, so its own screen is out of reach.
        let notice = StatusMessage::error(message);
        let screen = Screen::new(&View::Home).with_status(Some(&notice), STATUS_CLEAR_AFTER);
        (status, Html(render(&screen))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::header;

    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Busy.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::BadRequest("x".to_owned()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_busy_renders_page_with_error_status() {
        let response = ApiError::Busy.into_response();
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("status-error"));
        assert!(page.contains(BUSY_MESSAGE));
        assert!(!page.contains("{\"error\""));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use catalogue_core::{BUSY_MESSAGE, INVALID_ID_MESSAGE};
    use catalogue_gateway::{CatalogueClient, ClientConfig};
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{AppState, create_router};

    async fn setup() -> (MockServer, Arc<AppState>, Router) {
        let server = MockServer::start().await;
        let client = CatalogueClient::new(ClientConfig::default().with_base_url(server.uri())).unwrap();
        let state = Arc::new(AppState::new(client));
        let router = create_router(Arc::clone(&state));
        (server, state, router)
    }

    async fn send(router: &Router, method: Method, uri: &str, form: Option<&str>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn mount_list(server: &MockServer, times: u64) {
        Mock::given(method("GET"))
            .and(path("/api/catalogues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [
                    { "catalogue_id": 1, "catalogue_name": "Spring", "is_cat_active": 1 },
                    { "catalogue_id": 2, "catalogue_name": "Summer", "is_cat_active": 0 }
                ]
            })))
            .expect(times)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_health() {
        let (_server, _state, router) = setup().await;
        let (status, body) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_home_page() {
        let (_server, _state, router) = setup().await;
        let (status, body) = send(&router, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Catalogue Manager</title>"));
        assert!(!body.contains("id=\"home-link\""));
    }

    #[tokio::test]
    async fn test_list_fetches_once_then_filters_locally() {
        let (server, _state, router) = setup().await;
        mount_list(&server, 1).await;

        let (status, body) = send(&router, Method::GET, "/catalogues", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Spring") && body.contains("Summer"));

        let (_, body) = send(&router, Method::GET, "/catalogues?status=inactive&sort=desc", None).await;
        assert!(!body.contains("<td>Spring</td>"));
        assert!(body.contains("<td>Summer</td>"));
        assert!(body.contains("Page 1 of 1"));
    }

    #[tokio::test]
    async fn test_refresh_fetches_again() {
        let (server, _state, router) = setup().await;
        mount_list(&server, 2).await;

        send(&router, Method::GET, "/catalogues", None).await;
        send(&router, Method::GET, "/catalogues?refresh=1", None).await;
    }

    #[tokio::test]
    async fn test_create_posts_form_fields() {
        let (server, _state, router) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/catalogues"))
            .and(body_json(json!({
                "catalogue_id": 10,
                "catalogue_name": "Autumn",
                "catalogue_version": "v2",
                "is_cat_active": "1",
                "catalogue_start": "2030-09-01",
                "catalogue_end": "2030-11-30"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true,
                "message": "Catalogue created successfully with ID 10"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let form = "catalogue_id=10&catalogue_name=Autumn&catalogue_version=v2&is_cat_active=1\
&catalogue_start=2030-09-01&catalogue_end=2030-11-30";
        let (status, body) = send(&router, Method::POST, "/create", Some(form)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Catalogue created successfully with ID 10"));
        assert!(body.contains("status-success"));
    }

    #[tokio::test]
    async fn test_write_while_busy_is_refused() {
        let (server, state, router) = setup().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;

        let _guard = state.controller.lock().await;
        let (status, body) = send(&router, Method::POST, "/create", Some("catalogue_name=X")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.contains("status-error"));
        assert!(body.contains(BUSY_MESSAGE));
    }

    #[tokio::test]
    async fn test_delete_without_confirmation_sends_nothing() {
        let (server, _state, router) = setup().await;
        Mock::given(method("DELETE")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let (status, _) = send(&router, Method::POST, "/catalogues/1/delete", Some("")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_confirmed_delete_refreshes_list() {
        let (server, _state, router) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/catalogues/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Catalogue with ID 1 deleted successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;
        mount_list(&server, 1).await;

        let (_, body) = send(&router, Method::POST, "/catalogues/1/delete", Some("confirm=yes")).await;
        assert!(body.contains("Catalogue with ID 1 deleted successfully"));
        assert!(body.contains("id=\"catalogueList\""));
    }

    #[tokio::test]
    async fn test_view_by_id_rejects_non_numeric_input() {
        let (_server, _state, router) = setup().await;
        let (status, body) = send(&router, Method::GET, "/view?id=abc", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(INVALID_ID_MESSAGE));
    }

    #[tokio::test]
    async fn test_edit_form_for_another_id_is_bad_request() {
        let (_server, _state, router) = setup().await;
        let (status, body) =
            send(&router, Method::POST, "/catalogues/3/edit", Some("catalogue_id=4&catalogue_name=X")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("form is for catalogue 4, not 3"));
    }

    #[tokio::test]
    async fn test_detail_page_shows_record() {
        let (server, _state, router) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/catalogues/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "catalogue_id": 2, "catalogue_name": "Summer", "is_cat_active": "0" }
            })))
            .mount(&server)
            .await;

        let (_, body) = send(&router, Method::GET, "/catalogues/2", None).await;
        assert!(body.contains("<dd>Summer</dd>"));
        assert!(body.contains("action=\"/catalogues/2/delete\""));
    }
}

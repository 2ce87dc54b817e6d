use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use crate::{handlers::rest, service::NoteService};

pub fn router(service: Arc<NoteService>) -> Router {
    let mut router = Router::new()
        .route("/", get(rest::root))
        .route("/notes", get(rest::get_all_notes).post(rest::create_note))
        .route("/notes/", get(rest::get_all_notes).post(rest::create_note))
        .route(
            "/notes/{id}",
            get(rest::get_one_note)
                .put(rest::update_note)
                .delete(rest::delete_note),
        );

    let mut api_doc = rest::ApiDoc::openapi();
    if service.sharing_enabled() {
        router = router.route("/share/{id}", get(rest::share_note));
        api_doc.merge(rest::ShareApiDoc::openapi());
    }

    router
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", api_doc))
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::{MessageResponse, NoteResponse},
        repository::{MemoryRepository, Storage},
    };

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use serde::de::DeserializeOwned;
    use serde_json::json;
    use tower::ServiceExt;

    fn app(public_base_url: Option<&str>) -> Router {
        let service = NoteService::new(
            Storage::Memory(MemoryRepository::new()),
            public_base_url.map(str::to_string),
        );
        router(Arc::new(service))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(app: &Router, title: &str, content: &str) -> NoteResponse {
        let response = send(
            app,
            "POST",
            "/notes",
            Some(json!({ "title": title, "content": content })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        json_body(response).await
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let app = app(None);
        let response = send(&app, "GET", "/", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = json_body(response).await;
        assert_eq!(body.message, "Notes API is live 🚀");
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let app = app(None);
        let created = create(&app, "Shopping", "eggs").await;

        let response = send(&app, "GET", &format!("/notes/{}", created.id), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: NoteResponse = json_body(response).await;
        assert_eq!(fetched, created);

        let response = send(
            &app,
            "PUT",
            &format!("/notes/{}", created.id),
            Some(json!({ "title": "Shopping list", "content": "eggs, flour" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated: NoteResponse = json_body(response).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Shopping list");
        assert_eq!(updated.content, "eggs, flour");

        let response = send(&app, "DELETE", &format!("/notes/{}", created.id), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = json_body(response).await;
        assert_eq!(
            body.message,
            format!("Note {} deleted successfully", created.id)
        );

        let response = send(&app, "GET", &format!("/notes/{}", created.id), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body["detail"], "Note not found");
    }

    #[tokio::test]
    async fn list_returns_all_notes() {
        let app = app(None);
        for i in 0..3 {
            create(&app, &format!("note {i}"), "").await;
        }

        let response = send(&app, "GET", "/notes", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let notes: Vec<NoteResponse> = json_body(response).await;
        assert_eq!(notes.len(), 3);

        let response = send(&app, "GET", "/notes/", None).await;
        let notes: Vec<NoteResponse> = json_body(response).await;
        assert_eq!(notes.len(), 3);
    }

    #[tokio::test]
    async fn missing_note_is_404_for_every_method() {
        let app = app(None);

        let response = send(&app, "GET", "/notes/unknown", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(
            &app,
            "PUT",
            "/notes/unknown",
            Some(json!({ "title": "t", "content": "c" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, "DELETE", "/notes/unknown", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_title_is_bad_request() {
        let app = app(None);
        let response = send(
            &app,
            "POST",
            "/notes",
            Some(json!({ "title": " ", "content": "c" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let notes: Vec<NoteResponse> = json_body(send(&app, "GET", "/notes", None).await).await;
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let app = app(None);
        let response = send(&app, "POST", "/notes", Some(json!({ "content": "c" }))).await;

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn share_link_resolves_when_enabled() {
        let app = app(Some("http://notes.test"));
        let created = create(&app, "Public", "hello").await;
        let share_url = created.share_url.clone().unwrap();
        assert_eq!(share_url, format!("http://notes.test/share/{}", created.id));

        let path = share_url.trim_start_matches("http://notes.test");
        let response = send(&app, "GET", path, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let shared: NoteResponse = json_body(response).await;
        assert_eq!(shared, created);

        let response = send(&app, "GET", "/share/unknown", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn share_route_absent_when_disabled() {
        let app = app(None);
        let created = create(&app, "Private", "secret").await;

        let body: serde_json::Value = json_body(
            send(&app, "GET", &format!("/notes/{}", created.id), None).await,
        )
        .await;
        assert!(body.get("share_url").is_none());

        let response = send(&app, "GET", &format!("/share/{}", created.id), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let app = app(None);
        let response = send(&app, "GET", "/api-doc/openapi.json", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let doc: serde_json::Value = json_body(response).await;
        assert!(doc["paths"].get("/notes/{id}").is_some());
        assert!(doc["paths"].get("/share/{id}").is_none());
    }

    #[tokio::test]
    async fn openapi_document_lists_share_route_when_enabled() {
        let app = app(Some("http://notes.test"));
        let response = send(&app, "GET", "/api-doc/openapi.json", None).await;

        let doc: serde_json::Value = json_body(response).await;
        assert!(doc["paths"].get("/share/{id}").is_some());
        assert!(doc["paths"].get("/notes").is_some());
    }

    #[tokio::test]
    async fn update_of_missing_note_with_blank_title_is_404() {
        let app = app(None);
        let response = send(
            &app,
            "PUT",
            "/notes/unknown",
            Some(json!({ "title": "", "content": "c" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

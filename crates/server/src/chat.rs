//! HTTP surface for the assistant.
//!
//! - `POST /chat` with `{"message": "..."}` answers `{"response": "..."}`.
//!
//! Every request is answered with `200 OK`; unreadable bodies are treated as
//! an empty message. Body size is not capped.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::{routing::post, Json, Router};
use happycore_core::{ChatEngine, ChatRequest, ChatResponse, RequestError};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ChatState {
    engine: ChatEngine,
}

pub fn router(engine: ChatEngine) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .layer(DefaultBodyLimit::disable())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(ChatState { engine })
}

/// Any origin, method and header. Origins are mirrored so browsers sending
/// credentials are accepted as well.
fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub async fn chat(
    State(state): State<ChatState>,
    body: Result<Bytes, BytesRejection>,
) -> Json<ChatResponse> {
    let correlation_id = Uuid::new_v4().to_string();

    let parsed = body
        .map_err(|rejection| {
            RequestError::MalformedRequest(format!("unreadable body: {rejection}"))
        })
        .and_then(|body| ChatRequest::from_slice(&body));
    let request = parsed.unwrap_or_else(|error| {
        debug!(
            event_name = "chat.request.malformed",
            correlation_id = %correlation_id,
            error = %error,
            "treating malformed chat request as an empty message"
        );
        ChatRequest::default()
    });

    let reply = state.engine.respond(&request.message);
    info!(
        event_name = "chat.request.answered",
        correlation_id = %correlation_id,
        intent = reply.intent.kind().as_str(),
        match_count = ?reply.match_count,
        "chat message answered"
    );

    Json(ChatResponse { response: reply.text })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use happycore_core::{
        Catalog, CatalogRecord, ChatEngine, ChatResponse, FAREWELL_REPLY, GREETING_REPLY,
        LISTING_HEADER, NO_MATCHES_REPLY,
    };
    use tower::ServiceExt;

    use super::router;

    fn record(model: &str, brand: &str, processor: &str, price: u64, score: f64) -> CatalogRecord {
        CatalogRecord {
            model_name: model.to_owned(),
            brand: brand.to_owned(),
            processor_name: processor.to_owned(),
            operating_system: "Windows 11 OS".to_owned(),
            price,
            ram_gb: 8,
            ssd_gb: 512,
            spec_score: score,
        }
    }

    fn app() -> Router {
        let catalog = Catalog::new(vec![
            record("Inspiron 3520", "Dell", "Intel Core i5 1235U", 48_990, 62.0),
            record("Victus 15", "HP", "AMD Ryzen 5 5600H", 52_990, 70.0),
            record("G15 5525", "Dell", "AMD Ryzen 5 6600H", 64_990, 74.0),
        ]);
        router(ChatEngine::new(Arc::new(catalog)))
    }

    async fn post_chat(body: impl Into<Body>) -> (StatusCode, ChatResponse) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body.into())
                    .expect("request"),
            )
            .await
            .expect("response");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let payload = serde_json::from_slice(&bytes).expect("json response");
        (status, payload)
    }

    #[tokio::test]
    async fn greeting_message_returns_greeting() {
        let (status, payload) = post_chat(r#"{"message":"  Hello "}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.response, GREETING_REPLY);
    }

    #[tokio::test]
    async fn missing_message_is_treated_as_greeting() {
        let (status, payload) = post_chat("{}").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.response, GREETING_REPLY);
    }

    #[tokio::test]
    async fn malformed_bodies_still_answer_ok() {
        for body in ["not json", r#"{"message": 7}"#, ""] {
            let (status, payload) = post_chat(body).await;
            assert_eq!(status, StatusCode::OK, "body: {body:?}");
            assert_eq!(payload.response, GREETING_REPLY, "body: {body:?}");
        }
    }

    #[tokio::test]
    async fn bodies_beyond_default_limit_are_answered() {
        let body = format!(r#"{{"message":"{}"}}"#, "a".repeat(3 * 1024 * 1024));
        let (status, payload) = post_chat(body).await;
        assert_eq!(status, StatusCode::OK);
        assert!(payload.response.starts_with(LISTING_HEADER), "response: {}", payload.response);
    }

    #[tokio::test]
    async fn farewell_message_returns_farewell() {
        let (_, payload) = post_chat(r#"{"message":"ok thanks bye"}"#).await;
        assert_eq!(payload.response, FAREWELL_REPLY);
    }

    #[tokio::test]
    async fn search_returns_ranked_listing() {
        let (status, payload) = post_chat(r#"{"message":"dell laptop under ₹70000"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            payload.response,
            "🔍 Here are the best matching laptops:\n\
             1. G15 5525 (Dell) - ₹64990\n   \
             Processor: AMD Ryzen 5 6600H, RAM: 8GB, SSD: 512GB, OS: Windows 11 OS\n\
             2. Inspiron 3520 (Dell) - ₹48990\n   \
             Processor: Intel Core i5 1235U, RAM: 8GB, SSD: 512GB, OS: Windows 11 OS"
        );
    }

    #[tokio::test]
    async fn empty_result_returns_no_matches_text() {
        let (status, payload) = post_chat(r#"{"message":"hp under 1000"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.response, NO_MATCHES_REPLY);
    }

    #[tokio::test]
    async fn preflight_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/chat")
                    .header(header::ORIGIN, "https://shop.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).map(|v| v.as_bytes()),
            Some("https://shop.example".as_bytes())
        );
    }

    #[tokio::test]
    async fn other_paths_are_not_served() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

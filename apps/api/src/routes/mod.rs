pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_end_session),
        )
        .route(
            "/api/v1/sessions/:id/events",
            post(handlers::handle_session_event),
        )
        .route(
            "/api/v1/sessions/:id/summary",
            get(handlers::handle_get_summary),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::interview::generator::testing::ScriptedGenerator;
    use crate::interview::store::SessionStore;

    fn app_with(generator: ScriptedGenerator) -> Router {
        build_router(AppState {
            sessions: SessionStore::new(Duration::from_secs(60 * 60)),
            generator: Arc::new(generator),
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(serde_json::to_vec(&body).unwrap())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        // Extractor rejections answer in plain text.
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    async fn event(app: &Router, id: &str, body: Value) -> (StatusCode, Value) {
        send(app, "POST", &format!("/api/v1/sessions/{id}/events"), Some(body)).await
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(ScriptedGenerator::new("Q1", "ok"));
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["active_sessions"], 0);
    }

    #[tokio::test]
    async fn test_full_interview_flow() {
        let app = app_with(ScriptedGenerator::new("- Tell me about yourself\n- Why Rust?\n", "Great answer."));

        let (status, view) = send(&app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(view["stage"], "collect_name");
        let id = view["session_id"].as_str().unwrap().to_string();

        let (_, view) = event(&app, &id, json!({"type": "submit_name", "name": "  alice  "})).await;
        assert_eq!(view["stage"], "collect_count");
        assert!(view["coach_message"].as_str().unwrap().contains("Alice"));

        let (_, view) = event(&app, &id, json!({"type": "choose_count", "count": 6})).await;
        assert_eq!(view["stage"], "collect_type");

        let (_, view) = event(&app, &id, json!({"type": "choose_type", "question_type": "both"})).await;
        assert_eq!(view["stage"], "collect_job_description");

        let (status, view) = event(
            &app,
            &id,
            json!({"type": "submit_job_description", "job_description": "Rust backend engineer"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["stage"], "answer_loop");
        assert_eq!(view["screen"]["kind"], "question");
        assert_eq!(view["screen"]["question"], "Tell me about yourself");
        assert_eq!(view["screen"]["total"], 2);

        let (status, _) = send(&app, "GET", &format!("/api/v1/sessions/{id}/summary"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        for _ in 0..2 {
            let (_, view) = event(&app, &id, json!({"type": "submit_answer", "answer": "An answer"})).await;
            assert_eq!(view["screen"]["feedback"], "Great answer.");
            let (_, _) = event(&app, &id, json!({"type": "advance"})).await;
        }

        let (_, view) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(view["stage"], "summary");
        assert_eq!(view["interview_complete"], true);

        let (status, summary) = send(&app, "GET", &format!("/api/v1/sessions/{id}/summary"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["name"], "Alice");
        assert_eq!(summary["entries"].as_array().unwrap().len(), 2);
        assert_eq!(summary["entries"][1]["question"], "Why Rust?");
        assert!(summary["markdown"].as_str().unwrap().contains("**Q2:** Why Rust?"));
    }

    #[tokio::test]
    async fn test_out_of_range_count_is_rejected() {
        let app = app_with(ScriptedGenerator::new("Q1", "ok"));
        let (_, view) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = view["session_id"].as_str().unwrap().to_string();
        event(&app, &id, json!({"type": "submit_name", "name": "Bo"})).await;

        let (status, _) = event(&app, &id, json!({"type": "choose_count", "count": 7})).await;
        assert!(status.is_client_error());

        let (_, view) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(view["stage"], "collect_count");
    }

    #[tokio::test]
    async fn test_generator_failure_keeps_stage() {
        let app = app_with(ScriptedGenerator::failing());
        let (_, view) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = view["session_id"].as_str().unwrap().to_string();
        event(&app, &id, json!({"type": "submit_name", "name": "Bo"})).await;
        event(&app, &id, json!({"type": "choose_count", "count": 12})).await;
        event(&app, &id, json!({"type": "choose_type", "question_type": "technical"})).await;

        let (status, body) = event(
            &app,
            &id,
            json!({"type": "submit_job_description", "job_description": "Data engineer"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert_eq!(body["error"]["retryable"], true);

        let (_, view) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(view["stage"], "collect_job_description");
    }

    #[tokio::test]
    async fn test_wrong_stage_event_is_conflict() {
        let app = app_with(ScriptedGenerator::new("Q1", "ok"));
        let (_, view) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = view["session_id"].as_str().unwrap().to_string();

        let (status, body) = event(&app, &id, json!({"type": "retry"})).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["retryable"], false);
    }

    #[tokio::test]
    async fn test_end_session() {
        let app = app_with(ScriptedGenerator::new("Q1", "ok"));
        let (_, view) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = view["session_id"].as_str().unwrap().to_string();

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

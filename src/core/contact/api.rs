//! Contact API endpoint
//!
//! - POST /api/contact - Validate and deliver a contact enquiry

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use std::sync::Arc;

use super::delivery::ContactSink;
use super::{ContactError, ContactReceipt, ContactSubmission};

/// Contact API state containing the delivery sink
pub struct ContactApiState<S: ContactSink> {
    pub sink: S,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Convert ContactError to API response
impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ContactError::MissingField(_) => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            ContactError::InvalidEmail => (StatusCode::BAD_REQUEST, "INVALID_EMAIL"),
            ContactError::FieldTooLong { .. } => (StatusCode::BAD_REQUEST, "FIELD_TOO_LONG"),
            // Raised by the browser-side flow only; the handler never sees it.
            ContactError::AlreadySubmitted => (StatusCode::CONFLICT, "ALREADY_SUBMITTED"),
            ContactError::Delivery(_) => (StatusCode::BAD_GATEWAY, "DELIVERY_FAILED"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Create the contact API router
pub fn contact_router<S: ContactSink>(sink: S) -> Router {
    let state = Arc::new(ContactApiState { sink });

    Router::new()
        .route("/api/contact", post(submit_handler::<S>))
        .with_state(state)
}

/// POST /api/contact
async fn submit_handler<S: ContactSink>(
    State(state): State<Arc<ContactApiState<S>>>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ContactReceipt>, ContactError> {
    if let Err(err) = submission.validate() {
        tracing::debug!("Rejected contact submission: {}", err);
        return Err(err);
    }

    state.sink.deliver(&submission).await.inspect_err(|err| {
        tracing::error!("Contact delivery failed: {}", err);
    })?;

    Ok(Json(ContactReceipt {
        success: true,
        message: "Thanks for reaching out! We'll be in touch shortly.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingSink {
        delivered: Arc<Mutex<Vec<ContactSubmission>>>,
    }

    impl ContactSink for RecordingSink {
        async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
            self.delivered.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl ContactSink for FailingSink {
        async fn deliver(&self, _submission: &ContactSubmission) -> Result<(), ContactError> {
            Err(ContactError::Delivery("connection refused".to_string()))
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
            project: "A new brand".to_string(),
        }
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_submission() {
        let sink = RecordingSink::default();
        let delivered = sink.delivered.clone();
        let app = contact_router(sink);

        let response = app
            .oneshot(post_json(serde_json::to_string(&submission()).unwrap()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(delivered.lock().unwrap().as_slice(), [submission()]);
    }

    #[tokio::test]
    async fn test_repeat_submission_is_accepted() {
        let sink = RecordingSink::default();
        let delivered = sink.delivered.clone();
        let app = contact_router(sink);

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_json(serde_json::to_string(&submission()).unwrap()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(delivered.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_already_submitted_maps_to_conflict() {
        let response = ContactError::AlreadySubmitted.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_rejects_missing_field() {
        let sink = RecordingSink::default();
        let delivered = sink.delivered.clone();
        let app = contact_router(sink);
        let incomplete = ContactSubmission {
            project: String::new(),
            ..submission()
        };

        let response = app
            .oneshot(post_json(serde_json::to_string(&incomplete).unwrap()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "MISSING_FIELD");
        assert_eq!(body["error"], "The project field is required");
        assert!(delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_invalid_email() {
        let app = contact_router(RecordingSink::default());
        let bad = ContactSubmission {
            email: "not-an-email".to_string(),
            ..submission()
        };

        let response = app
            .oneshot(post_json(serde_json::to_string(&bad).unwrap()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_EMAIL");
    }

    #[tokio::test]
    async fn test_delivery_failure_is_bad_gateway() {
        let app = contact_router(FailingSink);

        let response = app
            .oneshot(post_json(serde_json::to_string(&submission()).unwrap()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["code"], "DELIVERY_FAILED");
    }

    #[tokio::test]
    async fn test_absent_key_is_missing_field() {
        let sink = RecordingSink::default();
        let delivered = sink.delivered.clone();
        let app = contact_router(sink);

        let response = app
            .oneshot(post_json(
                r#"{"name":"Ada","email":"ada@example.com","company":"X"}"#.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "MISSING_FIELD");
        assert!(body["error"].is_string());
        assert!(delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_json_body_is_client_error() {
        let app = contact_router(RecordingSink::default());

        let response = app
            .oneshot(post_json("not json".to_string()))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() {
        let app = contact_router(RecordingSink::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/contact")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

//! HTTP mapping for outcomes — the reference transport policy.
//!
//! Requires the `http` feature. The core only defines the outcome data; how
//! it maps to a protocol response is caller policy. This module ships the
//! reference mapping as an axum [`IntoResponse`] impl so hosts that agree
//! with the policy can return an [`Outcome`] straight from a route handler:
//!
//! - success → `200 OK`, body = the carried value as JSON (`null` for the
//!   no-value form)
//! - `NotFound` → `404` with `{ "errorCode", "errorMessage" }`
//! - `ValidationError` → `400` with `{ "errorCode", "errorMessage",
//!   "errors" }` (the per-field map)
//! - any other code → `400` with `{ "errorCode", "errorMessage" }`
//!
//! ## Example
//!
//! ```ignore
//! async fn create_user(State(registry): State<Arc<HandlerRegistry>>,
//!                      Json(command): Json<CreateUser>) -> impl IntoResponse {
//!     match registry.dispatch_command_with_output(command, CancellationToken::new()).await {
//!         Ok(outcome) => outcome.into_response(),
//!         Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
//!     }
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::outcome::{codes, Outcome};

/// The status the reference policy assigns to an error code.
fn status_for(code: &str) -> StatusCode {
    match code {
        codes::NOT_FOUND => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        if self.is_success() {
            return (StatusCode::OK, Json(self.into_value())).into_response();
        }

        let status = status_for(self.error_code());
        let body = if self.error_code() == codes::VALIDATION {
            json!({
                "errorCode": self.error_code(),
                "errorMessage": self.error_message(),
                "errors": self.errors(),
            })
        } else {
            json!({
                "errorCode": self.error_code(),
                "errorMessage": self.error_message(),
            })
        };
        (status, Json(body)).into_response()
    }
}

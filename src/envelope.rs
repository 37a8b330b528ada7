//! Transport envelope shared by every handler.
//!
//! Handlers return `{ body, statusCode }` where `body` is an already
//! serialised JSON document. The router turns the envelope into an HTTP
//! response; callers without HTTP can use it directly.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    /// Serialised JSON document
    pub body: String,

    /// HTTP status to report
    pub status_code: u16,
}

/// Wrapper that places a payload under the `data` property.
#[derive(Serialize)]
struct DataBody<'a, T: Serialize + ?Sized> {
    data: &'a T,
}

impl HandlerResponse {
    /// Builds a 200 envelope with `{"data": payload}` as its body.
    pub fn data<T: Serialize + ?Sized>(payload: &T) -> Self {
        match serde_json::to_string(&DataBody { data: payload }) {
            Ok(body) => Self {
                body,
                status_code: StatusCode::OK.as_u16(),
            },
            Err(e) => {
                tracing::error!("Failed to serialise response payload: {}", e);
                Self {
                    body: json!({ "error": "Internal Server Error" }).to_string(),
                    status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                }
            }
        }
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn wraps_payload_on_data_property() {
        let envelope = HandlerResponse::data(&json!({ "minCalories": 10 }));
        assert_eq!(envelope.status_code, 200);

        let body: Value = serde_json::from_str(&envelope.body).unwrap();
        assert_eq!(body["data"]["minCalories"], 10);
    }

    #[test]
    fn serialises_with_camel_case_status() {
        let envelope = HandlerResponse::data(&json!(null));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "{\"data\":null}");
    }

    #[test]
    fn http_response_uses_envelope_status() {
        let response = HandlerResponse::data(&json!([])).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}

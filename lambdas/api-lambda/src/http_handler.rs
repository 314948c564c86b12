use std::sync::Arc;

use booking_shared::cognito::CognitoIdentity;
use booking_shared::dynamo::DynamoStore;
use booking_shared::response::ApiResponse;
use booking_shared::types::ApiRequest;
use booking_shared::{router, AppState};
use lambda_http::{Body, Error, Request, Response};
use serde_json::Value;

/// Adapt the Lambda event to the core request shape, dispatch, and encode
/// the envelope back onto the wire.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState<CognitoIdentity, DynamoStore>>,
) -> Result<Response<Body>, Error> {
    let body = match event.body() {
        Body::Text(text) => Some(text.clone()),
        Body::Binary(bytes) => std::str::from_utf8(bytes).ok().map(str::to_string),
        Body::Empty => None,
    };
    let request = ApiRequest {
        http_method: event.method().to_string(),
        path: event.uri().path().to_string(),
        body,
    };

    encode(router::handle(&state, request).await)
}

/// Message bodies go out as plain text; structured payloads are serialized
/// here, at the transport boundary.
fn encode(response: ApiResponse) -> Result<Response<Body>, Error> {
    let body = match &response.body {
        Value::String(message) => message.clone(),
        payload => serde_json::to_string(payload)?,
    };

    Ok(Response::builder()
        .status(response.status_code)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(body.into())
        .map_err(Box::new)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_bodies_are_sent_as_plain_text() {
        let response = encode(ApiResponse::message(400, "User already exists")).unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(response.body().to_vec(), b"User already exists");
    }

    #[test]
    fn structured_bodies_are_serialized() {
        let response = encode(ApiResponse {
            status_code: 200,
            body: serde_json::json!({"accessToken": "abc"}),
        })
        .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.body().to_vec(), br#"{"accessToken":"abc"}"#);
    }
}

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Transport-agnostic request shape. The Lambda shell extracts these three
/// fields from the invocation event; everything else stays at the boundary.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub http_method: String,
    pub path: String,
    pub body: Option<String>,
}

// ========== AUTH ==========
/// Fields arrive as `Option` on purpose: a missing field is a null the
/// validator rejects, not a decode error.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthToken {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

// ========== TABLE ==========
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Table {
    pub id: String,
    pub number: i32,
    pub places: i32,
    #[serde(rename = "isVip")]
    pub is_vip: bool,
    #[serde(rename = "minOrder", skip_serializing_if = "Option::is_none")]
    pub min_order: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTableRequest {
    pub id: String,
    pub number: i32,
    pub places: i32,
    #[serde(rename = "isVip")]
    pub is_vip: bool,
    #[serde(rename = "minOrder")]
    pub min_order: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct CreateTableResponse {
    pub id: String,
}

// ========== RESERVATION ==========
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Reservation {
    #[serde(rename = "reservationId")]
    pub reservation_id: String,
    #[serde(rename = "tableId")]
    pub table_id: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "reservationTime")]
    pub reservation_time: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    #[serde(rename = "tableId")]
    pub table_id: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "reservationTime")]
    pub reservation_time: String,
}

#[derive(Debug, Serialize)]
pub struct CreateReservationResponse {
    #[serde(rename = "reservationId")]
    pub reservation_id: String,
}

/// Decode a JSON request body into its typed record.
pub(crate) fn parse_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T, ApiError> {
    let raw = body.ok_or_else(|| ApiError::InvalidInput("Request body is required".to_string()))?;
    serde_json::from_str(raw)
        .map_err(|e| ApiError::InvalidInput(format!("Invalid request body: {e}")))
}

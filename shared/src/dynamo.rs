use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use crate::error::ApiError;
use crate::types::{Reservation, Table};

/// A single record in the store, as a set of typed attributes.
pub type Item = HashMap<String, AttributeValue>;

/// Narrow contract over the key-value store, keyed by an `id` attribute.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Full-table scan. A single scan call; pagination beyond that is a
    /// known scale limit.
    async fn scan_all(&self, table_name: &str) -> Result<Vec<Item>, ApiError>;

    /// Direct key lookup on the `id` partition key.
    async fn get_by_id(&self, table_name: &str, id: &str) -> Result<Option<Item>, ApiError>;

    /// Unconditional upsert; uniqueness is the store's key-schema invariant.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), ApiError>;
}

/// DynamoDB-backed implementation.
pub struct DynamoStore {
    client: DynamoClient,
}

impl DynamoStore {
    pub fn new(client: DynamoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookingStore for DynamoStore {
    async fn scan_all(&self, table_name: &str) -> Result<Vec<Item>, ApiError> {
        let result = self
            .client
            .scan()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("scan failed: {e}")))?;

        Ok(result.items().to_vec())
    }

    async fn get_by_id(&self, table_name: &str, id: &str) -> Result<Option<Item>, ApiError> {
        let result = self
            .client
            .get_item()
            .table_name(table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("get_item failed: {e}")))?;

        Ok(result.item().filter(|item| !item.is_empty()).cloned())
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), ApiError> {
        let mut request = self.client.put_item().table_name(table_name);
        for (name, value) in item {
            request = request.item(name, value);
        }
        request
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("put_item failed: {e}")))?;

        Ok(())
    }
}

// ========== CODEC ==========
// Numbers are numeric-typed attributes parsed back with integer parsing,
// bools are boolean-typed, and `minOrder` is omitted entirely when absent.

pub fn table_to_item(table: &Table) -> Item {
    let mut item = Item::new();
    item.insert("id".to_string(), AttributeValue::S(table.id.clone()));
    item.insert("number".to_string(), AttributeValue::N(table.number.to_string()));
    item.insert("places".to_string(), AttributeValue::N(table.places.to_string()));
    item.insert("isVip".to_string(), AttributeValue::Bool(table.is_vip));
    if let Some(min_order) = table.min_order {
        item.insert("minOrder".to_string(), AttributeValue::N(min_order.to_string()));
    }
    item
}

pub fn table_from_item(item: &Item) -> Result<Table, ApiError> {
    Ok(Table {
        id: required_s(item, "id")?,
        number: required_n(item, "number")?,
        places: required_n(item, "places")?,
        is_vip: required_bool(item, "isVip")?,
        min_order: optional_n(item, "minOrder")?,
    })
}

pub fn reservation_to_item(reservation: &Reservation) -> Item {
    let mut item = Item::new();
    item.insert(
        "id".to_string(),
        AttributeValue::S(reservation.reservation_id.clone()),
    );
    item.insert(
        "tableId".to_string(),
        AttributeValue::S(reservation.table_id.clone()),
    );
    item.insert(
        "customerName".to_string(),
        AttributeValue::S(reservation.customer_name.clone()),
    );
    item.insert(
        "reservationTime".to_string(),
        AttributeValue::S(reservation.reservation_time.clone()),
    );
    item
}

pub fn reservation_from_item(item: &Item) -> Result<Reservation, ApiError> {
    Ok(Reservation {
        reservation_id: required_s(item, "id")?,
        table_id: required_s(item, "tableId")?,
        customer_name: required_s(item, "customerName")?,
        reservation_time: required_s(item, "reservationTime")?,
    })
}

fn required_s(item: &Item, field: &str) -> Result<String, ApiError> {
    item.get(field)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| decode_error(field))
}

fn required_n(item: &Item, field: &str) -> Result<i32, ApiError> {
    item.get(field)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| decode_error(field))?
        .parse::<i32>()
        .map_err(|_| decode_error(field))
}

fn required_bool(item: &Item, field: &str) -> Result<bool, ApiError> {
    item.get(field)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| decode_error(field))
}

fn optional_n(item: &Item, field: &str) -> Result<Option<i32>, ApiError> {
    match item.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_n()
            .map_err(|_| decode_error(field))?
            .parse::<i32>()
            .map(Some)
            .map_err(|_| decode_error(field)),
    }
}

fn decode_error(field: &str) -> ApiError {
    ApiError::Upstream(format!("malformed item attribute: {field}"))
}

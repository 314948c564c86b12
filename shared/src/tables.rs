use crate::cognito::IdentityProvider;
use crate::dynamo::{table_from_item, table_to_item, BookingStore};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::types::{parse_body, CreateTableRequest, CreateTableResponse, Table};
use crate::AppState;

/// GET /tables: every table, sorted ascending by numeric id regardless of
/// scan order.
pub async fn list_tables<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
) -> Result<ApiResponse, ApiError> {
    let items = state.store.scan_all(&state.config.tables_table).await?;
    let mut tables = items
        .iter()
        .map(table_from_item)
        .collect::<Result<Vec<_>, _>>()?;

    // ids are digit strings; a stray non-numeric id sorts last instead of
    // failing the whole listing
    tables.sort_by_key(|table| table.id.parse::<i64>().unwrap_or(i64::MAX));

    ApiResponse::ok(&tables)
}

/// GET /tables/{id}.
pub async fn get_table<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
    id: &str,
) -> Result<ApiResponse, ApiError> {
    let item = state
        .store
        .get_by_id(&state.config.tables_table, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Table not found with id: {id}")))?;

    ApiResponse::ok(table_from_item(&item)?)
}

/// POST /tables: unconditional upsert keyed on the client-supplied id.
pub async fn create_table<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
    body: Option<&str>,
) -> Result<ApiResponse, ApiError> {
    let request: CreateTableRequest = parse_body(body)?;
    let table = Table {
        id: request.id,
        number: request.number,
        places: request.places,
        is_vip: request.is_vip,
        min_order: request.min_order,
    };

    state
        .store
        .put_item(&state.config.tables_table, table_to_item(&table))
        .await?;

    tracing::info!("table created: {}", table.id);
    ApiResponse::ok(CreateTableResponse { id: table.id })
}

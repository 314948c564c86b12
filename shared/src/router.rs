use crate::cognito::IdentityProvider;
use crate::dynamo::BookingStore;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::types::ApiRequest;
use crate::{auth, reservations, tables, AppState};

/// Dispatch a request to its handler and map every failure to a structured
/// response. No error leaves this function.
pub async fn handle<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
    request: ApiRequest,
) -> ApiResponse {
    tracing::info!("{} {}", request.http_method, request.path);

    match dispatch(state, &request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("{} {} failed: {err}", request.http_method, request.path);
            ApiResponse::from(&err)
        }
    }
}

async fn dispatch<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
    request: &ApiRequest,
) -> Result<ApiResponse, ApiError> {
    let body = request.body.as_deref();

    match (request.http_method.as_str(), request.path.as_str()) {
        ("POST", "/signup") => auth::signup(state, body).await,
        ("POST", "/signin") => auth::signin(state, body).await,
        ("GET", "/tables") => tables::list_tables(state).await,
        ("POST", "/tables") => tables::create_table(state, body).await,
        ("GET", "/reservations") => reservations::list_reservations(state).await,
        ("POST", "/reservations") => reservations::create_reservation(state, body).await,
        ("GET", path) => match table_id_segment(path) {
            Some(id) => tables::get_table(state, id).await,
            None => Err(ApiError::RouteNotFound),
        },
        _ => Err(ApiError::RouteNotFound),
    }
}

/// `/tables/{id}` matches only when the trailing segment is one or more
/// digits; non-numeric or multi-segment suffixes fall through to the 400
/// route miss.
fn table_id_segment(path: &str) -> Option<&str> {
    let id = path.strip_prefix("/tables/")?;
    (!id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())).then_some(id)
}

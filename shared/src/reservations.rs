use uuid::Uuid;

use crate::cognito::IdentityProvider;
use crate::dynamo::{reservation_from_item, reservation_to_item, BookingStore};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::types::{parse_body, CreateReservationRequest, CreateReservationResponse, Reservation};
use crate::AppState;

/// GET /reservations: scan order, no explicit sort.
pub async fn list_reservations<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
) -> Result<ApiResponse, ApiError> {
    let items = state
        .store
        .scan_all(&state.config.reservations_table)
        .await?;
    let reservations = items
        .iter()
        .map(reservation_from_item)
        .collect::<Result<Vec<_>, _>>()?;

    ApiResponse::ok(&reservations)
}

/// POST /reservations: accepted as-is — no check that the table exists and
/// no overlap detection.
pub async fn create_reservation<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
    body: Option<&str>,
) -> Result<ApiResponse, ApiError> {
    let request: CreateReservationRequest = parse_body(body)?;
    let reservation = Reservation {
        reservation_id: Uuid::new_v4().to_string(),
        table_id: request.table_id,
        customer_name: request.customer_name,
        reservation_time: request.reservation_time,
    };

    state
        .store
        .put_item(
            &state.config.reservations_table,
            reservation_to_item(&reservation),
        )
        .await?;

    tracing::info!("reservation created: {}", reservation.reservation_id);
    ApiResponse::ok(CreateReservationResponse {
        reservation_id: reservation.reservation_id,
    })
}

use crate::cognito::IdentityProvider;
use crate::dynamo::BookingStore;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::types::{parse_body, Credentials};
use crate::validation::validate_credentials;
use crate::AppState;

/// POST /signup: validate, resolve the pool, reject duplicates, create the
/// account, then activate the password.
pub async fn signup<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
    body: Option<&str>,
) -> Result<ApiResponse, ApiError> {
    let credentials: Credentials = parse_body(body)?;
    let (email, password) =
        validate_credentials(credentials.email.as_deref(), credentials.password.as_deref())?;

    tracing::info!("signup requested for {email}");

    let pool_id = resolve_pool(state).await?;

    if state.identity.account_exists(&pool_id, email).await? {
        return Err(ApiError::UserExists);
    }

    state.identity.create_account(&pool_id, email).await?;
    // No rollback from here: if password activation fails the account is
    // left without a usable password.
    state
        .identity
        .set_permanent_password(&pool_id, email, password)
        .await?;

    tracing::info!("user created: {email}");
    Ok(ApiResponse::message(200, "User created successfully"))
}

/// POST /signin: validate, resolve pool and client, authenticate, return
/// the bearer token.
pub async fn signin<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
    body: Option<&str>,
) -> Result<ApiResponse, ApiError> {
    let credentials: Credentials = parse_body(body)?;
    let (email, password) =
        validate_credentials(credentials.email.as_deref(), credentials.password.as_deref())?;

    tracing::info!("signin requested for {email}");

    let pool_id = resolve_pool(state).await?;
    let client_id = state
        .identity
        .resolve_client_id(&pool_id)
        .await?
        .ok_or_else(|| ApiError::InvalidInput("Client ID not found".to_string()))?;

    let token = state
        .identity
        .authenticate(&pool_id, &client_id, email, password)
        .await?;

    ApiResponse::ok(token)
}

async fn resolve_pool<I: IdentityProvider, S: BookingStore>(
    state: &AppState<I, S>,
) -> Result<String, ApiError> {
    state
        .identity
        .resolve_pool_id(&state.config.user_pool)
        .await?
        .ok_or_else(|| ApiError::InvalidInput("User pool not found".to_string()))
}

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::types::{AttributeType, AuthFlowType, MessageActionType};
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;

use crate::error::ApiError;
use crate::types::AuthToken;

/// Narrow contract over the identity provider. Pool and client resolution is
/// a linear scan on every call; pool membership can change between
/// invocations, so nothing is cached here. A caching decorator can wrap this
/// trait without touching the router.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a logical pool name to its pool id by exact name match.
    async fn resolve_pool_id(&self, pool_name: &str) -> Result<Option<String>, ApiError>;

    /// First app client registered against the pool. The deployment assumes
    /// exactly one client per pool.
    async fn resolve_client_id(&self, pool_id: &str) -> Result<Option<String>, ApiError>;

    /// Pool-wide search for an account with the given email attribute.
    async fn account_exists(&self, pool_id: &str, email: &str) -> Result<bool, ApiError>;

    /// Create an account with username = email and a suppressed welcome
    /// message.
    async fn create_account(&self, pool_id: &str, email: &str) -> Result<(), ApiError>;

    /// Set the password directly to permanent, bypassing the
    /// temporary-password flow.
    async fn set_permanent_password(
        &self,
        pool_id: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError>;

    /// Admin-initiated password auth. Returns the id token as the bearer
    /// token; rejected credentials or an absent authentication result fail
    /// with `AuthFailed`.
    async fn authenticate(
        &self,
        pool_id: &str,
        client_id: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthToken, ApiError>;
}

/// Cognito-backed implementation.
pub struct CognitoIdentity {
    client: CognitoClient,
}

impl CognitoIdentity {
    pub fn new(client: CognitoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for CognitoIdentity {
    async fn resolve_pool_id(&self, pool_name: &str) -> Result<Option<String>, ApiError> {
        let pools = self
            .client
            .list_user_pools()
            .max_results(60)
            .send()
            .await
            .map_err(|e| upstream("list_user_pools", e))?;

        Ok(pools
            .user_pools()
            .iter()
            .find(|pool| pool.name() == Some(pool_name))
            .and_then(|pool| pool.id())
            .map(|id| id.to_string()))
    }

    async fn resolve_client_id(&self, pool_id: &str) -> Result<Option<String>, ApiError> {
        let clients = self
            .client
            .list_user_pool_clients()
            .user_pool_id(pool_id)
            .send()
            .await
            .map_err(|e| upstream("list_user_pool_clients", e))?;

        Ok(clients
            .user_pool_clients()
            .first()
            .and_then(|client| client.client_id())
            .map(|id| id.to_string()))
    }

    async fn account_exists(&self, pool_id: &str, email: &str) -> Result<bool, ApiError> {
        let users = self
            .client
            .list_users()
            .user_pool_id(pool_id)
            .filter(format!("email = \"{email}\""))
            .send()
            .await
            .map_err(|e| upstream("list_users", e))?;

        Ok(!users.users().is_empty())
    }

    async fn create_account(&self, pool_id: &str, email: &str) -> Result<(), ApiError> {
        let email_attribute = AttributeType::builder()
            .name("email")
            .value(email)
            .build()
            .map_err(|e| ApiError::Upstream(format!("invalid email attribute: {e}")))?;

        self.client
            .admin_create_user()
            .user_pool_id(pool_id)
            .username(email)
            .user_attributes(email_attribute)
            .message_action(MessageActionType::Suppress)
            .send()
            .await
            .map_err(|e| upstream("admin_create_user", e))?;

        Ok(())
    }

    async fn set_permanent_password(
        &self,
        pool_id: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.client
            .admin_set_user_password()
            .user_pool_id(pool_id)
            .username(email)
            .password(password)
            .permanent(true)
            .send()
            .await
            .map_err(|e| upstream("admin_set_user_password", e))?;

        Ok(())
    }

    async fn authenticate(
        &self,
        pool_id: &str,
        client_id: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthToken, ApiError> {
        let result = self
            .client
            .admin_initiate_auth()
            .auth_flow(AuthFlowType::AdminNoSrpAuth)
            .user_pool_id(pool_id)
            .client_id(client_id)
            .auth_parameters("USERNAME", email)
            .auth_parameters("PASSWORD", password)
            .send()
            .await;

        match result {
            Ok(output) => match output.authentication_result().and_then(|r| r.id_token()) {
                Some(token) => Ok(AuthToken {
                    access_token: token.to_string(),
                }),
                None => {
                    tracing::error!("no authentication result returned for {email}");
                    Err(ApiError::AuthFailed)
                }
            },
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_not_authorized_exception()
                    || service_err.is_user_not_found_exception()
                {
                    tracing::info!("authentication rejected for {email}");
                    Err(ApiError::AuthFailed)
                } else {
                    Err(ApiError::Upstream(format!(
                        "admin_initiate_auth failed: {service_err}"
                    )))
                }
            }
        }
    }
}

fn upstream(operation: &str, err: impl std::fmt::Display) -> ApiError {
    ApiError::Upstream(format!("{operation} failed: {err}"))
}

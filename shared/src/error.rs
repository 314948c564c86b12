use thiserror::Error;

/// Failure taxonomy for the API core. Business rejections ("user exists",
/// "auth failed") are values rather than generic exceptions, so each gateway
/// operation reports exactly what went wrong and the router maps every kind
/// to a single status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing email, password, or required body fields.
    #[error("{0}")]
    InvalidInput(String),

    /// No route matches the request's path and method.
    #[error("Unsupported path or method")]
    RouteNotFound,

    /// A lookup missed, e.g. an unknown table id.
    #[error("{0}")]
    NotFound(String),

    /// Signup against an email that already has an account in the pool.
    #[error("User already exists")]
    UserExists,

    /// Cognito rejected the credentials or returned no authentication result.
    #[error("Authentication failed")]
    AuthFailed,

    /// An identity-provider or store call failed.
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::RouteNotFound | Self::UserExists | Self::AuthFailed => {
                400
            }
            Self::NotFound(_) => 404,
            Self::Upstream(_) => 500,
        }
    }
}

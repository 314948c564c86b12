use std::env;

/// Environment-provided names for the backing resources. The values are
/// opaque strings to the core; a missing variable is a startup failure, not
/// a per-request one.
#[derive(Debug, Clone)]
pub struct Config {
    pub tables_table: String,
    pub reservations_table: String,
    pub user_pool: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            tables_table: env::var("tables_table").expect("tables_table must be set"),
            reservations_table: env::var("reservations_table")
                .expect("reservations_table must be set"),
            user_pool: env::var("booking_userpool").expect("booking_userpool must be set"),
        }
    }
}

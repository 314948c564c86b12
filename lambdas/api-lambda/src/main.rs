use std::sync::Arc;

use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use aws_sdk_dynamodb::Client as DynamoClient;
use booking_shared::cognito::CognitoIdentity;
use booking_shared::config::Config;
use booking_shared::dynamo::DynamoStore;
use booking_shared::AppState;
use lambda_http::{run, service_fn, tracing, Error, Request};

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // AWS clients are built once at startup and injected into the router
    let config = aws_config::load_from_env().await;
    let state = AppState::new(
        CognitoIdentity::new(CognitoClient::new(&config)),
        DynamoStore::new(DynamoClient::new(&config)),
        Config::from_env(),
    );

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}

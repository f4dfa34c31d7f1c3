use api_patterns::common::errors::Error;
use api_patterns::common::{config, init_tracing};
use api_patterns::filters::api::route;
use api_patterns::filters::store::DynamoFilterStore;
use aws_config::BehaviorVersion;
use lambda_http::{
    run, service_fn, Error as LambdaError, Request as LambdaRequest,
    Response as LambdaResponse,
};

async fn process_request(
    request: LambdaRequest,
    store: &DynamoFilterStore,
) -> Result<LambdaResponse<String>, LambdaError> {
    match route(request, store).await {
        Ok(val) => Ok(val),
        Err(Error::HttpError(val)) => Ok(val),
        Err(Error::LambdaError(err)) => Err(err),
    }
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    init_tracing();

    let table_name = config::table_name();
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = DynamoFilterStore::new(aws_sdk_dynamodb::Client::new(&aws_config), table_name);

    run(service_fn(|request: LambdaRequest| {
        process_request(request, &store)
    }))
    .await
}

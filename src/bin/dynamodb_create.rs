use api_patterns::common::event::MappedEvent;
use api_patterns::common::{config, init_tracing};
use api_patterns::filters::handlers;
use api_patterns::filters::store::{DynamoFilterStore, PutOutput};
use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn process_event(
    event: LambdaEvent<MappedEvent>,
    store: &DynamoFilterStore,
) -> Result<PutOutput, Error> {
    Ok(handlers::create(event.payload, store).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let table_name = config::table_name();
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = DynamoFilterStore::new(aws_sdk_dynamodb::Client::new(&aws_config), table_name);

    run(service_fn(|event: LambdaEvent<MappedEvent>| {
        process_event(event, &store)
    }))
    .await
}

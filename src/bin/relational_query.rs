use api_patterns::common::config::DbConfig;
use api_patterns::common::event::MappedEvent;
use api_patterns::common::init_tracing;
use api_patterns::relational::handler;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // Settings are read per invocation; a missing variable surfaces as the
    // generic error.
    run(service_fn(|event: LambdaEvent<MappedEvent>| async move {
        Ok::<_, Error>(handler::query(event.payload, DbConfig::from_env).await?)
    }))
    .await
}

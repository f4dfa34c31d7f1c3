use api_patterns::common::init_tracing;
use api_patterns::filters::handlers;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    run(service_fn(|_event: LambdaEvent<Value>| async {
        Ok::<_, Error>(handlers::hello())
    }))
    .await
}

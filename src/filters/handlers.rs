//! Handlers behind the non-proxy integration.
//!
//! Each one reads its fields from the mapped event, makes exactly one store
//! call and returns the store output as is. Failures are not handled here.

use serde::Serialize;
use tracing::info;

use crate::common::event::{EventError, MappedEvent};
use crate::filters::item::{CreateFiltersRequest, UpdateFiltersRequest, USER_ID};
use crate::filters::store::{
    DeleteOutput, FilterStore, GetOutput, PutOutput, ScanOutput, StoreError, UpdateOutput,
};

const HELLO_BODY: &str = "hello from lambda";

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HelloResponse {
    pub body: &'static str,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

pub fn hello() -> HelloResponse {
    HelloResponse {
        body: HELLO_BODY,
        status_code: 200,
    }
}

pub async fn create(event: MappedEvent, store: &dyn FilterStore) -> Result<PutOutput, HandlerError> {
    info!("Received event: {:?}", event);
    let request = event.body::<CreateFiltersRequest>()?;

    Ok(store.put(request.into()).await?)
}

pub async fn list(event: MappedEvent, store: &dyn FilterStore) -> Result<ScanOutput, HandlerError> {
    info!("Received event: {:?}", event);

    Ok(store.scan().await?)
}

pub async fn get(event: MappedEvent, store: &dyn FilterStore) -> Result<GetOutput, HandlerError> {
    info!("Received event: {:?}", event);
    let user_id = event.path_param(USER_ID)?;

    Ok(store.get(user_id).await?)
}

pub async fn delete(
    event: MappedEvent,
    store: &dyn FilterStore,
) -> Result<DeleteOutput, HandlerError> {
    info!("Received event: {:?}", event);
    let user_id = event.path_param(USER_ID)?;

    Ok(store.delete(user_id).await?)
}

pub async fn update(
    event: MappedEvent,
    store: &dyn FilterStore,
) -> Result<UpdateOutput, HandlerError> {
    info!("Received event: {:?}", event);
    let user_id = event.path_param(USER_ID)?;
    let request = event.body::<UpdateFiltersRequest>()?;

    Ok(store.update(user_id, request.filters).await?)
}

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::filters::item::{filters_to_attribute, item_to_json, Filter, FilterRecord, USER_ID};

const UPDATE_FILTERS_EXPRESSION: &str = "SET filters = :fl";
const FILTERS_PLACEHOLDER: &str = ":fl";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Sdk(Box<dyn std::error::Error + Send + Sync>),
    #[error("unsupported attribute type `{0}` in store response")]
    UnsupportedAttribute(&'static str),
}

impl StoreError {
    pub fn sdk<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        StoreError::Sdk(Box::new(err))
    }
}

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanOutput {
    pub items: Vec<Value>,
    pub count: i32,
    pub scanned_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_key: Option<Value>,
}

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Value>,
}

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

/// One method per call the filter handlers make against the table.
#[async_trait]
pub trait FilterStore: Send + Sync {
    async fn put(&self, record: FilterRecord) -> Result<PutOutput, StoreError>;

    async fn scan(&self) -> Result<ScanOutput, StoreError>;

    async fn get(&self, user_id: &str) -> Result<GetOutput, StoreError>;

    async fn delete(&self, user_id: &str) -> Result<DeleteOutput, StoreError>;

    /// Overwrites the whole `filters` attribute and returns the updated values.
    async fn update(&self, user_id: &str, filters: Vec<Filter>)
        -> Result<UpdateOutput, StoreError>;
}

pub struct DynamoFilterStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoFilterStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

fn key(user_id: &str) -> AttributeValue {
    AttributeValue::S(user_id.into())
}

fn optional_item(item: Option<HashMap<String, AttributeValue>>) -> Result<Option<Value>, StoreError> {
    item.map(item_to_json).transpose()
}

#[async_trait]
impl FilterStore for DynamoFilterStore {
    async fn put(&self, record: FilterRecord) -> Result<PutOutput, StoreError> {
        info!("Putting filters for user: {}", record.user_id);
        let output = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record.into()))
            .send()
            .await
            .map_err(StoreError::sdk)?;

        Ok(PutOutput {
            attributes: optional_item(output.attributes)?,
        })
    }

    async fn scan(&self) -> Result<ScanOutput, StoreError> {
        info!("Scanning table: {}", self.table_name);
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(StoreError::sdk)?;

        let items = output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(item_to_json)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ScanOutput {
            items,
            count: output.count,
            scanned_count: output.scanned_count,
            last_evaluated_key: optional_item(output.last_evaluated_key)?,
        })
    }

    async fn get(&self, user_id: &str) -> Result<GetOutput, StoreError> {
        info!("Getting filters for user: {}", user_id);
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(USER_ID, key(user_id))
            .send()
            .await
            .map_err(StoreError::sdk)?;

        Ok(GetOutput {
            item: optional_item(output.item)?,
        })
    }

    async fn delete(&self, user_id: &str) -> Result<DeleteOutput, StoreError> {
        info!("Deleting filters for user: {}", user_id);
        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(USER_ID, key(user_id))
            .send()
            .await
            .map_err(StoreError::sdk)?;

        Ok(DeleteOutput {
            attributes: optional_item(output.attributes)?,
        })
    }

    async fn update(
        &self,
        user_id: &str,
        filters: Vec<Filter>,
    ) -> Result<UpdateOutput, StoreError> {
        info!("Updating filters for user: {}", user_id);
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(USER_ID, key(user_id))
            .update_expression(UPDATE_FILTERS_EXPRESSION)
            .expression_attribute_values(FILTERS_PLACEHOLDER, filters_to_attribute(filters))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(StoreError::sdk)?;

        Ok(UpdateOutput {
            attributes: optional_item(output.attributes)?,
        })
    }
}

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::filters::item::{Filter, FilterRecord};
use crate::filters::store::{
    DeleteOutput, FilterStore, GetOutput, PutOutput, ScanOutput, StoreError, UpdateOutput,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Put(FilterRecord),
    Scan,
    Get(String),
    Delete(String),
    Update(String, Vec<Filter>),
}

/// Records every call and answers with canned outputs.
#[derive(Default)]
pub struct CapturingStore {
    calls: Mutex<Vec<Call>>,
}

impl CapturingStore {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl FilterStore for CapturingStore {
    async fn put(&self, record: FilterRecord) -> Result<PutOutput, StoreError> {
        self.record(Call::Put(record));
        Ok(PutOutput::default())
    }

    async fn scan(&self) -> Result<ScanOutput, StoreError> {
        self.record(Call::Scan);
        Ok(ScanOutput {
            items: vec![json!({"userId": "A4dce9f0", "filters": []})],
            count: 1,
            scanned_count: 1,
            last_evaluated_key: None,
        })
    }

    async fn get(&self, user_id: &str) -> Result<GetOutput, StoreError> {
        self.record(Call::Get(user_id.into()));
        Ok(GetOutput {
            item: Some(json!({"userId": user_id, "filters": []})),
        })
    }

    async fn delete(&self, user_id: &str) -> Result<DeleteOutput, StoreError> {
        self.record(Call::Delete(user_id.into()));
        Ok(DeleteOutput::default())
    }

    async fn update(
        &self,
        user_id: &str,
        filters: Vec<Filter>,
    ) -> Result<UpdateOutput, StoreError> {
        self.record(Call::Update(user_id.into(), filters.clone()));
        Ok(UpdateOutput {
            attributes: Some(json!({ "filters": filters })),
        })
    }
}

/// Fails every call the way an unreachable table would.
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Sdk("service unavailable".into())
}

#[async_trait]
impl FilterStore for FailingStore {
    async fn put(&self, _record: FilterRecord) -> Result<PutOutput, StoreError> {
        Err(unavailable())
    }

    async fn scan(&self) -> Result<ScanOutput, StoreError> {
        Err(unavailable())
    }

    async fn get(&self, _user_id: &str) -> Result<GetOutput, StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _user_id: &str) -> Result<DeleteOutput, StoreError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _user_id: &str,
        _filters: Vec<Filter>,
    ) -> Result<UpdateOutput, StoreError> {
        Err(unavailable())
    }
}

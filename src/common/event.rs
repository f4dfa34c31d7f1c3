use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("missing path parameter `{0}`")]
    MissingPathParam(String),
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Event rendered by the non-proxy API Gateway mapping template.
///
/// Sections the template leaves out default to empty values.
#[derive(Debug, Default, Deserialize)]
pub struct MappedEvent {
    #[serde(rename = "body-json", default)]
    pub body_json: Value,
    #[serde(default)]
    pub params: Params,
    #[serde(rename = "stage-variables", default)]
    pub stage_variables: HashMap<String, String>,
    #[serde(default)]
    pub context: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Params {
    #[serde(default)]
    pub path: HashMap<String, String>,
    #[serde(default)]
    pub querystring: HashMap<String, String>,
    #[serde(default)]
    pub header: HashMap<String, String>,
}

impl MappedEvent {
    pub fn path_param(&self, name: &str) -> Result<&str, EventError> {
        self.params
            .path
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| EventError::MissingPathParam(name.into()))
    }

    pub fn body<T: DeserializeOwned>(&self) -> Result<T, EventError> {
        Ok(T::deserialize(&self.body_json)?)
    }
}

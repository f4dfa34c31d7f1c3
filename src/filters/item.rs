use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::filters::store::StoreError;

pub const USER_ID: &str = "userId";
pub const FILTERS: &str = "filters";

/// One filter criterion, stored exactly as the caller sent it.
///
/// The documented shape is `{"name": "city", "values": ["Toronto"]}`; other
/// keys, value types and the `filter_name` / `filter_value` spelling are kept
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter(pub Map<String, Value>);

#[derive(Debug, Clone, PartialEq)]
pub struct FilterRecord {
    pub user_id: String,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFiltersRequest {
    pub user_id: String,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFiltersRequest {
    pub filters: Vec<Filter>,
}

impl From<CreateFiltersRequest> for FilterRecord {
    fn from(request: CreateFiltersRequest) -> Self {
        Self {
            user_id: request.user_id,
            filters: request.filters,
        }
    }
}

impl From<Filter> for AttributeValue {
    fn from(filter: Filter) -> Self {
        object_to_attribute(filter.0)
    }
}

impl From<FilterRecord> for HashMap<String, AttributeValue> {
    fn from(record: FilterRecord) -> Self {
        HashMap::from([
            (USER_ID.to_string(), AttributeValue::S(record.user_id)),
            (FILTERS.to_string(), filters_to_attribute(record.filters)),
        ])
    }
}

pub fn filters_to_attribute(filters: Vec<Filter>) -> AttributeValue {
    AttributeValue::L(filters.into_iter().map(Into::into).collect())
}

pub fn json_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(val) => AttributeValue::Bool(val),
        Value::Number(val) => AttributeValue::N(val.to_string()),
        Value::String(val) => AttributeValue::S(val),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(json_to_attribute).collect())
        }
        Value::Object(map) => object_to_attribute(map),
    }
}

fn object_to_attribute(map: Map<String, Value>) -> AttributeValue {
    AttributeValue::M(
        map.into_iter()
            .map(|(key, value)| (key, json_to_attribute(value)))
            .collect(),
    )
}

/// Converts an item returned by the store into plain JSON.
pub fn item_to_json(item: HashMap<String, AttributeValue>) -> Result<Value, StoreError> {
    let mut object = Map::with_capacity(item.len());
    for (key, value) in item {
        object.insert(key, attribute_to_json(value)?);
    }

    Ok(Value::Object(object))
}

pub fn attribute_to_json(value: AttributeValue) -> Result<Value, StoreError> {
    let value = match value {
        AttributeValue::S(val) => Value::String(val),
        AttributeValue::N(val) => number_to_json(val),
        AttributeValue::Bool(val) => Value::Bool(val),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(
            values
                .into_iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => item_to_json(map)?,
        AttributeValue::Ss(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(values) => Value::Array(values.into_iter().map(number_to_json).collect()),
        AttributeValue::B(_) => return Err(StoreError::UnsupportedAttribute("B")),
        AttributeValue::Bs(_) => return Err(StoreError::UnsupportedAttribute("BS")),
        _ => return Err(StoreError::UnsupportedAttribute("unknown")),
    };

    Ok(value)
}

// Numbers travel as strings. Integers too wide for u64 keep their text so no
// digits are lost.
fn number_to_json(val: String) -> Value {
    if let Ok(int) = val.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(int) = val.parse::<u64>() {
        return Value::from(int);
    }
    if !val.contains(['.', 'e', 'E']) {
        return Value::String(val);
    }

    match val.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(number) => Value::Number(number),
        None => Value::String(val),
    }
}

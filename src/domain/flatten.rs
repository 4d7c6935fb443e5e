//! Flattens a JSON document into `/`-separated paths and scalar text, in
//! document order. `{"errors":[{"message":"x"}]}` becomes `/errors/0/message: x`.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlatField {
    pub path: String,
    pub value: String,
}

pub fn flatten(value: &Value) -> Vec<FlatField> {
    let mut fields = Vec::new();
    walk(value, String::new(), &mut fields);
    fields
}

pub fn lookup<'a>(fields: &'a [FlatField], path: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|field| field.path == path)
        .map(|field| field.value.as_str())
}

fn walk(value: &Value, path: String, fields: &mut Vec<FlatField>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                walk(child, format!("{path}/{key}"), fields);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk(child, format!("{path}/{index}"), fields);
            }
        }
        Value::String(text) => fields.push(FlatField {
            path,
            value: text.clone(),
        }),
        Value::Null | Value::Bool(_) | Value::Number(_) => fields.push(FlatField {
            path,
            value: value.to_string(),
        }),
    }
}

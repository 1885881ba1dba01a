//! Conversion from `serde_json` documents.

use crate::{Map, Mapping, Primitive, Slice, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else {
                    // Finite by construction; arbitrary precision is off.
                    Value::from(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::Primitive(Primitive::Text(s)),
            serde_json::Value::Array(items) => {
                Value::Slice(Slice::new(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(object) => Value::Map(Map::new(
                Mapping::from_text_entries(object.into_iter().map(|(k, v)| (k, Value::from(v)))),
            )),
        }
    }
}

use super::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(b),
            Value::Number(ref n) => n.serialize(serializer),
            Value::String(ref s) => serializer.serialize_str(s),
            // Raw expressions use a tagged object encoding so that they survive a round-trip
            // through self-describing formats like JSON.
            Value::Expression(ref expr) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("kind", "expression")?;
                map.serialize_entry("hcl", expr.as_str())?;
                map.end()
            }
            Value::Array(ref v) => v.serialize(serializer),
            Value::Object(ref v) => v.serialize(serializer),
        }
    }
}

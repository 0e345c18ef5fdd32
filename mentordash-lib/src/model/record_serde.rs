//! Deserialization of records from raw dashboard JSON.
//!
//! Every list endpoint returns an array of arbitrary JSON objects; the same
//! endpoint can return differently shaped objects from one row to the next.
//! The visitors below accept whatever arrives and keep object key order as
//! encountered. The table engine relies on that order for deterministic
//! flattening ("last writer wins" on collisions) and for stable column order.
//!
//! There is no write path: the admin forms that create and update entities
//! serialize typed payloads and are outside this crate.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;
use serde::de::MapAccess;
use serde::de::SeqAccess;
use serde::de::Visitor;

use super::Record;
use super::Value;

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object representing a dashboard record")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();

        // Duplicate keys replace in place, so the last occurrence wins.
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            record.insert(key, value);
        }

        Ok(record)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E>
    where
        E: Error,
    {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E>
    where
        E: Error,
    {
        Ok(Value::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E>
    where
        E: Error,
    {
        match i64::try_from(v) {
            Ok(n) => Ok(Value::Int(n)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E>
    where
        E: Error,
    {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E>
    where
        E: Error,
    {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E>
    where
        E: Error,
    {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E>
    where
        E: Error,
    {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E>
    where
        E: Error,
    {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Value, S::Error>
    where
        S: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<M>(self, map: M) -> Result<Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let record = RecordVisitor.visit_map(map)?;
        Ok(Value::Record(Box::new(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"name": "Aisha", "attempts": 3, "passed": true, "score": 87.5}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get_string("name").unwrap(), Some("Aisha"));
        assert_eq!(record.get("attempts"), Some(&Value::Int(3)));
        assert_eq!(record.get_bool("passed").unwrap(), Some(true));
        assert_eq!(record.get("score"), Some(&Value::Float(87.5)));
    }

    #[test]
    fn test_deserialize_preserves_key_order() {
        let json = r#"{"zeta": 1, "alpha": 2, "mid": 3}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        let keys: Vec<_> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_deserialize_null_and_array() {
        let json = r#"{"deleted": null, "tags": ["usmle", "step1"]}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("deleted"), Some(&Value::Null));
        assert_eq!(
            record.get("tags"),
            Some(&Value::Array(vec![
                Value::from("usmle"),
                Value::from("step1"),
            ]))
        );
    }

    #[test]
    fn test_deserialize_nested_record() {
        let json = r#"{"userId": {"email": "mentor@example.org", "role": "mentor"}}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        let user = record.get_record("userId").unwrap().unwrap();
        assert_eq!(user.get_string("email").unwrap(), Some("mentor@example.org"));
    }

    #[test]
    fn test_deserialize_array_of_records() {
        let json = r#"[{"name": "a"}, {"name": "b"}]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get_string("name").unwrap(), Some("b"));
    }

    #[test]
    fn test_deserialize_large_u64_falls_back_to_float() {
        let json = r#"{"big": 18446744073709551615}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("big"), Some(&Value::Float(u64::MAX as f64)));
    }
}

use std::collections::BTreeMap;

use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// One record of a repeatable group: sub-field name → value.
pub type GroupRecord = BTreeMap<String, String>;

/// The submitted contents of one form instance.
///
/// Serializes flat, matching the wire contract: scalar field names map to
/// string values and group names map to arrays of records, all in a single
/// JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub fields: BTreeMap<String, String>,
    pub groups: BTreeMap<String, Vec<GroupRecord>>,
}

impl FormData {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// A field counts as present only when its value is non-empty after
    /// trimming.
    pub fn has_value(&self, name: &str) -> bool {
        self.field(name).is_some_and(|v| !v.trim().is_empty())
    }

    pub fn group(&self, name: &str) -> &[GroupRecord] {
        self.groups.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Serialize for FormData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + self.groups.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        for (name, records) in &self.groups {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FormData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut data = FormData::default();
        for (name, value) in raw {
            match value {
                serde_json::Value::String(s) => {
                    data.fields.insert(name, s);
                }
                serde_json::Value::Array(items) => {
                    let mut records = Vec::with_capacity(items.len());
                    for item in items {
                        let record: GroupRecord =
                            serde_json::from_value(item).map_err(D::Error::custom)?;
                        records.push(record);
                    }
                    data.groups.insert(name, records);
                }
                serde_json::Value::Null => {
                    data.fields.insert(name, String::new());
                }
                other => {
                    return Err(D::Error::custom(format!(
                        "field '{name}' must be a string or an array of records, got {other}"
                    )));
                }
            }
        }
        Ok(data)
    }
}

/// Immutable snapshot taken at submit time. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub form_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub form_data: FormData,
    pub timestamp: jiff::Timestamp,
    /// Client-generated id correlating retries of the same submission.
    pub submission_id: Uuid,
}

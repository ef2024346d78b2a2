//! Normalized resource inventory — the input every heuristic consumes.
//!
//! A snapshot is a JSON object mapping collection names (e.g.
//! `security_groups`, `ec2_instances`) to arrays of resource records.
//! Collectors differ in how they wrap results, so normalization accepts a
//! bare array, a `{"rows": [...]}` envelope, or `null`/absent for a
//! collection that failed or was skipped. After normalization every lookup
//! has a safe empty default; heuristics never see an error from this module.

use std::collections::HashMap;

use serde_json::Value;

/// One inventoried cloud object with its attributes, kept as raw JSON.
pub type ResourceRecord = Value;

/// All resource collections from a single inventory run.
///
/// Distinguishes "collected but empty" from "not collected at all":
/// absence-of-resource rules (GuardDuty, VPC endpoints) only apply when the
/// collector actually looked.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    collections: HashMap<String, Vec<ResourceRecord>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from a parsed snapshot object.
    ///
    /// Non-object snapshots yield an empty inventory. Collection values that
    /// are neither an array, a `{"rows": [...]}` envelope, nor `null` are
    /// dropped, as are non-object array elements.
    pub fn from_json(snapshot: &Value) -> Self {
        let mut collections = HashMap::new();

        let Some(map) = snapshot.as_object() else {
            if !snapshot.is_null() {
                tracing::debug!("snapshot root is not an object, treating as empty");
            }
            return Self { collections };
        };

        for (name, value) in map {
            let rows = if let Some(arr) = value.as_array() {
                arr
            } else if let Some(arr) = value.get("rows").and_then(|v| v.as_array()) {
                arr
            } else {
                if !value.is_null() {
                    tracing::debug!(collection = %name, "unrecognized collection shape, skipping");
                }
                continue;
            };

            let records: Vec<ResourceRecord> =
                rows.iter().filter(|r| r.is_object()).cloned().collect();
            collections.insert(name.clone(), records);
        }

        Self { collections }
    }

    /// Build directly from already-normalized collections (mainly for tests
    /// and embedding callers).
    pub fn from_collections(collections: HashMap<String, Vec<ResourceRecord>>) -> Self {
        Self { collections }
    }

    /// Records for a collection, empty when absent.
    pub fn records(&self, name: &str) -> &[ResourceRecord] {
        self.collections.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the collector produced this collection at all. An empty array
    /// counts as collected.
    pub fn was_collected(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Number of records in a collection, zero when absent.
    pub fn count(&self, name: &str) -> usize {
        self.records(name).len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// String field lookup with a safe miss.
pub fn str_field<'a>(record: &'a ResourceRecord, key: &str) -> Option<&'a str> {
    record.get(key).and_then(|v| v.as_str())
}

/// Numeric field lookup. Accepts JSON numbers and numeric strings, since
/// inventory tools are inconsistent about port/count typing.
pub fn num_field(record: &ResourceRecord, key: &str) -> Option<f64> {
    match record.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Boolean field lookup, false on miss. Accepts `true`/`"true"`, the
/// credential-report convention.
pub fn bool_field(record: &ResourceRecord, key: &str) -> bool {
    match record.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Whether a string field is missing, null, or blank.
pub fn blank_field(record: &ResourceRecord, key: &str) -> bool {
    match record.get(key) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_collection() {
        let inv = Inventory::from_json(&json!({
            "vpcs": [{"vpc_id": "vpc-1"}, {"vpc_id": "vpc-2"}]
        }));
        assert_eq!(inv.count("vpcs"), 2);
        assert!(inv.was_collected("vpcs"));
    }

    #[test]
    fn rows_envelope_is_unwrapped() {
        let inv = Inventory::from_json(&json!({
            "elastic_ips": {"rows": [{"allocation_id": "eipalloc-1"}]}
        }));
        assert_eq!(inv.count("elastic_ips"), 1);
    }

    #[test]
    fn null_collection_counts_as_not_collected() {
        let inv = Inventory::from_json(&json!({
            "guardduty_detectors": null,
            "vpcs": []
        }));
        assert!(!inv.was_collected("guardduty_detectors"));
        assert!(inv.was_collected("vpcs"));
        assert_eq!(inv.count("vpcs"), 0);
    }

    #[test]
    fn absent_collection_defaults_to_empty() {
        let inv = Inventory::from_json(&json!({}));
        assert!(inv.records("ec2_instances").is_empty());
        assert!(!inv.was_collected("ec2_instances"));
    }

    #[test]
    fn non_object_rows_are_dropped() {
        let inv = Inventory::from_json(&json!({
            "vpcs": [{"vpc_id": "vpc-1"}, "garbage", 42]
        }));
        assert_eq!(inv.count("vpcs"), 1);
    }

    #[test]
    fn prebuilt_collections_are_taken_as_is() {
        let mut collections = HashMap::new();
        collections.insert("vpcs".to_string(), vec![json!({"vpc_id": "vpc-1"})]);
        let inv = Inventory::from_collections(collections);
        assert_eq!(inv.count("vpcs"), 1);
        assert!(Inventory::new().is_empty());
    }

    #[test]
    fn non_object_snapshot_is_empty() {
        assert!(Inventory::from_json(&json!([1, 2, 3])).is_empty());
        assert!(Inventory::from_json(&Value::Null).is_empty());
    }

    #[test]
    fn field_helpers_tolerate_shapes() {
        let rec = json!({
            "from_port": "22",
            "password_enabled": "TRUE",
            "association_id": "",
            "name": null
        });
        assert_eq!(num_field(&rec, "from_port"), Some(22.0));
        assert!(bool_field(&rec, "password_enabled"));
        assert!(blank_field(&rec, "association_id"));
        assert!(blank_field(&rec, "name"));
        assert!(blank_field(&rec, "missing"));
        assert_eq!(str_field(&rec, "missing"), None);
        assert_eq!(num_field(&rec, "missing"), None);
        assert!(!bool_field(&rec, "missing"));
    }
}

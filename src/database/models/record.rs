use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted record. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub accessory: Option<String>,
}

/// Validated input for creating a record; every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub category: String,
    pub accessory: String,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        accessory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            accessory: accessory.into(),
        }
    }

    pub(crate) fn into_record(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            category: self.category,
            accessory: Some(self.accessory),
        }
    }
}

/// Partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub accessory: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.accessory.is_none()
    }

    pub fn apply_to(&self, record: &mut Record) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(category) = &self.category {
            record.category = category.clone();
        }
        if let Some(accessory) = &self.accessory {
            record.accessory = Some(accessory.clone());
        }
    }
}

/// Records the service is seeded with in development. Ralph is the default
/// admin identity and Lulu the default login.
pub fn fixture_records() -> Vec<NewRecord> {
    vec![
        NewRecord::new("Ralph", "Tiger", "Gold chain"),
        NewRecord::new("Evelina", "Hedgehog", "Comb"),
        NewRecord::new("Otto", "Otter", "Stone"),
        NewRecord::new("Mayo", "Dog", "Sweater"),
        NewRecord::new("Kaaaarl", "Llama", "Toque"),
        NewRecord::new("Lulu", "Dog", "Toque"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ralph() -> Record {
        NewRecord::new("Ralph", "Tiger", "Gold chain").into_record(1)
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut record = ralph();
        let patch = RecordPatch {
            accessory: Some("Silver chain".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut record);

        assert_eq!(record.name, "Ralph");
        assert_eq!(record.category, "Tiger");
        assert_eq!(record.accessory.as_deref(), Some("Silver chain"));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut record = ralph();
        let patch = RecordPatch::default();
        assert!(patch.is_empty());

        patch.apply_to(&mut record);
        assert_eq!(record, ralph());
    }

    #[test]
    fn test_record_serializes_with_api_field_names() {
        let value = serde_json::to_value(ralph()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Ralph");
        assert_eq!(value["category"], "Tiger");
        assert_eq!(value["accessory"], "Gold chain");
    }
}

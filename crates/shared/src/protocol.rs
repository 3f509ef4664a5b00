use serde::{Deserialize, Serialize};

use crate::domain::TreeId;

/// A registered tree as returned by `GET /trees`.
///
/// `species` is free text and may be empty; the other fields are required by
/// the form before a record ever reaches the server. `planting_date` is a
/// calendar date string (`YYYY-MM-DD`) with no time component and is carried
/// verbatim; display formatting happens in the UI layer only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRecord {
    pub id: TreeId,
    pub custom_name: String,
    #[serde(default)]
    pub species: String,
    pub location: String,
    pub planting_date: String,
}

/// Body shape for `POST /trees` and `PUT /trees/{id}`: a record without its
/// id (the server assigns ids on create; update targets the id in the URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeFields {
    pub custom_name: String,
    pub species: String,
    pub location: String,
    pub planting_date: String,
}

impl TreeRecord {
    pub fn fields(&self) -> TreeFields {
        TreeFields {
            custom_name: self.custom_name.clone(),
            species: self.species.clone(),
            location: self.location.clone(),
            planting_date: self.planting_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_fields_serialize_without_id() {
        let fields = TreeFields {
            custom_name: "Oak".to_string(),
            species: String::new(),
            location: "Yard".to_string(),
            planting_date: "2024-01-01".to_string(),
        };
        let value = serde_json::to_value(&fields).expect("serialize");
        let object = value.as_object().expect("object");
        assert!(!object.contains_key("id"));
        assert_eq!(object["custom_name"], "Oak");
        assert_eq!(object["species"], "");
        assert_eq!(object["location"], "Yard");
        assert_eq!(object["planting_date"], "2024-01-01");
    }

    #[test]
    fn tree_record_deserializes_wire_shape() {
        let record: TreeRecord = serde_json::from_str(
            r#"{"id":"42","custom_name":"Ipê","species":"Handroanthus","location":"Park","planting_date":"2023-05-10"}"#,
        )
        .expect("deserialize");
        assert_eq!(record.id, TreeId::from("42"));
        assert_eq!(record.planting_date, "2023-05-10");
    }

    #[test]
    fn tree_record_tolerates_missing_species() {
        let record: TreeRecord = serde_json::from_str(
            r#"{"id":"7","custom_name":"Pine","location":"Hill","planting_date":"2022-11-03"}"#,
        )
        .expect("deserialize");
        assert!(record.species.is_empty());
    }
}

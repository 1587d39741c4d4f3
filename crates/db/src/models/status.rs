use serde::{Deserialize, Serialize};

/// Publication state shared by all recruitment entities.
///
/// `inactive` records stay in the database but are meant to be filtered out
/// of public listings by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Active,
    Inactive,
}

impl PublishStatus {
    /// The value stored in BSON documents and accepted in query filters.
    pub fn as_str(self) -> &'static str {
        match self {
            PublishStatus::Active => "active",
            PublishStatus::Inactive => "inactive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(PublishStatus::Active).unwrap(),
            serde_json::json!("active")
        );
        assert_eq!(
            serde_json::from_value::<PublishStatus>(serde_json::json!("inactive")).unwrap(),
            PublishStatus::Inactive
        );
    }

    #[test]
    fn as_str_matches_serde_form() {
        for status in [PublishStatus::Active, PublishStatus::Inactive] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::json!(status.as_str())
            );
        }
    }
}

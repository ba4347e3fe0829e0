// src/domain/disease_type.rs

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a disease type.
pub type DiseaseTypeId = i64;

/// Category of disease (viral, bacterial, ...).
///
/// The only entity with a surrogate key: `id` is assigned by the store on
/// create and whatever value the caller puts there is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseType {
    pub id: DiseaseTypeId,
    pub description: String,
}

impl DiseaseType {
    /// Unsaved disease type. `id` stays 0 until the store assigns one.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
        }
    }

    /// Same value with the id the store assigned.
    pub fn with_id(mut self, id: DiseaseTypeId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unsaved() {
        let kind = DiseaseType::new("Viral");
        assert_eq!(kind.id, 0);
        assert_eq!(kind.with_id(7).id, 7);
    }
}

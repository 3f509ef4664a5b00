//! Form controller: field buffers, validation, and the edit session state.

use shared::{
    domain::TreeId,
    protocol::{TreeFields, TreeRecord},
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("The fields {} are required!", .fields.join(", "))]
    MissingRequired { fields: Vec<&'static str> },
    #[error("No tree is selected for update.")]
    EditingIdMissing,
}

/// Client-side form state. `editing` is the edit session: `Some(id)` while a
/// record is loaded for update, `None` otherwise. Held per form instance
/// rather than globally so independent forms and tests do not interfere.
#[derive(Debug, Clone, Default)]
pub struct TreeForm {
    pub custom_name: String,
    pub species: String,
    pub location: String,
    pub planting_date: String,
    editing: Option<TreeId>,
}

impl TreeForm {
    pub fn editing(&self) -> Option<&TreeId> {
        self.editing.as_ref()
    }

    /// Exactly one submit affordance is visible at any time; which one is
    /// decided solely by the edit session.
    pub fn mode(&self) -> SubmitMode {
        if self.editing.is_some() {
            SubmitMode::Update
        } else {
            SubmitMode::Create
        }
    }

    /// Loads a record into the form and opens an edit session for its id.
    pub fn begin_edit(&mut self, record: &TreeRecord) {
        self.custom_name = record.custom_name.clone();
        self.species = record.species.clone();
        self.location = record.location.clone();
        self.planting_date = record.planting_date.clone();
        self.editing = Some(record.id.clone());
    }

    /// Clears all fields and the edit session, regardless of current mode.
    pub fn reset(&mut self) {
        self.custom_name.clear();
        self.species.clear();
        self.location.clear();
        self.planting_date.clear();
        self.editing = None;
    }

    /// Trims `custom_name`, `species`, and `location`; the date is carried
    /// as-is. One combined error names every blank required field; `species`
    /// is never required.
    pub fn validate(&self) -> Result<TreeFields, FormError> {
        let custom_name = self.custom_name.trim();
        let location = self.location.trim();

        let mut missing = Vec::new();
        if custom_name.is_empty() {
            missing.push("Custom name");
        }
        if location.is_empty() {
            missing.push("Location");
        }
        if self.planting_date.trim().is_empty() {
            missing.push("Planting date");
        }
        if !missing.is_empty() {
            return Err(FormError::MissingRequired { fields: missing });
        }

        Ok(TreeFields {
            custom_name: custom_name.to_string(),
            species: self.species.trim().to_string(),
            location: location.to_string(),
            planting_date: self.planting_date.clone(),
        })
    }

    /// Update submissions additionally require an open edit session; this
    /// guards against stale UI state where the update affordance outlived
    /// the session.
    pub fn validate_for_update(&self) -> Result<(TreeFields, TreeId), FormError> {
        let fields = self.validate()?;
        let id = self.editing.clone().ok_or(FormError::EditingIdMissing)?;
        Ok((fields, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> TreeForm {
        TreeForm {
            custom_name: "  Oak  ".to_string(),
            species: " Quercus robur ".to_string(),
            location: " Yard ".to_string(),
            planting_date: "2024-01-01".to_string(),
            editing: None,
        }
    }

    fn sample_record() -> TreeRecord {
        TreeRecord {
            id: TreeId::from("9"),
            custom_name: "Ipê".to_string(),
            species: String::new(),
            location: "Park".to_string(),
            planting_date: "2023-05-10".to_string(),
        }
    }

    #[test]
    fn validate_trims_text_fields_and_keeps_date_verbatim() {
        let fields = filled_form().validate().expect("valid");
        assert_eq!(fields.custom_name, "Oak");
        assert_eq!(fields.species, "Quercus robur");
        assert_eq!(fields.location, "Yard");
        assert_eq!(fields.planting_date, "2024-01-01");
    }

    #[test]
    fn blank_species_passes_validation() {
        let mut form = filled_form();
        form.species = "   ".to_string();
        let fields = form.validate().expect("valid");
        assert!(fields.species.is_empty());
    }

    #[test]
    fn whitespace_only_required_fields_fail_with_combined_error() {
        let mut form = filled_form();
        form.custom_name = "   ".to_string();
        form.planting_date = String::new();
        let err = form.validate().expect_err("must fail");
        assert_eq!(
            err,
            FormError::MissingRequired {
                fields: vec!["Custom name", "Planting date"],
            }
        );
        assert!(err.to_string().contains("Custom name"));
        assert!(err.to_string().contains("Planting date"));
    }

    #[test]
    fn update_without_edit_session_is_rejected() {
        let err = filled_form().validate_for_update().expect_err("must fail");
        assert_eq!(err, FormError::EditingIdMissing);
    }

    #[test]
    fn begin_edit_fills_fields_and_switches_mode() {
        let mut form = TreeForm::default();
        assert_eq!(form.mode(), SubmitMode::Create);

        form.begin_edit(&sample_record());
        assert_eq!(form.mode(), SubmitMode::Update);
        assert_eq!(form.editing(), Some(&TreeId::from("9")));
        assert_eq!(form.custom_name, "Ipê");
        assert_eq!(form.planting_date, "2023-05-10");

        let (fields, id) = form.validate_for_update().expect("valid");
        assert_eq!(id, TreeId::from("9"));
        assert!(fields.species.is_empty());
    }

    #[test]
    fn reset_clears_fields_and_edit_session() {
        let mut form = TreeForm::default();
        form.begin_edit(&sample_record());
        form.reset();

        assert_eq!(form.editing(), None);
        assert_eq!(form.mode(), SubmitMode::Create);
        assert!(form.custom_name.is_empty());
        assert!(form.species.is_empty());
        assert!(form.location.is_empty());
        assert!(form.planting_date.is_empty());
    }
}

//! Core data types
//!
//! Shared between the state machine and the Web (WASM) frontend:
//! - DocumentData: the 14-field record extracted from a support-call log sheet
//! - UploadState: flag record driving the upload/review flow
//! - UploadPhase: derived view selector

use serde::{Deserialize, Serialize};

use crate::fields::FIELDS;

/// Structured data extracted from one support-call log sheet.
///
/// Serialized with camelCase keys so the downloaded JSON matches the
/// established file format. Every field may be empty; missing keys
/// deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentData {
    pub branch_code: String,
    pub address: String,
    pub city: String,
    pub model: String,
    pub region: String,
    pub customer_request: String,
    pub problem_description: String,
    pub action_taken: String,
    pub faulty_part_handed_over: String,
    pub handed_over_to: String,
    pub name_of_branch_person: String,
    pub branch_person_designation: String,
    pub bank_name: String,
    pub branch_location: String,
}

impl DocumentData {
    /// Field value by camelCase key, `None` for unknown keys.
    pub fn value(&self, key: &str) -> Option<&str> {
        let value = match key {
            "branchCode" => &self.branch_code,
            "address" => &self.address,
            "city" => &self.city,
            "model" => &self.model,
            "region" => &self.region,
            "customerRequest" => &self.customer_request,
            "problemDescription" => &self.problem_description,
            "actionTaken" => &self.action_taken,
            "faultyPartHandedOver" => &self.faulty_part_handed_over,
            "handedOverTo" => &self.handed_over_to,
            "nameOfBranchPerson" => &self.name_of_branch_person,
            "branchPersonDesignation" => &self.branch_person_designation,
            "bankName" => &self.bank_name,
            "branchLocation" => &self.branch_location,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Number of fields carrying a non-blank value.
    pub fn filled_count(&self) -> usize {
        FIELDS
            .iter()
            .filter(|field| {
                self.value(field.key)
                    .map(|v| !v.trim().is_empty())
                    .unwrap_or(false)
            })
            .count()
    }
}

/// Flag record for the upload/review flow.
///
/// At most one of `uploading`/`processing`/`completed` is true, an error
/// implies all three are false, and `data` is present exactly when
/// `completed` is set. `ExtractionSession` is the only mutator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadState {
    pub uploading: bool,
    pub processing: bool,
    pub completed: bool,
    pub error: Option<String>,
    pub data: Option<DocumentData>,
}

impl UploadState {
    /// View selector derived from the flags.
    pub fn phase(&self) -> UploadPhase {
        if self.processing {
            UploadPhase::Processing
        } else if self.completed {
            UploadPhase::Completed
        } else if self.uploading {
            UploadPhase::Uploading
        } else if self.error.is_some() {
            UploadPhase::Failed
        } else {
            UploadPhase::Idle
        }
    }
}

/// Which view the frontend renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Uploading,
    Processing,
    Completed,
    Failed,
}

impl UploadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadPhase::Idle => "idle",
            UploadPhase::Uploading => "uploading",
            UploadPhase::Processing => "processing",
            UploadPhase::Completed => "completed",
            UploadPhase::Failed => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_data_default() {
        let data = DocumentData::default();
        assert_eq!(data.branch_code, "");
        assert_eq!(data.filled_count(), 0);
    }

    #[test]
    fn test_document_data_serialize_camel_case() {
        let data = DocumentData {
            branch_code: "AIBL".to_string(),
            bank_name: "MEEZAN BANK LIMITED".to_string(),
            faulty_part_handed_over: "Yes".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&data).expect("serialize failed");
        assert!(json.contains("\"branchCode\":\"AIBL\""));
        assert!(json.contains("\"bankName\":\"MEEZAN BANK LIMITED\""));
        assert!(json.contains("\"faultyPartHandedOver\":\"Yes\""));
    }

    #[test]
    fn test_document_data_deserialize_missing_fields() {
        let json = r#"{"branchCode": "AIBL"}"#;

        let data: DocumentData = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(data.branch_code, "AIBL");
        assert_eq!(data.city, "");
        assert_eq!(data.bank_name, "");
    }

    #[test]
    fn test_document_data_roundtrip() {
        let original = DocumentData {
            branch_code: "AIBL".to_string(),
            address: "Station Road".to_string(),
            city: "Rawalpindi".to_string(),
            model: "DM-40+".to_string(),
            region: "North".to_string(),
            customer_request: "Receipt Printer".to_string(),
            problem_description: "A/R Handled Physically damaged".to_string(),
            action_taken: "C.P Replacement required".to_string(),
            faulty_part_handed_over: "Yes".to_string(),
            handed_over_to: "Mr. Amir Munir".to_string(),
            name_of_branch_person: "Amir Munir".to_string(),
            branch_person_designation: "Branch Manager".to_string(),
            bank_name: "MEEZAN BANK LIMITED".to_string(),
            branch_location: "Tulsa Road Branch".to_string(),
        };

        let json = serde_json::to_string(&original).expect("serialize failed");
        let restored: DocumentData = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(original, restored);
    }

    #[test]
    fn test_value_covers_every_field_key() {
        let data = DocumentData::default();
        for field in FIELDS.iter() {
            assert!(data.value(field.key).is_some(), "missing key {}", field.key);
        }
        assert_eq!(data.value("noSuchKey"), None);
    }

    #[test]
    fn test_filled_count_ignores_blank_values() {
        let data = DocumentData {
            branch_code: "AIBL".to_string(),
            address: "   ".to_string(),
            city: "Rawalpindi".to_string(),
            ..Default::default()
        };
        assert_eq!(data.filled_count(), 2);
    }

    #[test]
    fn test_upload_state_default_is_idle() {
        let state = UploadState::default();
        assert!(!state.uploading);
        assert!(!state.processing);
        assert!(!state.completed);
        assert!(state.error.is_none());
        assert!(state.data.is_none());
        assert_eq!(state.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_upload_phase_mapping() {
        let mut state = UploadState::default();

        state.uploading = true;
        assert_eq!(state.phase(), UploadPhase::Uploading);

        state.uploading = false;
        state.processing = true;
        assert_eq!(state.phase(), UploadPhase::Processing);

        state.processing = false;
        state.completed = true;
        state.data = Some(DocumentData::default());
        assert_eq!(state.phase(), UploadPhase::Completed);

        state.completed = false;
        state.data = None;
        state.error = Some("extraction failed".to_string());
        assert_eq!(state.phase(), UploadPhase::Failed);
    }

    #[test]
    fn test_upload_phase_as_str() {
        assert_eq!(UploadPhase::Idle.as_str(), "idle");
        assert_eq!(UploadPhase::Processing.as_str(), "processing");
        assert_eq!(UploadPhase::Completed.as_str(), "completed");
    }
}

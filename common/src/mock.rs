//! Mock extraction pipeline definition
//!
//! The demo has no real model behind it: "processing" is a timed walk over a
//! fixed list of stages and the result is always the same sample record. The
//! stage table and the record live here so the frontend and the native tests
//! share one source of truth.

use crate::types::DocumentData;

/// One stage of the simulated pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStage {
    pub name: &'static str,
    pub description: &'static str,
    pub duration_ms: u32,
}

/// The simulated pipeline, in execution order. Total runtime is on the
/// order of the ~15 seconds the real pipeline is expected to take.
pub const PROCESSING_STAGES: [ProcessingStage; 5] = [
    ProcessingStage {
        name: "Document Detection",
        description: "Locating the log sheet with the YOLOv8 detector",
        duration_ms: 2500,
    },
    ProcessingStage {
        name: "Region Segmentation",
        description: "Isolating form fields and handwriting regions",
        duration_ms: 2500,
    },
    ProcessingStage {
        name: "Text Recognition",
        description: "Reading field contents with the OCR engine",
        duration_ms: 3500,
    },
    ProcessingStage {
        name: "Field Mapping",
        description: "Assigning recognized text to the report fields",
        duration_ms: 2500,
    },
    ProcessingStage {
        name: "Finalizing",
        description: "Validating and assembling the extracted record",
        duration_ms: 1500,
    },
];

/// The record the mock pipeline returns for every upload.
pub fn sample_record() -> DocumentData {
    DocumentData {
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
    }
}

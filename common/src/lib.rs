//! Docsheet Common Library
//!
//! Types and logic shared by the Web (WASM) frontend and the native tests

pub mod error;
pub mod export;
pub mod fields;
pub mod mock;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use export::{clipboard_text, json_pretty, DOWNLOAD_FILE_NAME};
pub use fields::{label_for, FieldDef, FIELDS};
pub use mock::{sample_record, ProcessingStage, PROCESSING_STAGES};
pub use session::{ExtractionSession, ExtractionToken};
pub use types::{DocumentData, UploadPhase, UploadState};

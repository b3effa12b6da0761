//! Browser export glue
//!
//! The formatting lives in `docsheet-common::export`; these modules only do
//! the browser side: writing the clipboard and offering the JSON download.

pub mod clipboard;
pub mod download;

//! Mock extraction collaborator
//!
//! Stands in for the real extraction service: validates the payload, walks
//! the timed stage list on the browser event loop, and returns the fixed
//! sample record. The caller's session token decides whether the result is
//! still wanted when it arrives.

use docsheet_common::error::Error;
use docsheet_common::mock::{sample_record, PROCESSING_STAGES};
use docsheet_common::types::DocumentData;
use gloo::timers::future::TimeoutFuture;

use super::is_image_data_url;

/// Run the simulated pipeline over an image data URL.
///
/// `on_progress` receives `(stage_index, stage_count, stage_name)` as each
/// stage starts. Non-image payloads fail before the first stage.
pub async fn extract_document(
    data_url: &str,
    on_progress: impl Fn(usize, usize, &str),
) -> Result<DocumentData, Error> {
    if !is_image_data_url(data_url) {
        return Err(Error::InvalidInput(
            "The uploaded file is not an image".to_string(),
        ));
    }

    let total = PROCESSING_STAGES.len();
    for (index, stage) in PROCESSING_STAGES.iter().enumerate() {
        on_progress(index, total, stage.name);
        TimeoutFuture::new(stage.duration_ms).await;
    }

    Ok(sample_record())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn wasm_rejects_non_image_payload_before_first_stage() {
        let progress_calls = std::cell::Cell::new(0usize);
        let result = extract_document("data:text/plain;base64,aGk=", |_, _, _| {
            progress_calls.set(progress_calls.get() + 1);
        })
        .await;

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(progress_calls.get(), 0);
    }
}

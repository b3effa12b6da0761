//! Clipboard export

use docsheet_common::error::Error;
use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard via the async clipboard API.
/// Denied permissions surface as [`Error::Export`] instead of panicking.
pub async fn copy_text(text: &str) -> Result<(), Error> {
    let window = web_sys::window().ok_or_else(|| Error::Export("no window".to_string()))?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|err| Error::Export(format!("clipboard write denied: {err:?}")))?;

    Ok(())
}

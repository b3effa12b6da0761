//! File download export
//!
//! Builds a Blob object URL and clicks a synthetic anchor, the same way the
//! browser bridge used to hand generated files to the user.

use docsheet_common::error::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn export_err(context: &str, err: JsValue) -> Error {
    Error::Export(format!("{context}: {err:?}"))
}

/// Offer `content` as a download named `file_name`.
pub fn download_text(content: &str, mime_type: &str, file_name: &str) -> Result<(), Error> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|err| export_err("blob creation failed", err))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|err| export_err("object URL creation failed", err))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Export("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|err| export_err("anchor creation failed", err))?
        .dyn_into()
        .map_err(|_| Error::Export("anchor cast failed".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

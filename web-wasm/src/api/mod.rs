//! Extraction collaborator boundary
//!
//! The real pipeline is an external service that takes an image payload and
//! returns a structured record; [`mock`] is the stand-in used by the demo.
//! The data-URL helpers validate what the upload area hands over.

pub mod mock;

/// MIME type of a data URL, `None` when the payload is not a data URL.
pub fn data_url_mime_type(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    rest.split([';', ',']).next().filter(|mime| !mime.is_empty())
}

/// True for `data:image/*` payloads.
pub fn is_image_data_url(data_url: &str) -> bool {
    data_url_mime_type(data_url)
        .map(|mime| mime.starts_with("image/"))
        .unwrap_or(false)
}

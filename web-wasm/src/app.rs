//! Main application component
//!
//! Owns the extraction session signal and wires the upload area, the mock
//! collaborator and the review view together. Collaborator results carry the
//! session token of their attempt; anything stale is dropped on arrival.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use docsheet_common::export::{clipboard_text, json_pretty, DOWNLOAD_FILE_NAME};
use docsheet_common::session::ExtractionSession;
use docsheet_common::types::UploadPhase;

use crate::api;
use crate::components::{
    data_display::DataDisplay, header::Header, processing_view::ProcessingView,
    upload_area::UploadArea,
};
use crate::export::{clipboard, download};

/// The uploaded image as the browser handed it over.
#[derive(Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub size_bytes: f64,
    pub data_url: String,
}

#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal(ExtractionSession::new());
    let (image, set_image) = signal(None::<UploadedImage>);
    let (stage, set_stage) = signal(0usize);
    let (export_status, set_export_status) = signal(None::<String>);

    let phase = move || session.get().phase();

    // File read started in the upload area.
    let on_read_start = move |_: ()| {
        set_session.update(|s| {
            s.begin_upload();
        });
    };

    // Non-image selection or unreadable file.
    let on_rejected = move |message: String| {
        set_session.update(|s| {
            s.reject_input(message);
        });
    };

    // Data URL ready: hand off to the extraction collaborator.
    let on_image_loaded = move |img: UploadedImage| {
        let mut token = None;
        set_session.update(|s| token = s.begin_extraction());
        let Some(token) = token else {
            // an extraction is already in flight, ignore the selection
            return;
        };

        set_image.set(Some(img.clone()));
        set_stage.set(0);
        set_export_status.set(None);

        spawn_local(async move {
            let result = api::mock::extract_document(&img.data_url, move |index, total, name| {
                // drop progress from attempts that were reset away
                if session.with_untracked(|s| s.is_current(token)) {
                    set_stage.set(index);
                    let message = format!("extraction stage {}/{total}: {name}", index + 1);
                    console::log_1(&JsValue::from_str(&message));
                }
            })
            .await;

            set_session.update(|s| match result {
                Ok(record) => {
                    s.complete(token, record);
                }
                Err(err) => {
                    console::error_1(&JsValue::from_str(&err.to_string()));
                    s.fail(token, err.to_string());
                }
            });
        });
    };

    let on_copy = move |_: ()| {
        let Some(record) = session.with_untracked(|s| s.data()) else {
            return;
        };
        spawn_local(async move {
            let text = clipboard_text(&record);
            match clipboard::copy_text(&text).await {
                Ok(()) => set_export_status.set(Some("Data copied to clipboard".to_string())),
                Err(err) => {
                    console::error_1(&JsValue::from_str(&err.to_string()));
                    set_export_status.set(Some(err.to_string()));
                }
            }
        });
    };

    let on_download = move |_: ()| {
        let Some(record) = session.with_untracked(|s| s.data()) else {
            return;
        };
        let result = json_pretty(&record).and_then(|json| {
            download::download_text(&json, "application/json", DOWNLOAD_FILE_NAME)
        });
        match result {
            Ok(()) => set_export_status.set(Some(format!("Saved {DOWNLOAD_FILE_NAME}"))),
            Err(err) => {
                console::error_1(&JsValue::from_str(&err.to_string()));
                set_export_status.set(Some(err.to_string()));
            }
        }
    };

    let on_start_new = move |_: ()| {
        set_session.update(|s| s.reset());
        set_image.set(None);
        set_stage.set(0);
        set_export_status.set(None);
    };

    view! {
        <div class="container">
            <Header />

            <Show when=move || {
                matches!(
                    phase(),
                    UploadPhase::Idle | UploadPhase::Uploading | UploadPhase::Failed
                )
            }>
                <Show when=move || session.get().error().is_some()>
                    <div class="alert alert-error">
                        {move || session.get().error().unwrap_or_default()}
                    </div>
                </Show>
                <UploadArea
                    disabled=Signal::derive(move || phase() == UploadPhase::Uploading)
                    on_read_start=on_read_start
                    on_image_loaded=on_image_loaded
                    on_rejected=on_rejected
                />
            </Show>

            <Show when=move || phase() == UploadPhase::Processing>
                <ProcessingView image=image stage=stage />
            </Show>

            <Show when=move || phase() == UploadPhase::Completed>
                {move || {
                    session.get().data().map(|record| {
                        view! {
                            <DataDisplay
                                record=record
                                export_status=export_status
                                on_copy=on_copy
                                on_download=on_download
                                on_start_new=on_start_new
                            />
                        }
                    })
                }}
            </Show>
        </div>
    }
}

//! Upload area component
//!
//! Drag-and-drop zone with an overlaid file picker. Only the first selected
//! file is taken; non-image selections are rejected with a visible message
//! before any state changes.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader, HtmlInputElement};

use crate::app::UploadedImage;

#[component]
pub fn UploadArea<FS, FL, FR>(
    disabled: Signal<bool>,
    on_read_start: FS,
    on_image_loaded: FL,
    on_rejected: FR,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FL: Fn(UploadedImage) + 'static + Clone,
    FR: Fn(String) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_files = {
        let on_read_start = on_read_start.clone();
        let on_image_loaded = on_image_loaded.clone();
        let on_rejected = on_rejected.clone();
        move |files: Option<FileList>| {
            let Some(files) = files else { return };
            let Some(file) = files.get(0) else { return };
            read_file(
                file,
                on_read_start.clone(),
                on_image_loaded.clone(),
                on_rejected.clone(),
            );
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if disabled.get() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                handle_files(dt.files());
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = {
        let handle_files = handle_files.clone();
        move |ev: web_sys::Event| {
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            handle_files(input.files());
            // allow re-selecting the same file later
            input.set_value("");
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if disabled.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <div class="upload-icon">"🖼️"</div>
            <p class="upload-title">"Drop your document here"</p>
            <p class="text-muted">"or click to browse. Supported formats: JPEG, PNG"</p>
            <input
                type="file"
                accept="image/*"
                class="upload-input"
                prop:disabled=move || disabled.get()
                on:change=on_change
            />
        </div>
    }
}

fn read_file<FS, FL, FR>(file: File, on_read_start: FS, on_image_loaded: FL, on_rejected: FR)
where
    FS: Fn(()) + 'static,
    FL: Fn(UploadedImage) + 'static,
    FR: Fn(String) + 'static + Clone,
{
    let file_name = file.name();

    if !file.type_().starts_with("image/") {
        on_rejected(format!(
            "\"{file_name}\" is not an image file. Only image files are supported."
        ));
        return;
    }

    let Ok(reader) = FileReader::new() else {
        on_rejected("The file reader is unavailable in this browser".to_string());
        return;
    };

    on_read_start(());

    let size_bytes = file.size();
    let reader_clone = reader.clone();
    let name_for_load = file_name.clone();
    let on_rejected_load = on_rejected.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result().ok().and_then(|value| value.as_string()) {
            Some(data_url) => on_image_loaded(UploadedImage {
                file_name: name_for_load.clone(),
                size_bytes,
                data_url,
            }),
            None => on_rejected_load(format!("\"{name_for_load}\" could not be read")),
        }
    }) as Box<dyn FnMut(_)>);

    let name_for_error = file_name.clone();
    let on_rejected_error = on_rejected.clone();
    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        on_rejected_error(format!("\"{name_for_error}\" could not be read"));
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    if reader.read_as_data_url(&file).is_err() {
        on_rejected(format!("\"{file_name}\" could not be read"));
    }
}

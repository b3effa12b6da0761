//! Processing view component
//!
//! Image preview with a spinner overlay plus the stage checklist of the
//! simulated pipeline. `stage` is the index of the stage currently running.

use leptos::prelude::*;

use docsheet_common::mock::PROCESSING_STAGES;

use crate::app::UploadedImage;

#[component]
pub fn ProcessingView(
    image: ReadSignal<Option<UploadedImage>>,
    stage: ReadSignal<usize>,
) -> impl IntoView {
    let total = PROCESSING_STAGES.len();

    let stages = PROCESSING_STAGES
        .iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <div class=move || {
                    let current = stage.get();
                    if index < current {
                        "stage done"
                    } else if index == current {
                        "stage active"
                    } else {
                        "stage pending"
                    }
                }>
                    <span class="stage-marker">
                        {move || {
                            let current = stage.get();
                            if index < current {
                                "✓"
                            } else if index == current {
                                "●"
                            } else {
                                "○"
                            }
                        }}
                    </span>
                    <div class="stage-text">
                        <p class="stage-name">{item.name}</p>
                        <p class="text-muted">{item.description}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="processing-view">
            {move || {
                image.get().map(|img| {
                    let size_mb = img.size_bytes / 1024.0 / 1024.0;
                    view! {
                        <div class="preview">
                            <img src=img.data_url.clone() alt=img.file_name.clone() />
                            <div class="preview-overlay">
                                <div class="spinner"></div>
                                <p>"Processing..."</p>
                            </div>
                        </div>
                        <p class="file-meta">
                            {format!("File: {} ({size_mb:.2} MB)", img.file_name)}
                        </p>
                    }
                })
            }}

            <div class="stage-list">{stages}</div>

            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || {
                        format!("width: {}%", stage.get() as f32 / total as f32 * 100.0)
                    }
                />
            </div>
            <p class="progress-text">
                {move || {
                    let current = (stage.get() + 1).min(total);
                    format!("Extracting data... stage {current} of {total}")
                }}
            </p>
        </div>
    }
}

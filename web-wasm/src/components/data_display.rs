//! Data review component
//!
//! Review table of the extracted record plus summary statistics and the
//! export actions. The record is a plain prop; the completed view is
//! rebuilt wholesale when a new record arrives.

use leptos::prelude::*;

use docsheet_common::fields::FIELDS;
use docsheet_common::types::DocumentData;

use crate::components::export_buttons::ExportButtons;

#[component]
pub fn DataDisplay<FC, FD, FN>(
    record: DocumentData,
    export_status: ReadSignal<Option<String>>,
    on_copy: FC,
    on_download: FD,
    on_start_new: FN,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
    FD: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    let filled = record.filled_count();
    let empty = FIELDS.len() - filled;
    let rate = (filled as f32 / FIELDS.len() as f32 * 100.0).round() as u32;

    let rows = FIELDS
        .iter()
        .map(|field| {
            let value = record.value(field.key).unwrap_or_default().to_string();
            view! {
                <tr>
                    <td class="field-label">
                        <span class="field-icon">{field.icon}</span>
                        {field.label}
                    </td>
                    <td class="field-value">
                        {if value.trim().is_empty() {
                            view! { <span class="no-data">"No data extracted"</span> }.into_any()
                        } else {
                            view! { <span>{value}</span> }.into_any()
                        }}
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="data-display">
            <div class="data-header">
                <div class="data-title">
                    <span class="success-icon">"✔"</span>
                    <h2>"Extraction Complete"</h2>
                    <span class="badge badge-success">"Success"</span>
                </div>
                <ExportButtons on_copy=on_copy on_download=on_download on_start_new=on_start_new />
            </div>
            <p class="text-muted">
                "Successfully extracted structured data from your document using AI"
            </p>

            <Show when=move || export_status.get().is_some()>
                <p class="export-status">{move || export_status.get().unwrap_or_default()}</p>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Field"</th>
                        <th>"Value"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <div class="summary-cards">
                <div class="summary-card">
                    <div class="summary-number">{filled}</div>
                    <div class="text-muted">"Fields Extracted"</div>
                </div>
                <div class="summary-card">
                    <div class="summary-number">{empty}</div>
                    <div class="text-muted">"Empty Fields"</div>
                </div>
                <div class="summary-card">
                    <div class="summary-number">{format!("{rate}%")}</div>
                    <div class="text-muted">"Extraction Rate"</div>
                </div>
            </div>

            <div class="processing-details">
                <h3>"Processing Details"</h3>
                <div class="details-grid">
                    <div>
                        <span class="text-muted">"Detection Model: "</span>
                        <span class="detail-value">"YOLOv8"</span>
                    </div>
                    <div>
                        <span class="text-muted">"OCR Engine: "</span>
                        <span class="detail-value">"Custom CNN"</span>
                    </div>
                    <div>
                        <span class="text-muted">"Processing Time: "</span>
                        <span class="detail-value">"~15 seconds"</span>
                    </div>
                    <div>
                        <span class="text-muted">"Confidence: "</span>
                        <span class="detail-value">"High (95%+)"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

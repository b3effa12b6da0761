//! Export buttons component

use leptos::prelude::*;

#[component]
pub fn ExportButtons<FC, FD, FN>(
    on_copy: FC,
    on_download: FD,
    on_start_new: FN,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
    FD: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    view! {
        <div class="export-buttons">
            <button
                class="btn btn-secondary"
                on:click={
                    let on_copy = on_copy.clone();
                    move |_| on_copy(())
                }
            >
                "Copy Data"
            </button>

            <button
                class="btn btn-secondary"
                on:click={
                    let on_download = on_download.clone();
                    move |_| on_download(())
                }
            >
                "Download JSON"
            </button>

            <button
                class="btn btn-primary"
                on:click={
                    let on_start_new = on_start_new.clone();
                    move |_| on_start_new(())
                }
            >
                "Process New Document"
            </button>
        </div>
    }
}

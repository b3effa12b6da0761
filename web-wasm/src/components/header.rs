//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Document Processing System"</h1>
            <p class="text-muted">
                "Upload a support call log sheet to extract structured data using AI"
            </p>
        </header>
    }
}

//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}" - Upload a video"</h1>
            <p class="subtitle">
                "Pick a video file from your computer and send it for processing. "
                "Results are handled by the processing server; check the browser console for the upload status."
            </p>
        </div>
    }
}

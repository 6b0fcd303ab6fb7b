//! Video upload form.
//!
//! Wires DOM events into an [`UploadForm`]: the picker's first file becomes
//! the selection, submit suppresses navigation and sends the file.

use std::rc::Rc;

use clipload::{ClientConfig, FileHandle, UploadForm};
use leptos::*;
use web_sys::{Event, HtmlInputElement, SubmitEvent};

use crate::services::FetchTransport;
use crate::types::{selected_label, AlertNotifier, BrowserFile, DomSubmit};
use crate::{SUBMIT_LABEL, VIDEO_ACCEPT};

#[component]
pub fn UploadSection() -> impl IntoView {
    let form = UploadForm::<BrowserFile>::new(
        ClientConfig::default(),
        Rc::new(FetchTransport::new()),
        Rc::new(AlertNotifier),
    );

    // Mirror the store into a signal so the view follows the selection.
    let (selected_name, set_selected_name) = create_signal(None::<String>);
    form.store()
        .subscribe(move |file: Option<&BrowserFile>| {
            set_selected_name.set(file.map(|f| f.name().to_string()));
        })
        .forget();

    let chooser = form.clone();
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            chooser.on_files_chosen(files.get(0).map(BrowserFile::new));
        }
    };

    let submitter = form;
    let on_submit = move |ev: SubmitEvent| {
        // Must run during dispatch for prevent_default to take effect.
        if let Ok(pending) = submitter.begin_submit(&DomSubmit(&ev)) {
            spawn_local(async move {
                pending.send().await;
            });
        }
    };

    view! {
        <form class="upload-section" on:submit=on_submit>
            <div class="upload-icon">"🎬"</div>
            <div class="upload-text">"Choose a video file to upload"</div>

            <input
                type="file"
                id="fileInput"
                accept=VIDEO_ACCEPT
                on:change=on_file_change
            />

            <Show
                when=move || selected_name.get().is_some()
                fallback=|| view! { }
            >
                <p class="selected-file">
                    {move || selected_name.get().map(|name| selected_label(&name)).unwrap_or_default()}
                </p>
            </Show>

            <button type="submit" class="upload-button">{SUBMIT_LABEL}</button>
        </form>
    }
}

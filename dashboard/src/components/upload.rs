//! Upload menu component

use leptos::html::Input;
use leptos::prelude::*;
use shared::form::UPLOAD_SUCCESS_MESSAGE;
use shared::{Event, UploadForm};
use web_sys::{File, HtmlInputElement};

use crate::api;
use crate::browser;
use crate::state::{use_config, use_store};

#[component]
pub fn UploadMenu() -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let (form, set_form) = signal(UploadForm::default());
    let file_input = NodeRef::<Input>::new();

    // only the filename goes into the form
    let choose_file = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let name = first_file(&input).map(|file| file.name());
        set_form.update(|f| f.choose_file(name));
    };

    // upload action
    let upload = move |_| {
        let mut current = form.get_untracked();
        match current.submit() {
            Ok(record) => {
                if config.use_backend {
                    if let Some(file) = file_input.get_untracked().as_ref().and_then(first_file) {
                        api::sync_upload(config.clone(), file);
                    }
                }

                store.dispatch(Event::MenuUploaded(record));

                set_form.set(current);
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
                browser::alert(UPLOAD_SUCCESS_MESSAGE);
            }
            Err(e) => browser::alert(&e.to_string()),
        }
    };

    view! {
        <div class="upload-container">
            <h2>"Upload a New Menu"</h2>
            <input
                type="text"
                placeholder="Menu Name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| set_form.update(|f| f.set_name(event_target_value(&ev)))
            />
            <input type="file" node_ref=file_input on:change=choose_file />
            <button class="upload-button" on:click=upload>
                "Upload Menu"
            </button>
        </div>
    }
}

fn first_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

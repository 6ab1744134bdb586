//! Brochure upload card

use dioxus::prelude::*;

use crate::components::LoadingDots;
use crate::state::{SelectedFile, UploadState};

/// File picker plus the upload trigger.
///
/// The PDF restriction is a UI hint via `accept` only; the backend sees
/// whatever the user managed to pick.
#[component]
pub fn UploadCard(mut state: Signal<UploadState>, on_upload: EventHandler<()>) -> Element {
    let handle_file = move |evt: FormEvent| {
        let Some(file_engine) = evt.files() else {
            return;
        };
        spawn(async move {
            let Some(name) = file_engine.files().first().cloned() else {
                return;
            };
            if let Some(bytes) = file_engine.read_file(&name).await {
                let next = state.peek().clone().file_selected(SelectedFile { name, bytes });
                state.set(next);
            }
        });
    };

    rsx! {
        div {
            class: "upload-card",
            input {
                r#type: "file",
                accept: "application/pdf",
                onchange: handle_file,
            }
            button {
                disabled: !state.read().can_upload(),
                onclick: move |_| on_upload.call(()),
                if state.read().loading {
                    LoadingDots {}
                    " Processing..."
                } else {
                    "Upload & Extract"
                }
            }
        }
    }
}

//! Home page: upload a brochure, review the extraction, export

use dioxus::prelude::*;

use crate::components::{ReviewForm, UploadCard};
use crate::state::UploadState;
use crate::types::ExtractionRecord;

/// The whole application lives on this one page.
#[component]
pub fn Home() -> Element {
    let mut state = use_signal(UploadState::default);

    let handle_upload = move |_| {
        let Some(file) = state.peek().file.clone() else {
            return;
        };
        if state.peek().loading {
            return;
        }

        spawn(async move {
            let started = state.peek().clone().upload_started();
            state.set(started);

            match upload_brochure(file.name, file.bytes).await {
                Ok(record) => {
                    let next = state.peek().clone().upload_succeeded(record);
                    state.set(next);
                }
                Err(e) => {
                    tracing::error!("brochure upload failed: {e}");
                    let next = state.peek().clone().upload_failed("Upload failed".to_string());
                    state.set(next);
                }
            }
        });
    };

    let error = state.read().error.clone();
    let record = state.read().record.clone();
    let upload_count = state.read().upload_count;

    rsx! {
        div {
            class: "app",
            h1 { "Training Brochure Extraction" }

            UploadCard { state, on_upload: handle_upload }

            if let Some(message) = error {
                div { class: "error-banner", "{message}" }
            }

            if let Some(record) = record {
                // Keyed on the upload counter so each new record seeds a
                // fresh editor instead of reusing the previous one.
                ReviewForm { key: "{upload_count}", record }
            }
        }
    }
}

#[server]
async fn upload_brochure(
    file_name: String,
    bytes: Vec<u8>,
) -> Result<ExtractionRecord, ServerFnError> {
    let client = crate::api::ApiClient::from_env();
    client.upload_brochure(file_name, bytes).await.map_err(|e| {
        tracing::error!("brochure upload failed: {e}");
        ServerFnError::new(e.to_string())
    })
}

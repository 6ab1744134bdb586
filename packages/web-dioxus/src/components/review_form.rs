//! Human-review form for an extracted record

use dioxus::prelude::*;

use crate::export::{csv, draft, google_form, DraftPayload};
use crate::state::EditedState;
use crate::types::{Confidence, ExtractionRecord};

/// Outcome of the most recent export action.
#[derive(Clone, PartialEq)]
enum ExportNotice {
    Success(String),
    Failure(String),
}

/// Editable review form over one extraction record.
///
/// The eight editable fields are seeded once from the record and live in
/// a single [`EditedState`] signal; the classification and confidence
/// fields are echoed read-only from the record on every render. Each of
/// the three export actions reads the edited state at click time.
#[component]
pub fn ReviewForm(record: ExtractionRecord) -> Element {
    let mut edited = use_signal({
        let seed = EditedState::from_record(&record);
        move || seed.clone()
    });
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| None::<ExportNotice>);

    let handle_google = {
        let record = record.clone();
        move |_| {
            let target = google_form::form_url(&edited(), &record);
            match google_form::open_in_new_tab(&target) {
                Ok(()) => notice.set(Some(ExportNotice::Success(
                    "Google Form opened with auto-filled data.".to_string(),
                ))),
                Err(reason) => notice.set(Some(ExportNotice::Failure(format!(
                    "Could not open the Google Form: {reason}"
                )))),
            }
        }
    };

    let handle_draft = {
        let record = record.clone();
        move |_| {
            if saving() {
                return;
            }
            let payload = draft::payload(&edited(), &record);
            spawn(async move {
                saving.set(true);
                notice.set(None);

                match save_draft(payload).await {
                    Ok(()) => notice.set(Some(ExportNotice::Success(
                        "Draft saved to backend.".to_string(),
                    ))),
                    Err(e) => {
                        tracing::error!("draft save failed: {e}");
                        notice.set(Some(ExportNotice::Failure(
                            "Could not save the draft.".to_string(),
                        )));
                    }
                }

                saving.set(false);
            });
        }
    };

    let handle_csv = {
        let record = record.clone();
        move |_| {
            let doc = csv::document(&edited(), &record);
            match csv::trigger_download(&doc) {
                Ok(()) => notice.set(Some(ExportNotice::Success(format!(
                    "Downloaded {}.",
                    csv::FILE_NAME
                )))),
                Err(reason) => notice.set(Some(ExportNotice::Failure(format!(
                    "Could not download the CSV: {reason}"
                )))),
            }
        }
    };

    let status = record.review_status();

    rsx! {
        div {
            class: "review-card",
            h2 { "Human Review" }

            label { "Program Title" }
            textarea {
                class: "long-input",
                value: "{edited.read().program_title}",
                oninput: move |e| edited.write().program_title = e.value(),
            }

            label { "Start Date" }
            input {
                r#type: "date",
                value: "{edited.read().start_date}",
                oninput: move |e| edited.write().start_date = e.value(),
            }

            label { "End Date" }
            input {
                r#type: "date",
                value: "{edited.read().end_date}",
                oninput: move |e| edited.write().end_date = e.value(),
            }

            label { "Venue" }
            textarea {
                class: "long-input",
                value: "{edited.read().venue}",
                oninput: move |e| edited.write().venue = e.value(),
            }

            label { "Training Organiser" }
            textarea {
                class: "long-input",
                value: "{edited.read().training_organiser}",
                oninput: move |e| edited.write().training_organiser = e.value(),
            }

            label { "Trainer" }
            textarea {
                class: "long-input",
                value: "{edited.read().trainer}",
                oninput: move |e| edited.write().trainer = e.value(),
            }

            label { "Cost" }
            div {
                class: "cost-row",
                input {
                    r#type: "text",
                    placeholder: "Currency",
                    value: "{edited.read().cost_currency}",
                    oninput: move |e| edited.write().cost_currency = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Amount",
                    value: "{edited.read().cost_amount}",
                    oninput: move |e| edited.write().cost_amount = e.value(),
                }
            }

            p {
                class: "status {status.css_class()}",
                "Status: {record.status}"
            }

            h4 { "Confidence (AI)" }
            ul {
                class: "confidence",
                li { "Title: {confidence(record.confidence_program_title.as_ref())}" }
                li { "Date: {confidence(record.confidence_date.as_ref())}" }
                li { "Venue: {confidence(record.confidence_venue.as_ref())}" }
                li { "Cost: {confidence(record.confidence_cost.as_ref())}" }
                li { "Trainer: {confidence(record.confidence_trainer.as_ref())}" }
                li { "Organiser: {confidence(record.confidence_organiser.as_ref())}" }
            }

            p { b { "HRDC Certified: " } "{record.hrdc_certified}" }
            p { b { "Extraction Method: " } "{record.method}" }

            match notice() {
                Some(ExportNotice::Success(message)) => rsx! {
                    div { class: "notice success", "{message}" }
                },
                Some(ExportNotice::Failure(message)) => rsx! {
                    div { class: "notice failure", "{message}" }
                },
                None => rsx! {},
            }

            div {
                class: "action-buttons",
                button {
                    class: "approve",
                    onclick: handle_google,
                    "Approve & Send (Google Form)"
                }
                button {
                    class: "draft",
                    disabled: saving(),
                    onclick: handle_draft,
                    if saving() { "Saving..." } else { "Save Draft" }
                }
                button {
                    class: "approve",
                    onclick: handle_csv,
                    "Download UI Vision CSV"
                }
            }
        }
    }
}

fn confidence(value: Option<&Confidence>) -> String {
    match value {
        Some(c) => c.display(),
        None => "n/a".to_string(),
    }
}

#[server]
async fn save_draft(payload: DraftPayload) -> Result<(), ServerFnError> {
    let client = crate::api::ApiClient::from_env();
    client.save_draft(&payload).await.map_err(|e| {
        tracing::error!("draft save failed: {e}");
        ServerFnError::new(e.to_string())
    })
}

//! Draft-save payload for the backend `/draft` endpoint

use serde::{Deserialize, Serialize};

use crate::state::EditedState;
use crate::types::ExtractionRecord;

/// JSON body for `POST /draft`; everything nests under a single `meta` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPayload {
    pub meta: DraftMeta,
}

/// The eight edited fields plus the three classification fields copied
/// verbatim from the original record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftMeta {
    pub program_title: String,
    pub start_date: String,
    pub end_date: String,
    pub venue: String,
    pub training_organiser: String,
    pub trainer: String,
    pub cost_amount: String,
    pub cost_currency: String,
    pub hrdc_certified: String,
    pub method: String,
    pub status: String,
}

/// Build the draft payload from the current edited state.
pub fn payload(edited: &EditedState, record: &ExtractionRecord) -> DraftPayload {
    DraftPayload {
        meta: DraftMeta {
            program_title: edited.program_title.clone(),
            start_date: edited.start_date.clone(),
            end_date: edited.end_date.clone(),
            venue: edited.venue.clone(),
            training_organiser: edited.training_organiser.clone(),
            trainer: edited.trainer.clone(),
            cost_amount: edited.cost_amount.clone(),
            cost_currency: edited.cost_currency.clone(),
            hrdc_certified: record.hrdc_certified.clone(),
            method: record.method.clone(),
            status: record.status.clone(),
        },
    }
}

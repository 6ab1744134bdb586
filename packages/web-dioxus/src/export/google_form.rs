//! Google-Form redirect exporter
//!
//! Builds a prefill URL for the published review form and opens it in a
//! new browsing context. Nothing here waits on the external form; only
//! the act of opening the window can fail (popup blockers).

use crate::state::EditedState;
use crate::types::ExtractionRecord;

const FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfqZezmVhQW8CDFAtGRPhDWIrVYTS1lBZLAW3oCQZ6_it9ehw/viewform";

// Entry IDs of the published form, in submission order.
const ENTRY_TITLE: &str = "entry.2068986276";
const ENTRY_START_DATE: &str = "entry.485417362";
const ENTRY_END_DATE: &str = "entry.2067817318";
const ENTRY_VENUE: &str = "entry.2139113983";
const ENTRY_COST: &str = "entry.966550949";
const ENTRY_TRAINER: &str = "entry.2087209596";
const ENTRY_ORGANISER: &str = "entry.1233652296";
const ENTRY_HRDC: &str = "entry.499212106";
const ENTRY_METHOD: &str = "entry.497656159";

/// Build the prefill URL from the current edited state.
///
/// Cost is the currency and amount concatenated with no separator, and
/// `hrdc_certified` passes through raw from the record.
pub fn form_url(edited: &EditedState, record: &ExtractionRecord) -> String {
    let cost = format!("{}{}", edited.cost_currency, edited.cost_amount);
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(ENTRY_TITLE, &edited.program_title)
        .append_pair(ENTRY_START_DATE, &edited.start_date)
        .append_pair(ENTRY_END_DATE, &edited.end_date)
        .append_pair(ENTRY_VENUE, &edited.venue)
        .append_pair(ENTRY_COST, &cost)
        .append_pair(ENTRY_TRAINER, &edited.trainer)
        .append_pair(ENTRY_ORGANISER, &edited.training_organiser)
        .append_pair(ENTRY_HRDC, &record.hrdc_certified)
        .append_pair(ENTRY_METHOD, &record.method)
        .finish();
    format!("{FORM_URL}?{query}")
}

/// Open the prefilled form in a new browsing context.
///
/// Reports popup-blocker rejection instead of failing silently; the fate
/// of the opened page itself stays invisible.
pub fn open_in_new_tab(target: &str) -> Result<(), String> {
    #[cfg(feature = "web")]
    {
        let window = web_sys::window().ok_or("no window available")?;
        match window.open_with_url_and_target(target, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err("the browser blocked the popup".to_string()),
            Err(_) => Err("the browser refused to open the form".to_string()),
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = target;
        Err("opening the form is only available in the browser".to_string())
    }
}

//! UI.Vision CSV exporter
//!
//! A deliberately narrow encoding: the robot macro that consumes this file
//! only needs the title, provider, trainer and a normalized HRD-fund flag,
//! so dates, venue and cost are not exported here.

use crate::state::EditedState;
use crate::types::{ExtractionRecord, HrdcCertified};

pub const FILE_NAME: &str = "uivision_items.csv";

const HEADERS: [&str; 4] = ["ProgramTitle", "TrainingProvider", "Trainer", "HRDFund"];

/// Build the two-line CSV document (header row plus one data row).
pub fn document(edited: &EditedState, record: &ExtractionRecord) -> String {
    let hrd_fund = match record.hrdc() {
        HrdcCertified::Certified => "(Yes)",
        HrdcCertified::NotCertified | HrdcCertified::Unknown => "(No)",
    };
    let values = [
        quote(&edited.program_title),
        quote(&edited.training_organiser),
        quote(&edited.trainer),
        quote(hrd_fund),
    ];
    format!("{}\n{}", HEADERS.join(","), values.join(","))
}

// Standard CSV quoting: wrap in double quotes, double internal quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Offer the document as a local download in the browser.
pub fn trigger_download(csv: &str) -> Result<(), String> {
    #[cfg(feature = "web")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document available")?;

        let parts = js_sys::Array::of1(&JsValue::from_str(csv));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8;");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|_| "could not build the CSV blob")?;
        let href = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "could not create the download URL")?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "could not create the download link")?
            .unchecked_into();
        anchor.set_href(&href);
        anchor.set_download(FILE_NAME);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&href);
        Ok(())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = csv;
        Err("the CSV download is only available in the browser".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_hrdc(value: &str) -> ExtractionRecord {
        ExtractionRecord {
            hrdc_certified: value.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_internal_quotes_are_doubled() {
        let edited = EditedState {
            training_organiser: r#"He said "hi""#.to_string(),
            ..Default::default()
        };
        let doc = document(&edited, &ExtractionRecord::default());
        assert!(doc.contains(r#""He said ""hi""""#));
    }

    #[test]
    fn test_hrd_fund_normalization() {
        let edited = EditedState::default();
        for yes in ["YES", "true", "Yes"] {
            let doc = document(&edited, &with_hrdc(yes));
            assert!(doc.ends_with(r#""(Yes)""#), "{yes} should map to (Yes)");
        }
        for no in ["no", "", "maybe"] {
            let doc = document(&edited, &with_hrdc(no));
            assert!(doc.ends_with(r#""(No)""#), "{no:?} should map to (No)");
        }
    }

    #[test]
    fn test_document_shape() {
        let record = ExtractionRecord {
            program_title: "First Aid at Work".to_string(),
            training_organiser: "Red Crescent".to_string(),
            trainer: "Nurse Aida".to_string(),
            hrdc_certified: "yes".to_string(),
            ..Default::default()
        };
        let doc = document(&EditedState::from_record(&record), &record);
        let mut lines = doc.lines();
        assert_eq!(lines.next(), Some("ProgramTitle,TrainingProvider,Trainer,HRDFund"));
        assert_eq!(
            lines.next(),
            Some(r#""First Aid at Work","Red Crescent","Nurse Aida","(Yes)""#)
        );
        assert_eq!(lines.next(), None);
    }
}

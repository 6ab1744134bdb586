//! Type definitions for the extraction backend's responses
//!
//! These mirror the JSON contract of the external `/upload` endpoint.

use serde::{Deserialize, Serialize};

/// Structured fields produced by the external brochure extractor.
///
/// The backend gives no schema guarantee: keys may be missing entirely or
/// explicitly `null` when extraction found nothing, and confidences arrive
/// as numbers or as labels like `"High"`/`"Low"`. All of those shapes
/// degrade to empty display values instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRecord {
    // Editable content fields
    #[serde(deserialize_with = "null_to_empty")]
    pub program_title: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub end_date: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub venue: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub training_organiser: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub trainer: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub cost_amount: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub cost_currency: String,

    // Classification fields (read-only in the review form)
    #[serde(deserialize_with = "null_to_empty")]
    pub hrdc_certified: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub method: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub status: String,

    // Per-field extraction confidence (display-only)
    pub confidence_program_title: Option<Confidence>,
    pub confidence_date: Option<Confidence>,
    pub confidence_venue: Option<Confidence>,
    pub confidence_cost: Option<Confidence>,
    pub confidence_trainer: Option<Confidence>,
    pub confidence_organiser: Option<Confidence>,
}

// `#[serde(default)]` only covers missing keys; the backend also sends
// explicit nulls for fields it could not extract.
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Extraction confidence as the backend reports it: some pipeline stages
/// score numerically, others emit labels like `"High"` or `"Low"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(f64),
    Label(String),
}

impl Confidence {
    /// Display form for the read-only confidence list.
    pub fn display(&self) -> String {
        match self {
            Confidence::Number(v) => format!("{v:.2}"),
            Confidence::Label(label) => label.clone(),
        }
    }
}

impl ExtractionRecord {
    /// HRDC certification, parsed once from the raw backend string.
    pub fn hrdc(&self) -> HrdcCertified {
        HrdcCertified::parse(&self.hrdc_certified)
    }

    /// Display category for the extraction status.
    pub fn review_status(&self) -> ReviewStatus {
        ReviewStatus::from_status(&self.status)
    }
}

/// HRDC certification state of a program.
///
/// The backend reports this as a loose string; it is parsed here once at
/// ingestion. The raw string stays on [`ExtractionRecord`] because the
/// Google Form and draft exporters pass it through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrdcCertified {
    Certified,
    NotCertified,
    Unknown,
}

impl HrdcCertified {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("yes") || raw.eq_ignore_ascii_case("true") {
            HrdcCertified::Certified
        } else if raw.eq_ignore_ascii_case("no") || raw.eq_ignore_ascii_case("false") {
            HrdcCertified::NotCertified
        } else {
            HrdcCertified::Unknown
        }
    }
}

/// Display category derived from the backend's `status` field.
///
/// Never persisted; only the literal `READY_TO_FILL` counts as ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Ready,
    NeedsReview,
}

impl ReviewStatus {
    pub fn from_status(status: &str) -> Self {
        if status == "READY_TO_FILL" {
            ReviewStatus::Ready
        } else {
            ReviewStatus::NeedsReview
        }
    }

    /// CSS class used by the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            ReviewStatus::Ready => "ready",
            ReviewStatus::NeedsReview => "needs-review",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrdc_parse_certified_variants() {
        assert_eq!(HrdcCertified::parse("yes"), HrdcCertified::Certified);
        assert_eq!(HrdcCertified::parse("YES"), HrdcCertified::Certified);
        assert_eq!(HrdcCertified::parse("Yes"), HrdcCertified::Certified);
        assert_eq!(HrdcCertified::parse("true"), HrdcCertified::Certified);
    }

    #[test]
    fn test_hrdc_parse_not_certified_and_unknown() {
        assert_eq!(HrdcCertified::parse("no"), HrdcCertified::NotCertified);
        assert_eq!(HrdcCertified::parse("false"), HrdcCertified::NotCertified);
        assert_eq!(HrdcCertified::parse(""), HrdcCertified::Unknown);
        assert_eq!(HrdcCertified::parse("maybe"), HrdcCertified::Unknown);
    }

    #[test]
    fn test_review_status_only_ready_to_fill_is_ready() {
        assert_eq!(ReviewStatus::from_status("READY_TO_FILL"), ReviewStatus::Ready);
        assert_eq!(
            ReviewStatus::from_status("NEEDS_REVIEW"),
            ReviewStatus::NeedsReview
        );
        assert_eq!(ReviewStatus::from_status(""), ReviewStatus::NeedsReview);
        assert_eq!(
            ReviewStatus::from_status("ready_to_fill"),
            ReviewStatus::NeedsReview
        );
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let record: ExtractionRecord =
            serde_json::from_str(r#"{"program_title": "Rust 101"}"#).unwrap();
        assert_eq!(record.program_title, "Rust 101");
        assert_eq!(record.venue, "");
        assert_eq!(record.confidence_venue, None);
    }

    #[test]
    fn test_record_deserializes_with_null_fields() {
        let record: ExtractionRecord = serde_json::from_str(
            r#"{"program_title": "Rust 101", "trainer": null, "venue": null, "confidence_trainer": null}"#,
        )
        .unwrap();
        assert_eq!(record.program_title, "Rust 101");
        assert_eq!(record.trainer, "");
        assert_eq!(record.venue, "");
        assert_eq!(record.confidence_trainer, None);
    }

    #[test]
    fn test_confidence_accepts_labels_and_numbers() {
        let record: ExtractionRecord = serde_json::from_str(
            r#"{"program_title": "Rust 101", "confidence_cost": "Low", "confidence_venue": 0.85}"#,
        )
        .unwrap();
        assert_eq!(
            record.confidence_cost,
            Some(Confidence::Label("Low".to_string()))
        );
        assert_eq!(record.confidence_venue, Some(Confidence::Number(0.85)));
        assert_eq!(record.confidence_cost.unwrap().display(), "Low");
        assert_eq!(record.confidence_venue.unwrap().display(), "0.85");
    }
}

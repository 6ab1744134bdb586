//! Application state owned by the top-level view

use serde::{Deserialize, Serialize};

use crate::types::ExtractionRecord;

/// A file picked in the upload card, already read into memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Upload lifecycle state for the home page.
///
/// One serializable struct instead of loose component-local signals; every
/// transition is a pure function consuming the previous state. Both exit
/// transitions of an upload clear `loading`, so the busy flag can never
/// stay stuck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadState {
    pub file: Option<SelectedFile>,
    pub loading: bool,
    pub record: Option<ExtractionRecord>,
    pub error: Option<String>,
    /// Count of successful uploads, used to remount the review form so a
    /// fresh record always seeds a fresh editor.
    pub upload_count: u32,
}

impl UploadState {
    pub fn file_selected(mut self, file: SelectedFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn upload_started(mut self) -> Self {
        self.loading = true;
        self.error = None;
        self
    }

    pub fn upload_succeeded(mut self, record: ExtractionRecord) -> Self {
        self.loading = false;
        self.record = Some(record);
        self.error = None;
        self.upload_count += 1;
        self
    }

    pub fn upload_failed(mut self, message: String) -> Self {
        self.loading = false;
        self.error = Some(message);
        self
    }

    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.loading
    }
}

/// Working copy of the editable record fields.
///
/// Seeded once per record and owned by the review form for its lifetime;
/// it is never re-synced from the source record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditedState {
    pub program_title: String,
    pub start_date: String,
    pub end_date: String,
    pub venue: String,
    pub training_organiser: String,
    pub trainer: String,
    pub cost_amount: String,
    pub cost_currency: String,
}

impl EditedState {
    pub fn from_record(record: &ExtractionRecord) -> Self {
        Self {
            program_title: record.program_title.clone(),
            start_date: record.start_date.clone(),
            end_date: record.end_date.clone(),
            venue: record.venue.clone(),
            training_organiser: record.training_organiser.clone(),
            trainer: record.trainer.clone(),
            cost_amount: record.cost_amount.clone(),
            cost_currency: record.cost_currency.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> SelectedFile {
        SelectedFile {
            name: "brochure.pdf".to_string(),
            bytes: vec![0x25, 0x50, 0x44, 0x46],
        }
    }

    #[test]
    fn test_upload_started_sets_busy_and_clears_error() {
        let state = UploadState::default()
            .upload_failed("Upload failed".to_string())
            .upload_started();
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failed_upload_produces_no_record_and_clears_busy() {
        let state = UploadState::default()
            .file_selected(sample_file())
            .upload_started()
            .upload_failed("Upload failed".to_string());
        assert!(!state.loading);
        assert!(state.record.is_none());
        assert_eq!(state.error.as_deref(), Some("Upload failed"));
    }

    #[test]
    fn test_successful_upload_stores_record_and_clears_busy() {
        let record = ExtractionRecord {
            program_title: "Leadership Masterclass".to_string(),
            ..Default::default()
        };
        let state = UploadState::default()
            .file_selected(sample_file())
            .upload_started()
            .upload_succeeded(record.clone());
        assert!(!state.loading);
        assert_eq!(state.record, Some(record));
        assert_eq!(state.error, None);
        assert_eq!(state.upload_count, 1);
    }

    #[test]
    fn test_can_upload_requires_file_and_idle() {
        assert!(!UploadState::default().can_upload());
        let selected = UploadState::default().file_selected(sample_file());
        assert!(selected.can_upload());
        assert!(!selected.upload_started().can_upload());
    }

    #[test]
    fn test_edited_state_seeds_all_eight_fields() {
        let record = ExtractionRecord {
            program_title: "Safety at Heights".to_string(),
            start_date: "2026-03-02".to_string(),
            end_date: "2026-03-04".to_string(),
            venue: "Kuala Lumpur".to_string(),
            training_organiser: "Acme Training".to_string(),
            trainer: "Dr. Lim".to_string(),
            cost_amount: "1200".to_string(),
            cost_currency: "MYR".to_string(),
            ..Default::default()
        };
        let edited = EditedState::from_record(&record);
        assert_eq!(edited.program_title, record.program_title);
        assert_eq!(edited.start_date, record.start_date);
        assert_eq!(edited.end_date, record.end_date);
        assert_eq!(edited.venue, record.venue);
        assert_eq!(edited.training_organiser, record.training_organiser);
        assert_eq!(edited.trainer, record.trainer);
        assert_eq!(edited.cost_amount, record.cost_amount);
        assert_eq!(edited.cost_currency, record.cost_currency);
    }
}

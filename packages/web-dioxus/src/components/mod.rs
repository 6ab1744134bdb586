//! Reusable UI components

mod loading;
mod review_form;
mod upload_card;

pub use loading::*;
pub use review_form::*;
pub use upload_card::*;

// Reusable components live here.

pub mod case_study_card;
pub mod case_study_grid;
pub mod error_banner;
pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod raw_html;

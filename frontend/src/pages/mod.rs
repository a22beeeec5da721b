pub mod case_studies;
pub mod case_study_detail;
pub mod category;
pub mod config_error;
pub mod dashboard;
pub mod edit_case_study;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod signup;
pub mod write;

pub mod app_error;
pub mod catalog;
pub mod language;
pub mod use_cases;
pub mod validators;

//! High-level database API. Encapsulates the query logic so HTTP handlers
//! work with domain models without knowing the underlying schema.

pub mod survey_service;
pub mod template_service;
pub mod user_service;

pub use survey_service::SurveyService;

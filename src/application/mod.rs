pub mod use_cases;

pub use use_cases::survey_converter::{ConvertedSurvey, SurveyConverter};

pub mod survey_converter;

//! Data module - spreadsheet loading and case summaries

mod loader;
mod processor;

pub use loader::{
    CaseLoader, LoaderError, AGE_COLUMN, GENDER_COLUMN, REQUIRED_COLUMNS, STATE_COLUMN,
};
pub use processor::{
    bucket_age, AgeBucket, CaseSummary, DataProcessor, GenderAgeCount, InvalidAge,
    ProcessorError, StateCount, AGE_RANGE_COLUMN, UNKNOWN_LABEL,
};

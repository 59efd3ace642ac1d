//! Case Summary Module
//! Age bucketing and the two summary tables (per state, per gender and age range).

use crate::data::loader::{AGE_COLUMN, GENDER_COLUMN, STATE_COLUMN};
use polars::prelude::*;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Column added to the case table by [`DataProcessor::with_age_buckets`].
pub const AGE_RANGE_COLUMN: &str = "age_range";
pub const COUNT_COLUMN: &str = "count";
/// Label used for a missing age, state or gender.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Error, Debug, Clone, PartialEq)]
#[error("'{0}' is neither a non-negative number nor \"Unknown\"")]
pub struct InvalidAge(pub String);

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Case table has no '{0}' column")]
    MissingColumn(&'static str),
    /// `index` is the 0-based position in the case table (header and blank
    /// worksheet rows are not counted).
    #[error("Invalid age at case table index {index}: {source}")]
    InvalidAge {
        index: usize,
        #[source]
        source: InvalidAge,
    },
}

/// Age at arrest, binned. Ordering follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBucket {
    Under20,
    Twenties,
    Thirties,
    Forties,
    Fifties,
    Sixties,
    Seventies,
    EightyPlus,
    Unknown,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 9] = [
        AgeBucket::Under20,
        AgeBucket::Twenties,
        AgeBucket::Thirties,
        AgeBucket::Forties,
        AgeBucket::Fifties,
        AgeBucket::Sixties,
        AgeBucket::Seventies,
        AgeBucket::EightyPlus,
        AgeBucket::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeBucket::Under20 => "<20",
            AgeBucket::Twenties => "20-29",
            AgeBucket::Thirties => "30-39",
            AgeBucket::Forties => "40-49",
            AgeBucket::Fifties => "50-59",
            AgeBucket::Sixties => "60-69",
            AgeBucket::Seventies => "70-79",
            AgeBucket::EightyPlus => "80+",
            AgeBucket::Unknown => UNKNOWN_LABEL,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.label() == label)
    }

    /// Bin a numeric age into the right-closed intervals
    /// [0,19], (19,29], ..., (69,79], (79,inf).
    ///
    /// Negative and NaN ages have no bucket.
    pub fn from_age(age: f64) -> Option<Self> {
        if age.is_nan() || age < 0.0 {
            return None;
        }

        let bucket = if age <= 19.0 {
            AgeBucket::Under20
        } else if age <= 29.0 {
            AgeBucket::Twenties
        } else if age <= 39.0 {
            AgeBucket::Thirties
        } else if age <= 49.0 {
            AgeBucket::Forties
        } else if age <= 59.0 {
            AgeBucket::Fifties
        } else if age <= 69.0 {
            AgeBucket::Sixties
        } else if age <= 79.0 {
            AgeBucket::Seventies
        } else {
            AgeBucket::EightyPlus
        };
        Some(bucket)
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket a raw `agearrest` cell. Null and "Unknown" map to [`AgeBucket::Unknown`].
pub fn bucket_age(raw: Option<&str>) -> Result<AgeBucket, InvalidAge> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(AgeBucket::Unknown);
    };
    if raw == UNKNOWN_LABEL {
        return Ok(AgeBucket::Unknown);
    }

    raw.parse::<f64>()
        .ok()
        .and_then(AgeBucket::from_age)
        .ok_or_else(|| InvalidAge(raw.to_string()))
}

/// Number of cases per state of residence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCount {
    pub state: String,
    pub count: u64,
}

/// Number of cases for one gender within one age range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderAgeCount {
    pub gender: String,
    pub age_bucket: AgeBucket,
    pub count: u64,
}

/// Everything the dashboard shows, derived once from the case table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSummary {
    pub total_cases: usize,
    pub states: Vec<StateCount>,
    pub gender_ages: Vec<GenderAgeCount>,
}

/// Derives the summary tables from the case table.
pub struct DataProcessor;

impl DataProcessor {
    /// Compute both summaries.
    pub fn summarize(df: &DataFrame) -> Result<CaseSummary, ProcessorError> {
        let states = Self::state_counts(df)?;
        let gender_ages = Self::gender_age_counts(df)?;

        debug!(
            cases = df.height(),
            states = states.len(),
            gender_age_groups = gender_ages.len(),
            "summarized case table"
        );

        Ok(CaseSummary {
            total_cases: df.height(),
            states,
            gender_ages,
        })
    }

    /// Copy of the case table with an `age_range` label column.
    ///
    /// Fails on the first age that is neither numeric nor "Unknown".
    pub fn with_age_buckets(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let ages = Self::require(df, AGE_COLUMN)?.cast(&DataType::String)?;
        let labels = ages
            .str()?
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                bucket_age(raw)
                    .map(AgeBucket::label)
                    .map_err(|source| ProcessorError::InvalidAge { index, source })
            })
            .collect::<Result<Vec<&str>, _>>()?;

        let mut out = df.clone();
        out.with_column(Column::new(AGE_RANGE_COLUMN.into(), labels))?;
        Ok(out)
    }

    /// Case counts per state, largest first (ties by state code).
    pub fn state_counts(df: &DataFrame) -> Result<Vec<StateCount>, ProcessorError> {
        Self::require(df, STATE_COLUMN)?;

        let grouped = df
            .clone()
            .lazy()
            .select([Self::labelled(STATE_COLUMN)])
            .group_by([col(STATE_COLUMN)])
            .agg([len().alias(COUNT_COLUMN)])
            .collect()?;

        let states = grouped.column(STATE_COLUMN)?.str()?;
        let counts = grouped.column(COUNT_COLUMN)?.cast(&DataType::UInt64)?;

        let mut result: Vec<StateCount> = states
            .into_iter()
            .zip(counts.u64()?.into_iter())
            .filter_map(|(state, count)| match (state, count) {
                (Some(state), Some(count)) if count > 0 => Some(StateCount {
                    state: state.to_string(),
                    count,
                }),
                _ => None,
            })
            .collect();

        result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.state.cmp(&b.state)));
        Ok(result)
    }

    /// Case counts per (gender, age range), gender descending then age range
    /// descending. Only non-empty combinations are emitted.
    pub fn gender_age_counts(df: &DataFrame) -> Result<Vec<GenderAgeCount>, ProcessorError> {
        Self::require(df, GENDER_COLUMN)?;
        let bucketed = Self::with_age_buckets(df)?;

        let grouped = bucketed
            .lazy()
            .select([Self::labelled(GENDER_COLUMN), col(AGE_RANGE_COLUMN)])
            .group_by([col(GENDER_COLUMN), col(AGE_RANGE_COLUMN)])
            .agg([len().alias(COUNT_COLUMN)])
            .filter(col(COUNT_COLUMN).gt(lit(0)))
            .collect()?;

        let genders = grouped.column(GENDER_COLUMN)?.str()?;
        let ranges = grouped.column(AGE_RANGE_COLUMN)?.str()?;
        let counts = grouped.column(COUNT_COLUMN)?.cast(&DataType::UInt64)?;

        let mut result = Vec::with_capacity(grouped.height());
        for ((gender, range), count) in genders
            .into_iter()
            .zip(ranges.into_iter())
            .zip(counts.u64()?.into_iter())
        {
            // labels were produced by AgeBucket::label, so from_label always matches
            let (Some(gender), Some(age_bucket), Some(count)) =
                (gender, range.and_then(AgeBucket::from_label), count)
            else {
                continue;
            };
            result.push(GenderAgeCount {
                gender: gender.to_string(),
                age_bucket,
                count,
            });
        }

        result.sort_by(|a, b| {
            b.gender
                .cmp(&a.gender)
                .then_with(|| b.age_bucket.cmp(&a.age_bucket))
        });
        Ok(result)
    }

    fn require<'a>(df: &'a DataFrame, name: &'static str) -> Result<&'a Column, ProcessorError> {
        df.column(name)
            .map_err(|_| ProcessorError::MissingColumn(name))
    }

    /// Column as text with missing values labelled "Unknown".
    fn labelled(name: &str) -> Expr {
        col(name)
            .cast(DataType::String)
            .fill_null(lit(UNKNOWN_LABEL))
    }
}

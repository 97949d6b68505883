/// A validated series of paired observations.
///
/// Holds two equal-length sequences: the independent variable (price, in
/// the market setting) and the dependent variable (observed quantity).
/// Construction and deserialization enforce the regression preconditions,
/// so a `SampleSeries` in hand is always fit-able: equal lengths, at
/// least two points, all values finite.
///
/// A series is consumed once by the curve fitter and not retained.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SampleSeriesDto", into = "SampleSeriesDto")
)]
pub struct SampleSeries {
    independent: Vec<f64>,
    dependent: Vec<f64>,
}

impl SampleSeries {
    /// Creates a new series, validating the regression preconditions
    pub fn new(independent: Vec<f64>, dependent: Vec<f64>) -> Result<Self, SampleSeriesError> {
        Self::try_from(SampleSeriesDto {
            independent,
            dependent,
        })
    }

    /// The number of paired observations
    pub fn len(&self) -> usize {
        self.independent.len()
    }

    /// Always false: a valid series has at least two points
    pub fn is_empty(&self) -> bool {
        self.independent.is_empty()
    }

    /// The independent variable values
    pub fn independent(&self) -> &[f64] {
        &self.independent
    }

    /// The dependent variable values
    pub fn dependent(&self) -> &[f64] {
        &self.dependent
    }

    /// Iterates over the `(independent, dependent)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.independent
            .iter()
            .copied()
            .zip(self.dependent.iter().copied())
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug)]
pub struct SampleSeriesDto {
    /// Candidate independent variable values
    pub independent: Vec<f64>,
    /// Candidate dependent variable values
    pub dependent: Vec<f64>,
}

impl From<SampleSeries> for SampleSeriesDto {
    fn from(value: SampleSeries) -> Self {
        SampleSeriesDto {
            independent: value.independent,
            dependent: value.dependent,
        }
    }
}

impl TryFrom<SampleSeriesDto> for SampleSeries {
    type Error = SampleSeriesError;

    /// Attempts to create a series from a DTO, validating all constraints
    ///
    /// # Validation
    ///
    /// 1. Both sequences have the same length
    /// 2. There are at least two observations
    /// 3. Every value is a finite real number
    fn try_from(value: SampleSeriesDto) -> Result<Self, Self::Error> {
        if value.independent.len() != value.dependent.len() {
            return Err(SampleSeriesError::LengthMismatch {
                independent: value.independent.len(),
                dependent: value.dependent.len(),
            });
        }

        if value.independent.len() < 2 {
            return Err(SampleSeriesError::TooShort(value.independent.len()));
        }

        if value
            .independent
            .iter()
            .chain(value.dependent.iter())
            .any(|x| !x.is_finite())
        {
            return Err(SampleSeriesError::NonFinite);
        }

        Ok(Self {
            independent: value.independent,
            dependent: value.dependent,
        })
    }
}

/// Errors that can occur when constructing a sample series
///
/// These correspond to malformed or insufficient input data; they are
/// terminal for the analysis that supplied the data.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SampleSeriesError {
    /// Error when the two sequences have different lengths
    #[error("sequences must have equal length (got {independent} and {dependent})")]
    LengthMismatch {
        /// Length of the independent sequence
        independent: usize,
        /// Length of the dependent sequence
        dependent: usize,
    },
    /// Error when fewer than two observations are provided
    #[error("at least 2 data points are required (got {0})")]
    TooShort(usize),
    /// Error when any value is NaN or infinite
    #[error("sample values must be finite")]
    NonFinite,
}

/// The tolerance below which a magnitude is treated as zero.
///
/// Applied consistently to every near-zero guard in the analysis: the
/// regression denominator, the slope difference of two curves, and the
/// slope of a single curve when computing its price-axis intercept.
/// Exact comparison against zero would misclassify values that only
/// differ from zero by floating-point noise.
pub const TOLERANCE: f64 = 1e-10;

/// A fitted linear curve, `quantity = intercept + slope * price`.
///
/// Produced by the curve fitter (or supplied directly as literal
/// parameters) and never mutated. The same representation covers demand
/// curves (negative slope, typically) and supply curves (positive slope).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LinearCurveDto", into = "LinearCurveDto")
)]
pub struct LinearCurve {
    /// Quantity at price zero (the quantity-axis intercept, b0)
    pub intercept: f64,
    /// Change in quantity per unit of price (b1)
    pub slope: f64,
}

impl LinearCurve {
    /// Creates a new curve, rejecting non-finite coefficients
    pub fn new(intercept: f64, slope: f64) -> Result<Self, LinearCurveError> {
        Self::try_from(LinearCurveDto { intercept, slope })
    }

    /// The quantity on this curve at the given price
    pub fn quantity_at(&self, price: f64) -> f64 {
        self.intercept + self.slope * price
    }

    /// The price at which this curve crosses quantity zero.
    ///
    /// Returns `f64::INFINITY` when the slope is within [`TOLERANCE`] of
    /// zero: a flat curve never reaches the price axis.
    pub fn price_intercept(&self) -> f64 {
        if self.slope.abs() < TOLERANCE {
            f64::INFINITY
        } else {
            -self.intercept / self.slope
        }
    }

    /// The quantity at which this curve crosses price zero
    pub fn quantity_intercept(&self) -> f64 {
        self.intercept
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug)]
pub struct LinearCurveDto {
    /// Candidate intercept
    pub intercept: f64,
    /// Candidate slope
    pub slope: f64,
}

impl From<LinearCurve> for LinearCurveDto {
    fn from(value: LinearCurve) -> Self {
        LinearCurveDto {
            intercept: value.intercept,
            slope: value.slope,
        }
    }
}

impl TryFrom<LinearCurveDto> for LinearCurve {
    type Error = LinearCurveError;

    fn try_from(value: LinearCurveDto) -> Result<Self, Self::Error> {
        if value.intercept.is_nan() || value.slope.is_nan() {
            return Err(LinearCurveError::NaN);
        }
        if value.intercept.is_infinite() || value.slope.is_infinite() {
            return Err(LinearCurveError::Infinity);
        }

        Ok(Self {
            intercept: value.intercept,
            slope: value.slope,
        })
    }
}

/// Errors that can occur when constructing a linear curve
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LinearCurveError {
    /// Error when either coefficient is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when either coefficient is infinite
    #[error("intercept and slope cannot be infinite")]
    Infinity,
}

use sdc_core::models::{LinearCurve, SampleSeries, TOLERANCE};

/// The sums accumulated in a single pass over a sample series.
///
/// These are the classical inputs to the ordinary-least-squares formulas.
/// `yy` is carried along with the others but is not consumed by the fit
/// itself; it only matters to goodness-of-fit diagnostics, which are out
/// of scope here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegressionSums {
    /// Σx
    pub x: f64,
    /// Σy
    pub y: f64,
    /// Σx²
    pub xx: f64,
    /// Σxy
    pub xy: f64,
    /// Σy²
    pub yy: f64,
}

impl RegressionSums {
    /// Accumulates the five sums over the series, in observation order
    pub fn from_series(series: &SampleSeries) -> Self {
        let mut sums = Self::default();
        for (x, y) in series.iter() {
            sums.x += x;
            sums.y += y;
            sums.xx += x * x;
            sums.xy += x * y;
            sums.yy += y * y;
        }
        sums
    }
}

/// Fits a line through the series by ordinary least squares.
///
/// The series holds the independent variable first (price) and the
/// dependent variable second (quantity), so the result reads
/// `quantity = intercept + slope * price`.
///
/// # Errors
///
/// Returns [`FitError::NoVariance`] when all independent-variable values
/// are effectively identical: the regression denominator is then within
/// [`TOLERANCE`] of zero and the slope is undefined.
pub fn fit(series: &SampleSeries) -> Result<LinearCurve, FitError> {
    let n = series.len() as f64;
    let sums = RegressionSums::from_series(series);

    let denominator = sums.xx - (sums.x * sums.x) / n;
    if denominator.abs() < TOLERANCE {
        return Err(FitError::NoVariance);
    }

    let slope = (sums.xy - (sums.x * sums.y) / n) / denominator;
    let intercept = (sums.y - slope * sums.x) / n;

    Ok(LinearCurve { intercept, slope })
}

/// Errors that can occur when fitting a curve
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Error when the independent variable has no variance
    #[error("no variance in independent variable; slope undefined")]
    NoVariance,
}

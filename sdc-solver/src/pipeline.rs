use crate::{FitError, SolveError, SurplusError, compute_surplus, fit, solve};
use sdc_core::models::{AnalysisResult, SampleSeries};
use tracing::{Level, event};

/// Runs the full analysis: fit both curves, solve for their equilibrium,
/// and compute the surplus areas.
///
/// The stages run strictly in sequence and the first failure propagates
/// unchanged; no partial result is ever returned. The function is pure,
/// so calling it twice with the same inputs yields the same result, and
/// failures are definitional rather than transient: nothing is retried.
pub fn analyze(
    demand: &SampleSeries,
    supply: &SampleSeries,
) -> Result<AnalysisResult, AnalysisError> {
    let demand_curve = fit(demand)?;
    let supply_curve = fit(supply)?;
    event!(
        Level::DEBUG,
        demand_intercept = demand_curve.intercept,
        demand_slope = demand_curve.slope,
        supply_intercept = supply_curve.intercept,
        supply_slope = supply_curve.slope,
        "fitted curves"
    );

    let equilibrium = solve(&demand_curve, &supply_curve)?;
    event!(
        Level::DEBUG,
        price = equilibrium.price,
        quantity = equilibrium.quantity,
        "solved equilibrium"
    );

    let surplus = compute_surplus(
        &equilibrium,
        demand_curve.price_intercept(),
        supply_curve.quantity_intercept(),
        supply_curve.price_intercept(),
    )?;

    Ok(AnalysisResult {
        demand: demand_curve,
        supply: supply_curve,
        equilibrium,
        surplus,
    })
}

/// Errors that can occur during a full analysis
///
/// Each variant wraps the error of the stage that failed, verbatim.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// A curve could not be fitted
    #[error("curve fit failed: {0}")]
    Fit(#[from] FitError),
    /// The fitted curves have no usable intersection
    #[error("equilibrium solve failed: {0}")]
    Solve(#[from] SolveError),
    /// The equilibrium could not support a surplus computation
    #[error("surplus computation failed: {0}")]
    Surplus(#[from] SurplusError),
}

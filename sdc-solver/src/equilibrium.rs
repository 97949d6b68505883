use sdc_core::models::{EquilibriumPoint, LinearCurve, TOLERANCE};

/// Finds the intersection of a demand and a supply curve.
///
/// Both curves are expressed as `quantity = intercept + slope * price`,
/// so the equilibrium price solves
/// `demand.intercept + demand.slope * p = supply.intercept + supply.slope * p`.
///
/// # Errors
///
/// - [`SolveError::ParallelCurves`] when the slopes differ by less than
///   [`TOLERANCE`]: there is no unique intersection.
/// - [`SolveError::Infeasible`] when the algebraic intersection has a
///   negative price or quantity. Such a point is mathematically valid but
///   economically meaningless, and is reported distinctly from the
///   parallel case.
pub fn solve(demand: &LinearCurve, supply: &LinearCurve) -> Result<EquilibriumPoint, SolveError> {
    let slope_gap = demand.slope - supply.slope;
    if slope_gap.abs() < TOLERANCE {
        return Err(SolveError::ParallelCurves);
    }

    let price = (supply.intercept - demand.intercept) / slope_gap;
    let quantity = demand.quantity_at(price);

    if price < 0.0 || quantity < 0.0 {
        return Err(SolveError::Infeasible);
    }

    Ok(EquilibriumPoint { price, quantity })
}

/// Errors that can occur when solving for an equilibrium
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// Error when the two curves have effectively equal slopes
    #[error("curves are parallel, no unique intersection")]
    ParallelCurves,
    /// Error when the intersection has a negative price or quantity
    #[error("equilibrium point lies outside the economically valid region")]
    Infeasible,
}

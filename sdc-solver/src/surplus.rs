use sdc_core::models::{EquilibriumPoint, SurplusResult};

/// Computes consumer and producer surplus at an equilibrium point.
///
/// Consumer surplus is the triangle between the demand curve and the
/// equilibrium price, up to the demand curve's price-axis intercept.
/// Producer surplus depends on where the supply curve meets the axes:
/// a curve that supplies a positive quantity at price zero bounds a
/// trapezoid, while one starting from a positive price floor bounds a
/// triangle. The branch condition is part of the contract and must not
/// be replaced by a unified integral, which would change the numbers for
/// edge slopes.
///
/// # Errors
///
/// Returns [`SurplusError::NonPositiveEquilibrium`] unless both the
/// equilibrium price and quantity are strictly positive.
pub fn compute_surplus(
    equilibrium: &EquilibriumPoint,
    demand_price_intercept: f64,
    supply_quantity_intercept: f64,
    supply_price_intercept: f64,
) -> Result<SurplusResult, SurplusError> {
    if equilibrium.price <= 0.0 || equilibrium.quantity <= 0.0 {
        return Err(SurplusError::NonPositiveEquilibrium);
    }

    let consumer = equilibrium.quantity * (demand_price_intercept - equilibrium.price) / 2.0;

    let producer = if supply_quantity_intercept > 0.0 {
        (equilibrium.quantity + supply_quantity_intercept) * equilibrium.price / 2.0
    } else {
        equilibrium.quantity * (equilibrium.price - supply_price_intercept) / 2.0
    };

    Ok(SurplusResult { consumer, producer })
}

/// Errors that can occur when computing surpluses
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SurplusError {
    /// Error when the equilibrium price or quantity is not strictly positive
    #[error("equilibrium price and quantity must be positive")]
    NonPositiveEquilibrium,
}

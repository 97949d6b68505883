use sdc_core::models::AnalysisResult;
use std::io::Write;

/// An insertion-ordered map of named result fields.
///
/// Iteration order is the declaration order of the fields, so exports are
/// deterministic run to run.
pub type FieldMap = indexmap::IndexMap<&'static str, f64, rustc_hash::FxBuildHasher>;

/// Flattens a result into its named scalar fields, in export order.
pub fn flatten(result: &AnalysisResult) -> FieldMap {
    FieldMap::from_iter([
        ("demand_intercept", result.demand.intercept),
        ("demand_slope", result.demand.slope),
        ("supply_intercept", result.supply.intercept),
        ("supply_slope", result.supply.slope),
        ("equilibrium_price", result.equilibrium.price),
        ("equilibrium_quantity", result.equilibrium.quantity),
        ("consumer_surplus", result.surplus.consumer),
        ("producer_surplus", result.surplus.producer),
        ("total_surplus", result.surplus.total()),
    ])
}

/// Writes the flattened result as `Parameter,Value` rows.
pub fn export_csv(
    result: &AnalysisResult,
    buffer: &mut impl Write,
) -> Result<(), std::io::Error> {
    writeln!(buffer, "Parameter,Value")?;
    writeln!(buffer, "Demand Intercept,{}", result.demand.intercept)?;
    writeln!(buffer, "Demand Slope,{}", result.demand.slope)?;
    writeln!(buffer, "Supply Intercept,{}", result.supply.intercept)?;
    writeln!(buffer, "Supply Slope,{}", result.supply.slope)?;
    writeln!(buffer, "Equilibrium Price,{}", result.equilibrium.price)?;
    writeln!(buffer, "Equilibrium Quantity,{}", result.equilibrium.quantity)?;
    writeln!(buffer, "Consumer Surplus,{}", result.surplus.consumer)?;
    writeln!(buffer, "Producer Surplus,{}", result.surplus.producer)?;
    writeln!(buffer, "Total Surplus,{}", result.surplus.total())?;
    Ok(())
}

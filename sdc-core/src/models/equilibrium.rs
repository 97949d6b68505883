/// The market-clearing intersection of a demand and a supply curve.
///
/// Both fields are non-negative whenever the point was produced by the
/// equilibrium solver, which rejects intersections outside the
/// economically valid region.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquilibriumPoint {
    /// The price at which quantity demanded equals quantity supplied
    pub price: f64,
    /// The quantity traded at that price
    pub quantity: f64,
}

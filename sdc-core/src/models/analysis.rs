use super::{EquilibriumPoint, LinearCurve, SurplusResult};

/// The complete outcome of one analysis, handed to the presentation layer.
///
/// Aggregates the two fitted curves, their equilibrium, and the surplus
/// areas. No partial result is ever produced: a failure anywhere in the
/// pipeline surfaces as an error instead.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisResult {
    /// The fitted demand curve
    pub demand: LinearCurve,
    /// The fitted supply curve
    pub supply: LinearCurve,
    /// The intersection of the two curves
    pub equilibrium: EquilibriumPoint,
    /// Consumer and producer surplus at the equilibrium
    pub surplus: SurplusResult,
}

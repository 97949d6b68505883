/// Welfare areas at the equilibrium point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurplusResult {
    /// Consumer surplus: the area between the demand curve and the
    /// equilibrium price
    pub consumer: f64,
    /// Producer surplus: the area between the equilibrium price and the
    /// supply curve
    pub producer: f64,
}

impl SurplusResult {
    /// Total welfare, the sum of consumer and producer surplus
    pub fn total(&self) -> f64 {
        self.consumer + self.producer
    }
}

use sdc_core::models::AnalysisResult;

/// Sampled curve data for a charting consumer.
///
/// The chart draws both curves over the price range
/// `[0, 1.1 * max(price intercepts)]`, so the grid extends a little past
/// the last axis crossing. A non-finite price intercept (flat curve)
/// contributes 0 to the maximum, matching how the axis bounds behave when
/// a curve never reaches quantity zero.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    /// The uniform price grid, ascending from 0
    pub prices: Vec<f64>,
    /// Demand-curve quantities at each grid price
    pub demand_quantities: Vec<f64>,
    /// Supply-curve quantities at each grid price
    pub supply_quantities: Vec<f64>,
}

impl PlotSeries {
    /// Samples both curves of the result on a uniform grid of `points`
    /// prices (at least two).
    pub fn sample(result: &AnalysisResult, points: usize) -> Self {
        let ceiling = Self::price_ceiling(result);
        let points = points.max(2);
        let step = ceiling / (points - 1) as f64;

        let prices: Vec<f64> = (0..points).map(|i| i as f64 * step).collect();
        let demand_quantities = prices.iter().map(|&p| result.demand.quantity_at(p)).collect();
        let supply_quantities = prices.iter().map(|&p| result.supply.quantity_at(p)).collect();

        Self {
            prices,
            demand_quantities,
            supply_quantities,
        }
    }

    /// The top of the plotted price range: 1.1 times the largest finite
    /// price-axis intercept of the two curves (0 when neither is finite)
    pub fn price_ceiling(result: &AnalysisResult) -> f64 {
        let demand = result.demand.price_intercept();
        let supply = result.supply.price_intercept();

        let max = f64::max(
            if demand.is_finite() { demand } else { 0.0 },
            if supply.is_finite() { supply } else { 0.0 },
        );
        1.1 * max
    }
}

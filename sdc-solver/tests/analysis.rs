use approx::assert_relative_eq;
use rstest::*;
use sdc_solver::{
    AnalysisError, FitError, LinearCurve, PlotSeries, SampleSeries, SolveError, analyze,
    compute_surplus, fit, solve,
};

#[fixture]
pub fn observed_market() -> (SampleSeries, SampleSeries) {
    let prices = vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

    let demand = SampleSeries::new(
        prices.clone(),
        vec![135.0, 104.0, 81.0, 68.0, 53.0, 39.0],
    )
    .unwrap();
    let supply =
        SampleSeries::new(prices, vec![26.0, 53.0, 81.0, 98.0, 110.0, 121.0]).unwrap();

    (demand, supply)
}

#[rstest]
fn fits_observed_curves(observed_market: (SampleSeries, SampleSeries)) {
    let (demand, supply) = observed_market;

    let demand_curve = fit(&demand).unwrap();
    assert_relative_eq!(demand_curve.intercept, 199.97142857142856, max_relative = 1e-9);
    assert_relative_eq!(demand_curve.slope, -18.457142857142856, max_relative = 1e-9);

    let supply_curve = fit(&supply).unwrap();
    assert_relative_eq!(supply_curve.intercept, -41.62857142857143, max_relative = 1e-9);
    assert_relative_eq!(supply_curve.slope, 18.942857142857143, max_relative = 1e-9);
}

#[rstest]
fn analyzes_observed_market_end_to_end(observed_market: (SampleSeries, SampleSeries)) {
    let (demand, supply) = observed_market;

    let result = analyze(&demand, &supply).unwrap();

    assert_relative_eq!(result.equilibrium.price, 6.459893048128342, max_relative = 1e-9);
    assert_relative_eq!(result.equilibrium.quantity, 80.74025974025975, max_relative = 1e-9);

    // the fitted supply curve has a negative quantity intercept, so the
    // producer surplus comes from the triangle rule
    assert!(result.supply.quantity_intercept() <= 0.0);
    assert_relative_eq!(result.surplus.consumer, 176.59801393371617, max_relative = 1e-9);
    assert_relative_eq!(result.surplus.producer, 172.06985973028753, max_relative = 1e-9);
    assert_relative_eq!(result.surplus.total(), 348.6678736640037, max_relative = 1e-9);
}

#[rstest]
fn analyze_is_idempotent(observed_market: (SampleSeries, SampleSeries)) {
    let (demand, supply) = observed_market;

    let first = analyze(&demand, &supply).unwrap();
    let second = analyze(&demand, &supply).unwrap();

    assert_eq!(first, second);
}

#[test]
fn literal_curve_parameters_use_trapezoid_branch() {
    let demand = LinearCurve {
        intercept: 15000.0,
        slope: -2500.0,
    };
    let supply = LinearCurve {
        intercept: 2000.0,
        slope: 7500.0,
    };

    let equilibrium = solve(&demand, &supply).unwrap();
    assert_relative_eq!(equilibrium.price, 1.3, max_relative = 1e-12);
    assert_relative_eq!(equilibrium.quantity, 11750.0, max_relative = 1e-12);

    assert!(supply.quantity_intercept() > 0.0);
    let surplus = compute_surplus(
        &equilibrium,
        demand.price_intercept(),
        supply.quantity_intercept(),
        supply.price_intercept(),
    )
    .unwrap();

    assert_relative_eq!(surplus.consumer, 27612.5, max_relative = 1e-12);
    assert_relative_eq!(surplus.producer, 8937.5, max_relative = 1e-12);
}

#[rstest]
fn plot_series_covers_padded_price_range(observed_market: (SampleSeries, SampleSeries)) {
    let (demand, supply) = observed_market;
    let result = analyze(&demand, &supply).unwrap();

    let series = PlotSeries::sample(&result, 100);

    // the demand curve's price intercept dominates the supply curve's
    let ceiling = 1.1 * result.demand.price_intercept();
    assert_eq!(series.prices[0], 0.0);
    assert_relative_eq!(series.prices[99], ceiling, max_relative = 1e-9);

    // the grid endpoints evaluate both curves
    assert_relative_eq!(
        series.demand_quantities[0],
        result.demand.quantity_intercept(),
        max_relative = 1e-9
    );
    assert_relative_eq!(
        series.supply_quantities[99],
        result.supply.quantity_at(ceiling),
        max_relative = 1e-9
    );
}

#[rstest]
#[case::degenerate_demand(true)]
#[case::degenerate_supply(false)]
fn constant_prices_fail_the_fit(#[case] degenerate_demand: bool) {
    let degenerate = SampleSeries::new(vec![7.0, 7.0, 7.0], vec![1.0, 2.0, 3.0]).unwrap();
    let healthy = SampleSeries::new(vec![1.0, 2.0, 3.0], vec![30.0, 20.0, 10.0]).unwrap();

    // whichever side is degenerate, the pipeline reports the fit failure
    let err = if degenerate_demand {
        analyze(&degenerate, &healthy).unwrap_err()
    } else {
        analyze(&healthy, &degenerate).unwrap_err()
    };
    assert_eq!(err, AnalysisError::Fit(FitError::NoVariance));
}

#[test]
fn mirrored_slopes_still_intersect() {
    // equal-magnitude opposite slopes are not parallel
    let demand = LinearCurve {
        intercept: 100.0,
        slope: -5.0,
    };
    let supply = LinearCurve {
        intercept: 0.0,
        slope: 5.0,
    };

    let equilibrium = solve(&demand, &supply).unwrap();
    assert_relative_eq!(equilibrium.price, 10.0, max_relative = 1e-12);
    assert_relative_eq!(equilibrium.quantity, 50.0, max_relative = 1e-12);
}

#[test]
fn crossing_outside_the_positive_quadrant_is_reported_distinctly() {
    // intersection exists algebraically, but at a negative price
    let demand = LinearCurve {
        intercept: 10.0,
        slope: -1.0,
    };
    let supply = LinearCurve {
        intercept: 50.0,
        slope: 1.0,
    };

    assert_eq!(solve(&demand, &supply).unwrap_err(), SolveError::Infeasible);
}

/**
 * The computational engine: curve fitting, equilibrium solving, and
 * surplus computation, plus the pipeline that runs them in sequence.
 *
 * Every operation is a pure, synchronous function of its inputs. There is
 * no shared state, so callers are free to run any number of analyses
 * concurrently.
 */
mod equilibrium;
mod export;
mod fit;
mod pipeline;
mod plot;
mod surplus;

pub use equilibrium::{SolveError, solve};
pub use export::{FieldMap, export_csv, flatten};
pub use fit::{FitError, RegressionSums, fit};
pub use pipeline::{AnalysisError, analyze};
pub use plot::PlotSeries;
pub use surplus::{SurplusError, compute_surplus};

/**
 * Reading datasets from external sources (JSON or tabular files).
 */
#[cfg(feature = "io")]
pub mod io;

// Re-export the domain models so downstream crates only need one dependency
pub use sdc_core::models::{
    AnalysisResult, EquilibriumPoint, LinearCurve, SampleSeries, SampleSeriesError, SurplusResult,
    TOLERANCE,
};

mod analysis;
mod curve;
mod equilibrium;
mod samples;
mod surplus;

pub use analysis::AnalysisResult;
pub use curve::{LinearCurve, LinearCurveDto, LinearCurveError, TOLERANCE};
pub use equilibrium::EquilibriumPoint;
pub use samples::{SampleSeries, SampleSeriesDto, SampleSeriesError};
pub use surplus::SurplusResult;

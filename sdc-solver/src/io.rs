use crate::{AnalysisError, analyze};
use sdc_core::models::{AnalysisResult, SampleSeries, SampleSeriesError};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Read};

/// Observed samples for one curve, as they appear in a dataset file.
///
/// Validation happens when the samples are turned into a
/// [`SampleSeries`], not at deserialization: a dataset file can be
/// inspected even when one of its curves is unusable.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurveSamples {
    /// Observed prices
    pub prices: Vec<f64>,
    /// Observed quantities, paired with `prices` by position
    pub quantities: Vec<f64>,
}

impl CurveSamples {
    /// Validates the samples into a fit-able series (price independent,
    /// quantity dependent)
    pub fn into_series(self) -> Result<SampleSeries, SampleSeriesError> {
        SampleSeries::new(self.prices, self.quantities)
    }
}

/// A dataset of demand and supply observations.
#[derive(Debug, Serialize, Deserialize)]
pub struct Dataset {
    /// Samples for the demand curve
    pub demand: CurveSamples,
    /// Samples for the supply curve
    pub supply: CurveSamples,
}

impl Dataset {
    /// Reads a dataset from tabular text with a header row naming the
    /// `curve_type`, `price`, and `quantity` columns (in any order).
    /// Each data row is tagged `demand` or `supply`; blank lines are
    /// skipped.
    pub fn from_csv(input: impl Read) -> Result<Self, DatasetError> {
        let mut lines = BufReader::new(input).lines();

        let header = lines.next().ok_or(DatasetError::Empty)??;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let locate = |name: &'static str| {
            columns
                .iter()
                .position(|c| *c == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        let type_column = locate("curve_type")?;
        let price_column = locate("price")?;
        let quantity_column = locate("quantity")?;

        let mut demand = CurveSamples {
            prices: Vec::new(),
            quantities: Vec::new(),
        };
        let mut supply = CurveSamples {
            prices: Vec::new(),
            quantities: Vec::new(),
        };

        for (offset, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            // 1-based, counting the header
            let row = offset + 2;
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let field = |column: usize| {
                fields
                    .get(column)
                    .copied()
                    .ok_or(DatasetError::ShortRow { row })
            };

            let price: f64 = field(price_column)?
                .parse()
                .map_err(|_| DatasetError::InvalidNumber { row })?;
            let quantity: f64 = field(quantity_column)?
                .parse()
                .map_err(|_| DatasetError::InvalidNumber { row })?;

            let samples = match field(type_column)? {
                "demand" => &mut demand,
                "supply" => &mut supply,
                other => {
                    return Err(DatasetError::UnknownCurveType {
                        row,
                        value: other.to_owned(),
                    });
                }
            };
            samples.prices.push(price);
            samples.quantities.push(quantity);
        }

        Ok(Self { demand, supply })
    }

    /// Validates both sample sets and runs the full analysis
    pub fn analyze(self) -> Result<AnalysisResult, DatasetError> {
        let demand = self.demand.into_series()?;
        let supply = self.supply.into_series()?;
        Ok(analyze(&demand, &supply)?)
    }
}

/// Errors that can occur when reading or analyzing a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Error when the input has no header row
    #[error("dataset is empty")]
    Empty,
    /// Error when the header lacks a required column
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
    /// Error when a data row has fewer fields than the header
    #[error("row {row} has too few fields")]
    ShortRow {
        /// The offending 1-based row number
        row: usize,
    },
    /// Error when a price or quantity field is not a number
    #[error("row {row} contains an invalid number")]
    InvalidNumber {
        /// The offending 1-based row number
        row: usize,
    },
    /// Error when a row's curve type is neither `demand` nor `supply`
    #[error("row {row} has unknown curve type {value:?}")]
    UnknownCurveType {
        /// The offending 1-based row number
        row: usize,
        /// The unrecognized tag
        value: String,
    },
    /// Error reading the underlying input
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Error validating one of the sample sets
    #[error("invalid sample series: {0}")]
    Samples(#[from] SampleSeriesError),
    /// Error from the analysis itself
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
curve_type,price,quantity
demand,4,135
demand,5,104
demand,6,81
supply,4,26
supply,5,53
supply,6,81
";

    #[test]
    fn test_parse_tabular() {
        let dataset = Dataset::from_csv(TABLE.as_bytes()).unwrap();

        assert_eq!(dataset.demand.prices, vec![4.0, 5.0, 6.0]);
        assert_eq!(dataset.demand.quantities, vec![135.0, 104.0, 81.0]);
        assert_eq!(dataset.supply.prices, vec![4.0, 5.0, 6.0]);
        assert_eq!(dataset.supply.quantities, vec![26.0, 53.0, 81.0]);
    }

    #[test]
    fn test_column_order_is_free() {
        let table = "quantity,curve_type,price\n10,demand,1\n5,demand,2\n1,supply,1\n6,supply,2\n";
        let dataset = Dataset::from_csv(table.as_bytes()).unwrap();

        assert_eq!(dataset.demand.prices, vec![1.0, 2.0]);
        assert_eq!(dataset.demand.quantities, vec![10.0, 5.0]);
        assert_eq!(dataset.supply.quantities, vec![1.0, 6.0]);
    }

    #[test]
    fn test_missing_column() {
        let table = "curve_type,price\ndemand,4\n";
        assert!(matches!(
            Dataset::from_csv(table.as_bytes()).unwrap_err(),
            DatasetError::MissingColumn("quantity"),
        ));
    }

    #[test]
    fn test_unknown_curve_type() {
        let table = "curve_type,price,quantity\nelasticity,4,135\n";
        assert!(matches!(
            Dataset::from_csv(table.as_bytes()).unwrap_err(),
            DatasetError::UnknownCurveType { row: 2, .. },
        ));
    }

    #[test]
    fn test_invalid_number() {
        let table = "curve_type,price,quantity\ndemand,four,135\n";
        assert!(matches!(
            Dataset::from_csv(table.as_bytes()).unwrap_err(),
            DatasetError::InvalidNumber { row: 2 },
        ));
    }

    #[test]
    fn test_deserialize_json_dataset() {
        let raw = r#"{
            "demand": { "prices": [4.0, 5.0, 6.0], "quantities": [135.0, 104.0, 81.0] },
            "supply": { "prices": [4.0, 5.0, 6.0], "quantities": [26.0, 53.0, 81.0] }
        }"#;

        let dataset = serde_json::from_str::<Dataset>(raw).unwrap();
        assert!(dataset.analyze().is_ok());
    }

    #[test]
    fn test_short_samples_surface_on_analyze() {
        let table = "curve_type,price,quantity\ndemand,4,135\nsupply,4,26\nsupply,5,53\n";
        let dataset = Dataset::from_csv(table.as_bytes()).unwrap();

        assert!(matches!(
            dataset.analyze().unwrap_err(),
            DatasetError::Samples(SampleSeriesError::TooShort(1)),
        ));
    }
}

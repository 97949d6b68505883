use super::IOArgs;
use clap::{Subcommand, ValueEnum};
use sdc_solver::io::Dataset;
use sdc_solver::{AnalysisResult, export_csv, flatten};
use std::{
    io::{Read, Write},
    str::FromStr,
};

#[derive(Subcommand)]
pub enum Commands {
    /// Fit both curves, solve the equilibrium, and report the full result
    Analyze {
        #[command(flatten)]
        io: IOArgs,

        /// The dataset format (if omitted, inferred from the input filename,
        /// defaulting to json)
        #[arg(short, long)]
        input_format: Option<InputFormat>,
    },

    /// Run the analysis and export the flat named fields as tabular rows
    Export {
        #[command(flatten)]
        io: IOArgs,

        /// The dataset format (if omitted, inferred from the input filename,
        /// defaulting to json)
        #[arg(short, long)]
        input_format: Option<InputFormat>,

        /// The output format (if omitted, inferred from the output filename)
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },
}

// The dataset can arrive as structured JSON or as the tabular
// curve_type/price/quantity format
#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some("csv") | Some("CSV") => Self::Csv,
            _ => Self::Json,
        }
    }

    pub fn read(self, input: impl Read) -> anyhow::Result<Dataset> {
        match self {
            Self::Json => Ok(serde_json::from_reader(input)?),
            Self::Csv => Ok(Dataset::from_csv(input)?),
        }
    }
}

// Same story here with the ExportFormat enum as with InputFormat
#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn export<W: Write>(&self, result: &AnalysisResult, buffer: &mut W) -> anyhow::Result<()> {
        match self {
            Self::Csv => export_csv(result, buffer)?,
            Self::Json => serde_json::to_writer_pretty(buffer, &flatten(result))?,
        };
        Ok(())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" | "CSV" => Ok(Self::Csv),
            "json" | "JSON" => Ok(Self::Json),
            _ => Err(Self::Err::ExportExtension(s.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ExportFormatError {
    #[error("Unknown export format: {0}")]
    ExportExtension(String),
}

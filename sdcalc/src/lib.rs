use clap::Parser;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Analyze { io, input_format } => {
                let dataset = input_format
                    .unwrap_or_else(|| InputFormat::from_extension(io.input_extension()))
                    .read(io.read()?)?;
                let result = dataset.analyze()?;
                let output = io.write()?;
                serde_json::to_writer_pretty(output, &result)?;
            }
            Commands::Export {
                io,
                input_format,
                format,
            } => {
                let dataset = input_format
                    .unwrap_or_else(|| InputFormat::from_extension(io.input_extension()))
                    .read(io.read()?)?;
                let result = dataset.analyze()?;

                let format = if let Some(format) = format {
                    format
                } else if let Some(ext) = io.output_extension() {
                    ext.parse()?
                } else {
                    return Err(CliError::ExportInference)?;
                };

                let mut output = io.write()?;
                format.export(&result, &mut output)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Unable to infer export format, please specify a valid format")]
    ExportInference,
}

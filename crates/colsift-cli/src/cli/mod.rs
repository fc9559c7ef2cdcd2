//! CLI for colsift.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colsift_core::config;
use colsift_core::store::AllowListDb;
use colsift_core::writer::OutputFormat;
use std::path::PathBuf;

use commands::{
    run_allow_add, run_allow_list, run_allow_remove, run_allow_seed, run_detect, run_normalize,
    run_sift,
};

/// Top-level CLI for colsift.
#[derive(Debug, Parser)]
#[command(name = "colsift")]
#[command(about = "colsift: find the header row of a spreadsheet and keep only allow-listed columns", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Detect the header, keep allow-listed columns, and write the result.
    Sift {
        /// Input file (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv).
        input: PathBuf,
        /// Output file name; the format's extension is appended if missing.
        #[arg(short, long)]
        output: String,
        /// Output format (defaults to config, then xlsx).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Worksheet index for workbooks (defaults to config, then 0).
        #[arg(long, value_name = "N")]
        sheet: Option<usize>,
    },

    /// Show which row would be used as the header and which columns are kept.
    Detect {
        /// Input file.
        input: PathBuf,
        /// Worksheet index for workbooks.
        #[arg(long, value_name = "N")]
        sheet: Option<usize>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical key of each label.
    Normalize {
        /// Labels to normalize.
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Manage the stored allow-list.
    Allow {
        #[command(subcommand)]
        action: AllowCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum AllowCommand {
    /// List stored column names.
    List,
    /// Add column names; names already present in any spelling are skipped.
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove a column name (matched by canonical key).
    Remove { name: String },
    /// Add the configured seed column names.
    Seed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Xlsx,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Xlsx => OutputFormat::Xlsx,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Sift {
                input,
                output,
                format,
                sheet,
            } => {
                let db = AllowListDb::open_default().await?;
                let format = format
                    .map(OutputFormat::from)
                    .or(cfg.output_format)
                    .unwrap_or_default();
                let sheet = sheet.or(cfg.sheet_index).unwrap_or(0);
                run_sift(&db, &cfg, &input, &output, format, sheet).await?;
            }
            CliCommand::Detect { input, sheet, json } => {
                let db = AllowListDb::open_default().await?;
                let sheet = sheet.or(cfg.sheet_index).unwrap_or(0);
                run_detect(&db, &cfg, &input, sheet, json).await?;
            }
            CliCommand::Normalize { labels } => run_normalize(&cfg, &labels),
            CliCommand::Allow { action } => {
                let db = AllowListDb::open_default().await?;
                match action {
                    AllowCommand::List => run_allow_list(&db).await?,
                    AllowCommand::Add { names } => run_allow_add(&db, &names).await?,
                    AllowCommand::Remove { name } => run_allow_remove(&db, &name).await?,
                    AllowCommand::Seed => run_allow_seed(&db, &cfg).await?,
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "wordfreq")]
#[command(about = "Rank the ten most frequent content words of a Korean text")]
pub struct Cli {
    /// Text file to analyze; `-` or nothing reads standard input.
    pub input: Option<PathBuf>,

    /// Source encoding label such as `utf-8` or `euc-kr`. Detected when omitted.
    #[arg(long, short)]
    pub encoding: Option<String>,

    /// Write the report to this file instead of standard output.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write a JSON summary to this file.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// RON configuration file. `./wordfreq.ron` is used when present.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}

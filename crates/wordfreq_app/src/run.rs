use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use wordfreq_engine::{build_summary_json, run_job, AnalysisJob, InputSource, ReportWriter};
use wordfreq_logging::{wf_info, wf_warn};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::logging::LogDestination;

/// Command line merged over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: InputSource,
    pub encoding: Option<String>,
    pub output: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn resolve(cli: Cli, config: AppConfig) -> Self {
        let log_level = config.log_level.parse().unwrap_or_else(|_| {
            eprintln!(
                "Warning: Unknown log level {:?}, using info",
                config.log_level
            );
            LevelFilter::Info
        });

        Self {
            input: InputSource::from_arg(cli.input.as_deref()),
            encoding: cli.encoding.or(config.default_encoding),
            output: cli.output,
            summary: cli.summary,
            log_destination: cli.log.unwrap_or(config.log_destination),
            log_level,
        }
    }
}

pub fn run(settings: &Settings) -> Result<()> {
    let job = AnalysisJob {
        source: settings.input.clone(),
        encoding: settings.encoding.clone(),
    };
    let outcome = run_job(&job).with_context(|| format!("failed to analyze {}", job.source))?;

    if outcome.report.entries.is_empty() {
        wf_warn!("No words survived filtering in {}", job.source);
    }

    let rendered = outcome.report.to_bytes();
    match &settings.output {
        Some(path) => {
            ReportWriter::new(path)
                .write(&rendered)
                .with_context(|| format!("failed to write report to {:?}", path))?;
            wf_info!("Report written to {:?}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }

    if let Some(path) = &settings.summary {
        let generated_utc = chrono::Utc::now().to_rfc3339();
        let summary = build_summary_json(&outcome, &job.source.to_string(), &generated_utc);
        let content = serde_json::to_vec_pretty(&summary)?;
        ReportWriter::new(path)
            .write(&content)
            .with_context(|| format!("failed to write summary to {:?}", path))?;
        wf_info!("Summary written to {:?}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use log::LevelFilter;
    use tempfile::TempDir;
    use wordfreq_engine::InputSource;

    use super::{run, Settings};
    use crate::cli::Cli;
    use crate::config::AppConfig;
    use crate::logging::LogDestination;

    #[test]
    fn command_line_overrides_config() {
        let cli = Cli::parse_from(["wordfreq", "--encoding", "utf-8", "--log", "off", "in.txt"]);
        let config = AppConfig {
            log_destination: LogDestination::Both,
            log_level: "debug".to_string(),
            default_encoding: Some("euc-kr".to_string()),
        };
        let settings = Settings::resolve(cli, config);

        assert_eq!(settings.input, InputSource::File("in.txt".into()));
        assert_eq!(settings.encoding.as_deref(), Some("utf-8"));
        assert_eq!(settings.log_destination, LogDestination::Off);
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn config_fills_what_the_command_line_leaves_out() {
        let cli = Cli::parse_from(["wordfreq", "-"]);
        let config = AppConfig {
            log_destination: LogDestination::File,
            log_level: "loud".to_string(),
            default_encoding: Some("euc-kr".to_string()),
        };
        let settings = Settings::resolve(cli, config);

        assert_eq!(settings.input, InputSource::Stdin);
        assert_eq!(settings.encoding.as_deref(), Some("euc-kr"));
        assert_eq!(settings.log_destination, LogDestination::File);
        assert_eq!(settings.log_level, LevelFilter::Info);
    }

    #[test]
    fn run_writes_report_and_summary() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("input.txt");
        fs::write(&input, "국회의 국회의 국회의").unwrap();
        let output = temp.path().join("out").join("report.txt");
        let summary = temp.path().join("out").join("summary.json");

        let settings = Settings {
            input: InputSource::File(input),
            encoding: None,
            output: Some(output.clone()),
            summary: Some(summary.clone()),
            log_destination: LogDestination::Off,
            log_level: LevelFilter::Off,
        };
        run(&settings).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "=== 텍스트 길이: 29 bytes ===\n=== 상위 10개 단어 ===\n국회 : 3\n============================\n"
        );
        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
        assert_eq!(summary["top_words"][0]["word"], "국회");
        assert_eq!(summary["top_words"][0]["count"], 3);
    }

    #[test]
    fn run_fails_on_missing_input() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            input: InputSource::File(temp.path().join("absent.txt")),
            encoding: None,
            output: None,
            summary: None,
            log_destination: LogDestination::Off,
            log_level: LevelFilter::Off,
        };
        let err = run(&settings).unwrap_err();
        assert!(format!("{err:#}").contains("absent.txt"));
    }
}

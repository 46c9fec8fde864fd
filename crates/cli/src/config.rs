//! Command-line and environment configuration.

use std::path::PathBuf;

use anyhow::{Context, bail};
use salesperf_observability::LogFormat;

/// Env var naming the dataset file when no path argument is given.
pub const INPUT_ENV: &str = "SALESPERF_INPUT";
/// Env var selecting the log encoding (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "SALESPERF_LOG_FORMAT";

pub const USAGE: &str = "usage: salesperf [--pretty] [--log-format json|pretty] <dataset.json>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: PathBuf,
    /// Pretty-print the JSON report.
    pub pretty: bool,
    pub log_format: LogFormat,
}

impl Command {
    /// Parse arguments (without the program name); flags win over environment.
    pub fn parse<I, E>(args: I, env: E) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut input: Option<PathBuf> = None;
        let mut pretty = false;
        let mut log_format: Option<LogFormat> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--pretty" => pretty = true,
                "--log-format" => {
                    let value = args.next().context("--log-format needs a value")?;
                    log_format = Some(parse_log_format(&value)?);
                }
                flag if flag.starts_with('-') => bail!("unknown flag {flag}\n{USAGE}"),
                path => {
                    if input.is_some() {
                        bail!("only one dataset path may be given\n{USAGE}");
                    }
                    input = Some(PathBuf::from(path));
                }
            }
        }

        let input = match input {
            Some(path) => path,
            None => env(INPUT_ENV).map(PathBuf::from).with_context(|| {
                format!("no dataset path given and {INPUT_ENV} not set\n{USAGE}")
            })?,
        };

        let log_format = match log_format {
            Some(format) => format,
            None => match env(LOG_FORMAT_ENV) {
                Some(value) => parse_log_format(&value)?,
                None => LogFormat::default(),
            },
        };

        Ok(Command::Run(CliConfig {
            input,
            pretty,
            log_format,
        }))
    }
}

fn parse_log_format(value: &str) -> anyhow::Result<LogFormat> {
    LogFormat::parse(value).with_context(|| format!("unsupported log format: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn positional_path_and_flags() {
        let cmd = Command::parse(args(&["data.json", "--pretty"]), no_env).unwrap();
        assert_eq!(
            cmd,
            Command::Run(CliConfig {
                input: PathBuf::from("data.json"),
                pretty: true,
                log_format: LogFormat::Json,
            })
        );
    }

    #[test]
    fn input_falls_back_to_env() {
        let env = |key: &str| match key {
            INPUT_ENV => Some("/tmp/snapshot.json".to_string()),
            LOG_FORMAT_ENV => Some("pretty".to_string()),
            _ => None,
        };
        let Command::Run(config) = Command::parse(args(&[]), env).unwrap() else {
            panic!("expected run command");
        };
        assert_eq!(config.input, PathBuf::from("/tmp/snapshot.json"));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.pretty);
    }

    #[test]
    fn flag_overrides_env_log_format() {
        let env = |key: &str| (key == LOG_FORMAT_ENV).then(|| "pretty".to_string());
        let Command::Run(config) =
            Command::parse(args(&["--log-format", "json", "d.json"]), env).unwrap()
        else {
            panic!("expected run command");
        };
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = Command::parse(args(&["--pretty"]), no_env).unwrap_err();
        assert!(err.to_string().contains(INPUT_ENV));
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(Command::parse(args(&["--verbose", "d.json"]), no_env).is_err());
        assert!(Command::parse(args(&["a.json", "b.json"]), no_env).is_err());
        assert!(Command::parse(args(&["--log-format", "xml", "a.json"]), no_env).is_err());
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(Command::parse(args(&["--bogus", "-h"]), no_env).ok(), None);
        assert_eq!(Command::parse(args(&["-h", "--bogus"]), no_env).unwrap(), Command::Help);
    }
}

//! `salesperf` command-line wrapper.
//!
//! Thin IO shell around `salesperf-reporting`: read a JSON snapshot, run the
//! report with the default strategies, render JSON.

pub mod config;

use std::path::Path;

use anyhow::Context;
use salesperf_reporting::{ReportOptions, SellerReport, produce_report};
use salesperf_sales::SalesDataset;

pub use config::{CliConfig, Command};

/// Read and parse a dataset file.
pub fn load_dataset(path: &Path) -> anyhow::Result<SalesDataset> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    parse_dataset(&raw).with_context(|| format!("failed to parse dataset {}", path.display()))
}

pub fn parse_dataset(raw: &str) -> anyhow::Result<SalesDataset> {
    Ok(serde_json::from_str(raw)?)
}

pub fn render_report(report: &[SellerReport], pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(rendered)
}

/// Produce the rendered report for a raw JSON snapshot.
pub fn report_from_json(raw: &str, pretty: bool) -> anyhow::Result<String> {
    let data = parse_dataset(raw)?;
    let report = produce_report(&data, &ReportOptions::default()).context("report failed")?;
    render_report(&report, pretty)
}

/// Load, compute and render according to `config`.
pub fn run(config: &CliConfig) -> anyhow::Result<String> {
    let data = load_dataset(&config.input)?;
    tracing::info!(
        input = %config.input.display(),
        sellers = data.sellers.len(),
        purchase_records = data.purchase_records.len(),
        "dataset loaded"
    );

    let report = produce_report(&data, &ReportOptions::default()).context("report failed")?;
    tracing::info!(sellers = report.len(), "report computed");

    render_report(&report, config.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesperf_core::DomainError;

    const SNAPSHOT: &str = r#"{
        "sellers": [ { "id": "seller_1", "first_name": "Alexey", "last_name": "Petrov" } ],
        "products": [ { "sku": "SKU_001", "purchase_price": 50 } ],
        "purchase_records": [
            { "seller_id": "seller_1", "total_amount": 200,
              "items": [ { "sku": "SKU_001", "quantity": 2, "sale_price": 100, "discount": 0 } ] }
        ]
    }"#;

    #[test]
    fn renders_compact_report() {
        let out = report_from_json(SNAPSHOT, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["seller_id"], "seller_1");
        assert_eq!(value[0]["revenue"], 200.0);
        assert_eq!(value[0]["profit"], 100.0);
        assert_eq!(value[0]["bonus"], 15.0);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn pretty_output_is_multiline() {
        let out = report_from_json(SNAPSHOT, true).unwrap();
        assert!(out.contains('\n'));
    }

    #[test]
    fn domain_errors_stay_inspectable() {
        let err = report_from_json(r#"{ "sellers": [] }"#, false).unwrap_err();
        let domain = err.downcast_ref::<DomainError>().expect("domain error in chain");
        assert!(domain.is_invalid_input());
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(report_from_json("{ not json", false).is_err());
    }

    #[test]
    fn missing_file_mentions_path() {
        let config = CliConfig {
            input: "/definitely/not/here.json".into(),
            pretty: false,
            log_format: salesperf_observability::LogFormat::Json,
        };
        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}

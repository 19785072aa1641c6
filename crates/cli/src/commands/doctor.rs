//! Doctor command - check the provider wiring against the view catalog

use anyhow::Result;
use serde::Serialize;
use stats_view_domain::{
    CATALOG_VERSION, Granularity, ResolutionPath, StatsViewType, catalog, catalog_fingerprint,
    usecases::StatsViewAllViewModelFactoryBuilder,
};
use std::path::PathBuf;

use crate::args::DoctorArgs;
use crate::config::AppConfig;
use crate::wiring;

#[derive(Debug, Serialize)]
struct DoctorReport {
    catalog_version: u32,
    catalog_fingerprint: String,
    config: CheckResult,
    views: Vec<ViewCheck>,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

#[derive(Debug, Serialize)]
struct ViewCheck {
    view_type: StatsViewType,
    #[serde(flatten)]
    result: CheckResult,
}

pub fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        catalog_version: CATALOG_VERSION,
        catalog_fingerprint: catalog_fingerprint(),
        config: CheckResult::error("Not checked"),
        views: vec![],
        overall: "error".to_string(),
    };

    // Check config
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => {
            report.config = CheckResult::ok("Configuration loaded successfully");
            Some(c)
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {}", e));
            None
        }
    };

    if let Some(ref config) = config {
        let builder = wiring::builder(config);
        report.views = check_views(&builder);
    }

    let has_error = report.config.is_error() || report.views.iter().any(|v| v.result.is_error());
    report.overall = if has_error { "error" } else { "ok" }.to_string();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if has_error {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolve every catalog entry on its own path
fn check_views(builder: &StatsViewAllViewModelFactoryBuilder) -> Vec<ViewCheck> {
    catalog::entries()
        .into_iter()
        .filter_map(|entry| {
            let granularity = match entry.path? {
                ResolutionPath::Granular => Some(Granularity::Days),
                ResolutionPath::Insights => None,
            };

            let result = match builder.build_view_model(entry.view_type, granularity) {
                Ok(view_model) => CheckResult::ok(format!(
                    "{} via {}",
                    view_model.title(),
                    view_model.use_case().name()
                )),
                Err(e) => {
                    tracing::error!(view_type = %entry.view_type, error = %e, "View does not resolve");
                    CheckResult::error(e.to_string())
                }
            };

            Some(ViewCheck {
                view_type: entry.view_type,
                result,
            })
        })
        .collect()
}

fn print_report(report: &DoctorReport) {
    println!("stats-view Doctor Report");
    println!("========================");
    println!();
    println!(
        "Catalog: v{} ({})",
        report.catalog_version, report.catalog_fingerprint
    );
    print_check("Config", &report.config);
    println!();

    for view in &report.views {
        print_check(view.view_type.name(), &view.result);
    }

    println!();
    let failed = report.views.iter().filter(|v| v.result.is_error()).count();
    if report.overall == "ok" {
        println!("Overall: ✓ All {} views resolve", report.views.len());
    } else {
        println!("Overall: ✗ {} of {} views failed", failed, report.views.len());
    }
}

fn print_check(name: &str, check: &CheckResult) {
    let icon = if check.is_error() { "✗" } else { "✓" };
    println!("{} {}: {}", icon, name, check.message);
}

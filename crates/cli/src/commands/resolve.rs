//! Resolve command - assemble the view model for one view type

use anyhow::{Context, Result};
use stats_view_domain::usecases::StatsViewAllViewModel;
use std::path::PathBuf;

use crate::args::ResolveArgs;
use crate::config::AppConfig;
use crate::wiring;

pub fn execute(args: ResolveArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).context("Failed to load configuration")?;
    let builder = wiring::builder(&config);

    let view_model = match builder.build_view_model(args.view, args.granularity) {
        Ok(view_model) => view_model,
        Err(e) => {
            if e.is_wiring_defect() {
                tracing::error!(view_type = %args.view, error = %e, "Provider wiring is incomplete");
            } else {
                tracing::warn!(view_type = %args.view, error = %e, "Rejected view-all request");
            }
            return Err(e).with_context(|| format!("Failed to resolve {}", args.view));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&to_json(&args, &view_model))?);
    } else {
        print_view_model(&args, &view_model);
    }

    Ok(())
}

fn to_json(args: &ResolveArgs, view_model: &StatsViewAllViewModel) -> serde_json::Value {
    let use_case = view_model.use_case();
    let site = view_model.site_provider();

    serde_json::json!({
        "view_type": args.view,
        "granularity": args.granularity,
        "title": view_model.title(),
        "section": view_model.date_selector().section(),
        "use_case": {
            "name": use_case.name(),
            "mode": use_case.mode(),
            "granularity": use_case.granularity(),
            "insight_kind": use_case.insight_kind(),
        },
        "site": {
            "id": site.site_id(),
            "name": site.site_name(),
        },
        "dispatchers": {
            "main": view_model.main_dispatcher().name(),
            "background": view_model.bg_dispatcher().name(),
        },
    })
}

fn print_view_model(args: &ResolveArgs, view_model: &StatsViewAllViewModel) {
    let use_case = view_model.use_case();
    let section = view_model.date_selector().section();

    println!("View: {}", args.view);
    println!("  Title: {}", view_model.title());
    println!("  Use case: {} ({:?})", use_case.name(), use_case.mode());
    if let Some(granularity) = use_case.granularity() {
        println!("  Granularity: {}", granularity);
    }
    println!("  Section: {}", section);
    println!(
        "  Site: {} ({})",
        view_model.site_provider().site_name(),
        view_model.site_provider().site_id()
    );
    println!(
        "  Dispatchers: main={}, background={}",
        view_model.main_dispatcher().name(),
        view_model.bg_dispatcher().name()
    );
}

//! Catalog command - list which provider serves each view type

use anyhow::Result;
use stats_view_domain::{CATALOG_VERSION, catalog, catalog_fingerprint};

use crate::args::CatalogArgs;

pub fn execute(args: CatalogArgs) -> Result<()> {
    let entries = catalog::entries();

    if args.json {
        let output = serde_json::json!({
            "version": CATALOG_VERSION,
            "fingerprint": catalog_fingerprint(),
            "count": entries.len(),
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "View Catalog v{} ({} view types)",
            CATALOG_VERSION,
            entries.len()
        );
        println!("Fingerprint: {}", catalog_fingerprint());
        println!("========================");
        println!();

        for entry in &entries {
            println!("{}", entry.view_type);
            match (entry.path, entry.provider, entry.title) {
                (Some(path), Some(provider), Some(title)) => {
                    println!("  Path: {}", path);
                    println!("  Provider: {}", provider);
                    println!("  Title: {}", title);
                }
                _ => println!("  (no view-all screen)"),
            }
            println!();
        }
    }

    Ok(())
}

// src/main.rs
//
// Composition root. The interactive UI lives outside this crate; the binary
// opens the catalog and reports what it holds.

use std::sync::Arc;

use anyhow::Context;
use log::info;

use diario_cultural::logging::init_logger;
use diario_cultural::{
    AppConfig, CatalogRepository, Consumable, DiaryService, JsonCatalogRepository, MediaKind,
};

fn main() -> anyhow::Result<()> {
    // 1. INFRASTRUCTURE
    init_logger();
    let config = AppConfig::from_env();
    info!("Catalog file: {}", config.data_file.display());

    // 2. REPOSITORY
    let repository: Arc<dyn CatalogRepository> =
        Arc::new(JsonCatalogRepository::from_config(&config));

    // 3. SERVICE
    let service = DiaryService::open(repository)
        .with_context(|| format!("Failed to open catalog {}", config.data_file.display()))?;

    // 4. SUMMARY
    for kind in MediaKind::ALL {
        let entries = service.catalog().all(kind);
        let consumed = entries.iter().filter(|m| m.is_consumed()).count();
        let rated = entries.iter().filter(|m| m.is_rated()).count();
        info!(
            "{}: {} total, {} consumed, {} rated",
            kind,
            entries.len(),
            consumed,
            rated
        );
    }

    Ok(())
}

//! Browse a small in-memory catalog from the command line.
//!
//! ```sh
//! RUST_LOG=rigdex_core=debug cargo run --example browse_catalog
//! ```

use rigdex_core::catalog::CatalogKind;
use rigdex_core::query::{CatalogQueryBuilder, SortKey, SortOrder};
use rigdex_core::store::{CatalogEngine, InMemoryStore};
use rigdex_model::{BuildRecord, ListingRecord, Placement};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let containers = vec![
        BuildRecord::new("Starter office build").with_section(
            "laptops",
            vec![
                ListingRecord::new("Aspire 5", 30000.0)
                    .with_attr("brand", "Acer")
                    .with_attr("processor", "Ryzen 5")
                    .with_attr("ram", "8GB")
                    .with_attr("storage", "512GB"),
                ListingRecord::new("XPS 13", 90000.0)
                    .with_attr("brand", "Dell")
                    .with_attr("processor", "Intel i7")
                    .with_attr("ram", "16GB")
                    .with_attr("storage", "1TB"),
            ],
        ),
        BuildRecord::new("Creator build").with_section(
            "laptops",
            vec![ListingRecord::new("ThinkPad T14", 85000.0)
                .with_attr("brand", "Lenovo")
                .with_attr("processor", "Ryzen 7")
                .with_attr("ram", "16GB")
                .with_attr("storage", "1TB")],
        ),
    ];

    let engine = CatalogEngine::new(InMemoryStore::new(containers));
    let query = CatalogQueryBuilder::new()
        .min_magnitude("ram", 16)
        .sort_by(SortKey::Price, SortOrder::Descending)
        .build();

    let page = engine.browse(CatalogKind::Laptops, &query)?;
    println!(
        "{} of {} listings (16GB+ RAM, priciest first):",
        page.items.len(),
        page.total_results
    );
    for listing in &page.items {
        println!(
            "  {:<14} {:>10.0}  {}",
            listing.name,
            listing.price,
            listing.attr_text("brand").unwrap_or_default()
        );
    }
    println!("brands on offer: {:?}", page.filter_options.categorical["brand"]);

    let banners = vec![
        Placement::new("GPU restock", "/img/gpu.png", "https://example.com/gpus", 3)?,
        Placement::new("Monitor sale", "/img/mon.png", "https://example.com/monitors", 1)?,
    ];
    if let Some(banner) = rigdex_core::select_placement(&mut rand::rng(), &banners) {
        println!("banner of the request: {}", banner.title);
    }

    Ok(())
}

//! Lists every cover image of a comic series.
//!
//! Pages through a series' issues in on-sale order and prints one
//! `portrait_incredible` cover URL per issue, skipping issues that only have
//! the "image not available" placeholder.
//!
//! Run with:
//! ```bash
//! MARVEL_PUBLIC_KEY=... MARVEL_PRIVATE_KEY=... SERIES_ID=2258 \
//!     RUST_LOG=marvel=debug cargo run --example series_covers
//! ```

use marvel::{Client, ComicsParams, ImageVariant, PageCursor};
use tracing_subscriber::EnvFilter;

/// Uncanny X-Men (1963).
const DEFAULT_SERIES: u64 = 2258;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::from_env()?;
    let series_id = match std::env::var("SERIES_ID") {
        Ok(raw) => raw.parse::<u64>()?,
        Err(_) => DEFAULT_SERIES,
    };

    let series = client.series().get(series_id).await?;
    if let Some(title) = series.data.results.first().and_then(|s| s.title.as_deref()) {
        println!("{title}");
    }

    let mut cursor = Some(PageCursor::new(100));
    let mut covers = 0;

    while let Some(page) = cursor {
        let mut common = page.params();
        common.order_by = Some("onsaleDate".to_string());

        let response = client
            .series()
            .comics(series_id, &ComicsParams::from(common))
            .await?;

        for comic in &response.data.results {
            let Some(thumbnail) = comic.thumbnail.as_ref() else {
                continue;
            };
            if thumbnail.is_placeholder() {
                continue;
            }
            let issue = comic
                .issue_number
                .map(|n| format!("#{n}"))
                .unwrap_or_else(|| "#?".to_string());
            println!("{issue:>6}  {}", thumbnail.url(ImageVariant::PortraitIncredible));
            covers += 1;
        }

        cursor = page.advance_by_limit(&response.data);
    }

    println!("\n{covers} covers");
    if let Some(attribution) = series.attribution_text.as_deref() {
        println!("{attribution}");
    }
    Ok(())
}

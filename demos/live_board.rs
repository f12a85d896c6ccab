use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spotmap::prelude::*;
use std::{sync::Arc, time::Duration};

/// Runs the live simulator for a few ticks and prints each snapshot,
/// like the departure board a kiosk display would render.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "debug")]
    env_logger::init();

    let catalog = Arc::new(jakarta().clone());
    let config = OccupancyConfig {
        tick_period: Duration::from_secs(1),
        ..OccupancyConfig::default()
    };
    let profile = Arc::new(BaselineProfile::build(
        &catalog,
        &config,
        &mut ChaCha8Rng::seed_from_u64(7),
    ));

    let thresholds = config.thresholds;
    let (handle, mut snapshots) = Simulator::new(catalog.clone(), profile, config).spawn();

    for tick in 0..4 {
        let snap = snapshots.borrow().clone();
        println!("tick {tick} — {}", snap.taken_at().format("%H:%M:%S"));
        for place in catalog.places() {
            let count = snap.count(&place.name).unwrap_or(place.visitor_count);
            let level = classify_with(count, &thresholds);
            println!(
                "   {:<36} {:>7}  [{} {}]",
                place.name,
                count_label(count),
                level.label(),
                level.color()
            );
        }
        if tick < 3 {
            snapshots
                .changed()
                .await
                .context("simulator stopped early")?;
        }
    }

    handle.stop().await;
    println!("simulator stopped cleanly");
    Ok(())
}

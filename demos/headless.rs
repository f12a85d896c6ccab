use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spotmap::prelude::*;

/// Example of using the occupancy model headlessly, without any map view
fn main() -> spotmap::Result<()> {
    println!("Spotmap Headless Example");
    println!("========================");

    let catalog = jakarta();
    let config = OccupancyConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2026);

    let profile = BaselineProfile::build(catalog, &config, &mut rng);
    println!("Built baseline profiles for {} places\n", profile.len());

    for hour in [8u32, 13, 19, 23] {
        println!("Expected busyness at {}:", hour_label(hour));
        for place in catalog.places() {
            let count = profile
                .expected_at(&place.name, hour as usize)
                .unwrap_or(place.visitor_count);
            let level = classify_with(count, &config.thresholds);
            println!(
                "   {:<36} {:>7} visitors  [{}]",
                place.name,
                count_label(count),
                level.label()
            );
        }
        println!();
    }

    let snap = LiveSnapshot::generate(&profile, catalog, chrono::Local::now(), &config, &mut rng);
    println!("Live snapshot as of {}:", snap.taken_at().format("%H:%M"));
    for place in catalog.places() {
        let count = snap.count(&place.name).unwrap_or(place.visitor_count);
        println!(
            "   {:<36} {:>7} right now [{}]",
            place.name,
            count_label(count),
            classify_with(count, &config.thresholds).label()
        );
    }

    Ok(())
}

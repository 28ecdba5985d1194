//! Basic usage example for qthloc-rs
//!
//! This example demonstrates how to:
//! - Decode and encode Maidenhead locators
//! - Measure the distance between two stations
//! - Find the nearest sizeable city to a received station
//! - Run a full station query

use qthloc_rs::prelude::*;
use qthloc_rs::DEFAULT_THRESHOLDS;

fn main() -> Result<()> {
    println!("=== qthloc-rs Basic Usage Example ===\n");

    // Example 1: decoding
    println!("--- Example 1: Decoding locators ---");
    for loc in ["JO", "JO62", "JO62qm", "JO62qm38"] {
        let l = GridLocator::parse(loc)?;
        let at = l.decode();
        println!("{:<9} {:?}  lat {:>9.5}  lon {:>9.5}", l.to_string(), l.precision(), at.lat, at.lon);
    }
    println!();

    // Example 2: encoding
    println!("--- Example 2: Encoding a coordinate ---");
    let gate = GeoCoordinate::new(52.5163, 13.3777);
    for p in Precision::ALL {
        println!("{:?}: {}", p, qthloc_rs::encode(gate, p));
    }
    println!();

    // Example 3: distance
    println!("--- Example 3: Distance ---");
    let berlin = decode("JO62")?;
    let vienna = decode("JN88")?;
    println!(
        "JO62 -> JN88: {:.1} km, heading {:.0}°\n",
        distance_km(berlin, vienna),
        berlin.bearing_to(&vienna)
    );

    // Example 4: nearest city
    println!("--- Example 4: Nearest city ---");
    let db = CityDataset::reference();
    match db.nearest(vienna, 1_000_000) {
        Some(hit) => println!("Near JN88: {} ({:.1} km)\n", hit.city.name(), hit.distance_km),
        None => println!("No city above 1,000,000 inhabitants\n"),
    }

    // Example 5: full query
    println!("--- Example 5: Station query ---");
    let report = query::run("JO62", "IO91wm", DEFAULT_THRESHOLDS, db.records())?;
    println!("{} hears {}: {:.1} km", report.my_locator, report.rx_locator, report.distance_km);
    for (threshold, hit) in &report.nearest {
        match hit {
            Some(hit) => println!("  >= {threshold}: {} ({:.1} km)", hit.city.name(), hit.distance_km),
            None => println!("  >= {threshold}: none"),
        }
    }

    Ok(())
}

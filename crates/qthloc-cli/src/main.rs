//! qthloc: command-line interface for qthloc-core
//!
//! Usage examples
//! --------------
//!
//! - Decode a locator
//!   $ qthloc decode JO62qm
//!
//! - Encode a coordinate (default 6 characters)
//!   $ qthloc encode 52.5163 13.3777
//!
//! - Distance and heading between two stations
//!   $ qthloc distance JO62 JN88
//!
//! - Where is the station I just heard?
//!   $ qthloc --cities worldcities.csv query --my JO62 JN88
//!   $ qthloc --cities worldcities.csv query --my JO62 JN88 -t 50000 --json
//!
//! Data source
//! -----------
//!
//! `--cities <path>` (or `QTHLOC_CITIES`) names a CSV city table; a binary
//! cache is written next to it for fast subsequent runs unless `--no-cache`
//! is given. Without a table a small built-in reference set is used.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use qthloc_core::prelude::*;
use qthloc_core::{encode, NearestCity, DEFAULT_THRESHOLDS};
use std::borrow::Cow;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    qthloc_cli::init_logging(args.verbose);

    // Parse filter if provided
    let filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });
    let filter_slice = filter.as_deref();

    // Commands that need no city data
    match &args.command {
        Commands::Decode { locator } => {
            let loc = GridLocator::parse(locator)?;
            let at = loc.decode();
            let cell = loc.cell();
            println!("Locator: {loc} ({:?})", loc.precision());
            println!("Centre: {:.5}, {:.5}", at.lat, at.lon);
            println!("Cell: {:.5}° x {:.5}° from {:.5}, {:.5}", cell.width, cell.height, cell.south_west.lat, cell.south_west.lon);
            return Ok(());
        }
        Commands::Encode { lat, lon, precision } => {
            let at = GeoCoordinate::new(*lat, *lon);
            anyhow::ensure!(at.is_valid(), "coordinate {lat}, {lon} is out of range");
            let precision = Precision::ALL[usize::from(*precision) - 1];
            println!("{}", encode(at, precision));
            return Ok(());
        }
        Commands::Distance { from, to } => {
            let a = decode(from)?;
            let b = decode(to)?;
            println!("Distance: {:.1} km", distance_km(a, b));
            println!("Bearing: {:.0}°", a.bearing_to(&b));
            return Ok(());
        }
        _ => {}
    }

    // Load cities (with filter if any)
    let db: Cow<'_, CityDataset> = match &args.cities {
        Some(path) => {
            let db = if args.no_cache {
                CityDataset::load_from_path_uncached(path, filter_slice)
            } else {
                CityDataset::load_from_path(path, filter_slice)
            };
            Cow::Owned(db.with_context(|| format!("loading {}", path.display()))?)
        }
        None => {
            warn!("no city table given (--cities / QTHLOC_CITIES); using the built-in reference set");
            match filter_slice {
                Some(f) => Cow::Owned(CityDataset::reference().clone().filter_countries(f)),
                None => Cow::Borrowed(CityDataset::reference()),
            }
        }
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("City table statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
            println!("  Largest population: {}", stats.largest_population);
        }

        Commands::Nearest { locator, min_pop, radius_km } => {
            let at = decode(&locator)?;
            match radius_km {
                Some(r) => {
                    let hits = db.within_radius(at, r, min_pop);
                    if hits.is_empty() {
                        println!("No city with at least {min_pop} inhabitants within {r} km of {locator}");
                    }
                    for hit in hits {
                        print_city(&hit);
                    }
                }
                None => match db.nearest(at, min_pop) {
                    Some(hit) => print_city(&hit),
                    None => println!("No city with at least {min_pop} inhabitants"),
                },
            }
        }

        Commands::Query { my, rx, thresholds, json } => {
            let thresholds = if thresholds.is_empty() { DEFAULT_THRESHOLDS.to_vec() } else { thresholds };
            let report = query::run(&my, &rx, thresholds, db.records())?;

            if json {
                #[cfg(feature = "json")]
                {
                    println!("{}", report.to_json_pretty()?);
                    return Ok(());
                }
                #[cfg(not(feature = "json"))]
                anyhow::bail!("built without the `json` feature");
            }

            println!("{} -> {}", report.my_locator, report.rx_locator);
            println!("Distance: {:.1} km", report.distance_km);
            println!("Bearing: {:.0}°", report.bearing_deg);
            for (threshold, hit) in &report.nearest {
                print!("Nearest city >= {threshold}: ");
                match hit {
                    Some(hit) => print_city(hit),
                    None => println!("none"),
                }
            }
        }

        Commands::Cities { query } => {
            let matches = db.find_cities_by_substring(&query);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for city in matches {
                    println!("{} ({}), {} pop. {}", city.name(), city.admin().unwrap_or("-"), city.country(), city.population());
                }
            }
        }

        Commands::Decode { .. } | Commands::Encode { .. } | Commands::Distance { .. } => {
            unreachable!("handled before loading cities")
        }
    }

    Ok(())
}

fn print_city(hit: &NearestCity<'_, DefaultBackend>) {
    let city = hit.city;
    match city.admin() {
        Some(admin) => print!("{}, {}, {}", city.name(), admin, city.country()),
        None => print!("{}, {}", city.name(), city.country()),
    }
    println!(" ({:.1} km, pop. {})", hit.distance_km, city.population());
}

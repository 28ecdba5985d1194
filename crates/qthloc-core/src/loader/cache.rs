// crates/qthloc-core/src/loader/cache.rs

//! Binary cache of a parsed city file (bincode).

use crate::error::{GeoError, Result};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Bumped whenever the record layout changes; stale caches are rebuilt.
const CACHE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    payload: T,
}

fn options() -> impl Options {
    // 256MB limit against corrupt length prefixes
    bincode::DefaultOptions::new()
        .with_limit(256 * 1024 * 1024)
        .allow_trailing_bytes()
}

pub fn write_cache<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let envelope = Envelope {
        version: CACHE_VERSION,
        payload: value,
    };
    options().serialize_into(&mut writer, &envelope)?;
    writer.flush()?;
    Ok(())
}

pub fn read_cache<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path)?;
    let envelope: Envelope<T> = options().deserialize(&bytes)?;
    if envelope.version != CACHE_VERSION {
        return Err(GeoError::Cache(Box::new(bincode::ErrorKind::Custom(format!(
            "cache version {} != {}",
            envelope.version, CACHE_VERSION
        )))));
    }
    Ok(envelope.payload)
}

// crates/qthloc-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `*.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            GeoError::NotFound(format!("City file not found at {}: {}", path.display(), e))
        }
        _ => GeoError::Io(e),
    })?;

    let reader = BufReader::new(file);
    if is_gzip(path) {
        return open_gzip(reader, path);
    }
    Ok(Box::new(reader))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(feature = "compact")]
fn open_gzip(reader: BufReader<File>, _path: &Path) -> Result<Box<dyn Read>> {
    Ok(Box::new(GzDecoder::new(reader)))
}

#[cfg(not(feature = "compact"))]
fn open_gzip(_reader: BufReader<File>, path: &Path) -> Result<Box<dyn Read>> {
    Err(GeoError::Io(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("{} is gzip-compressed but the 'compact' feature is disabled", path.display()),
    )))
}

/// `cities.csv` -> `cities.csv<suffix>`, next to the source.
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let mut name = source.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// The cache exists and is not older than its source.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("/data/worldcities.csv"), ".qth.bin");
        assert_eq!(p, PathBuf::from("/data/worldcities.csv.qth.bin"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.csv")).err().unwrap();
        assert!(matches!(err, GeoError::NotFound(_)));
    }

    #[test]
    fn gzip_is_detected_by_extension() {
        assert!(is_gzip(Path::new("cities.csv.GZ")));
        assert!(!is_gzip(Path::new("cities.csv")));
    }
}

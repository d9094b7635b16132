// crates/featuredict-core/src/loader/common_io.rs
use crate::error::{FeatureError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

#[cfg(feature = "compact")]
/// Suffix of gzip-compressed variants of the catalog files.
pub const GZIP_SUFFIX: &str = ".gz";

/// Opens a file and buffers it. Files ending in `.gz` are wrapped in a gzip
/// decoder when the `compact` feature is enabled.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read + Send>> {
    let file = File::open(path).map_err(|e| {
        FeatureError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
/// `presets.json` -> `presets.json.gz`
pub fn gzip_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(GZIP_SUFFIX);
    std::path::PathBuf::from(name)
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

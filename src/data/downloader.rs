//! Downloader module for retrieving catalog files
//!
//! This module handles downloading and caching of catalog files, and opening
//! them for reading whether or not they are gzipped.

use std::env;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};

use crate::OrreryError;
use crate::Result;

/// Get the cache directory path
pub fn get_cache_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".cache").join("orrery")
}

/// Check if a file exists and is not empty
fn file_exists_and_not_empty<P: AsRef<Path>>(path: P) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.len() > 0,
        Err(_) => false,
    }
}

/// File name a URL is cached under
fn cache_file_name(url: &str) -> String {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("catalog.csv")
        .to_string()
}

/// Partial-download path next to `path`, e.g. `stars.csv.gz.part`
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Stream the body of `url` into `partial`
fn fetch_into(url: &str, partial: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| OrreryError::Download(format!("Failed to create HTTP client: {}", e)))?;

    let mut response = client
        .get(url)
        .send()
        .map_err(|e| OrreryError::Download(format!("Failed to download {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(OrreryError::Download(format!(
            "Failed to download {}, status: {}",
            url,
            response.status()
        )));
    }

    let mut file = BufWriter::new(File::create(partial)?);
    response
        .copy_to(&mut file)
        .map_err(|e| OrreryError::Download(format!("Failed to read response: {}", e)))?;
    file.flush()?;
    Ok(())
}

/// Download `url` to `path`
///
/// The body is written to a sibling `.part` file that is renamed into place
/// on success and removed on any failure, so `path` is never left partial.
fn download_file<P: AsRef<Path>>(url: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let partial = partial_path(path);
    let result = fetch_into(url, &partial)
        .and_then(|()| fs::rename(&partial, path).map_err(OrreryError::from));
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

/// Download a catalog into `cache_dir`, reusing a cached copy when present
///
/// Returns the path of the local file.
pub fn download_catalog<P: AsRef<Path>>(url: &str, cache_dir: P) -> Result<PathBuf> {
    fs::create_dir_all(cache_dir.as_ref())?;
    let path = cache_dir.as_ref().join(cache_file_name(url));

    if file_exists_and_not_empty(&path) {
        info!("Using cached catalog from {}", path.display());
        return Ok(path);
    }

    info!("Downloading catalog from {}", url);
    match download_file(url, &path) {
        Ok(()) => {
            info!("Catalog downloaded to {}", path.display());
            Ok(path)
        }
        Err(e) => {
            warn!("Failed to download catalog: {}", e);
            Err(e)
        }
    }
}

/// Open a catalog file, decompressing it when the name ends in `.gz`
pub fn open_catalog_reader<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(&path)?;
    let is_gzipped = path
        .as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gzipped {
        let decoder = flate2::read::GzDecoder::new(BufReader::new(file));
        Box::new(BufReader::new(decoder))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

//! Data module for downloading and opening catalog files
//!
//! This module provides functionality for downloading, caching, and reading
//! the star catalogs bodies are built from.

mod downloader;

pub use downloader::{download_catalog, get_cache_dir, open_catalog_reader};

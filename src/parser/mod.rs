//! Component 1 – loading and parsing the three upstream registries.
//!
//! Each parser takes the whole source text and hands back plain data from
//! `model`; none of them touch the schema builder or each other.
pub mod iana;
pub mod iso;
pub mod scripts;

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::model::{IANA_URL, ISO_URL, SCRIPTS_URL, Sources};

/// Where one registry comes from.
#[derive(Debug, Clone)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    fn pick(local: Option<&Path>, url: &str) -> Self {
        match local {
            Some(path) => Source::File(path.to_path_buf()),
            None => Source::Url(url.to_string()),
        }
    }
}

/// Load all three sources in pipeline order. Any failure aborts the run.
pub fn load(args: &Cli) -> Result<Sources> {
    let iso = load_source(&Source::pick(args.iso.as_deref(), ISO_URL))?;
    let iana = load_source(&Source::pick(args.iana.as_deref(), IANA_URL))?;
    let scripts = load_source(&Source::pick(args.scripts.as_deref(), SCRIPTS_URL))?;
    Ok(Sources { iso, iana, scripts })
}

pub fn load_source(source: &Source) -> Result<String> {
    let text = match source {
        Source::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?,
        Source::Url(url) => fetch(url)?,
    };
    info!("Loaded {:?}, {} bytes", source, text.len());
    Ok(text)
}

fn fetch(url: &str) -> Result<String> {
    debug!("GET {url}");
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("Fetching {url}"))?;
    let body = response
        .bytes()
        .with_context(|| format!("Reading response body of {url}"))?;
    let text = String::from_utf8(body.to_vec())
        .with_context(|| format!("{url} did not return UTF-8 text"))?;
    if text.trim().is_empty() {
        bail!("{url} returned an empty body");
    }
    Ok(text)
}

/// Drop a leading UTF-8 byte-order mark.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

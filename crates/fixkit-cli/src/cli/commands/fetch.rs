//! Fetch command: GET a URL and pretty-print the JSON.

use anyhow::{Context, Result};
use fixkit_core::config::FixkitConfig;
use fixkit_core::fetch::{self, FetchOptions};

/// Split a `Name: value` header argument.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .with_context(|| format!("header must be NAME:VALUE, got {:?}", raw))?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("header name is empty in {:?}", raw);
    }
    Ok((name.to_string(), value.trim().to_string()))
}

pub(crate) fn options_with_headers(cfg: &FixkitConfig, headers: &[String]) -> Result<FetchOptions> {
    let mut opts = cfg.fetch_options();
    for raw in headers {
        let (name, value) = parse_header(raw)?;
        opts = opts.with_header(name, value);
    }
    Ok(opts)
}

pub async fn run_fetch(cfg: &FixkitConfig, url: &str, headers: &[String]) -> Result<()> {
    let opts = options_with_headers(cfg, headers)?;
    let value = fetch::fetch_json_async(url, &opts)
        .await
        .with_context(|| format!("fetch {}", url))?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

//! Normalize-user command: read a user record and print its normalized form.

use anyhow::{Context, Result};
use fixkit_core::config::FixkitConfig;
use fixkit_core::{fetch, user};
use std::io::Read;

pub async fn run_normalize_user(cfg: &FixkitConfig, source: &str, is_url: bool) -> Result<()> {
    let value = if is_url {
        fetch::fetch_json_async(source, &cfg.fetch_options())
            .await
            .with_context(|| format!("fetch {}", source))?
    } else {
        let text = read_source(source)?;
        serde_json::from_str(&text).with_context(|| format!("parse JSON from {}", source))?
    };
    let normalized = user::normalize_value(&value)?;
    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("read {}", source))
    }
}

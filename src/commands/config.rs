use crate::config::Config;
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

/// Look up a dotted key such as `timing.poll_interval_ms`.
pub fn lookup(key: &str, config: &Config) -> Result<serde_json::Value> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }
    Ok(current.clone())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config)? {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }
    Ok(())
}

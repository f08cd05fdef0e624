use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Quote style applied when rendering identifiers (`hana` or `mysql`).
    #[config(env = "HANAQL_DIALECT", default = "hana")]
    pub dialect: Dialect,
    /// Row cap appended to table discovery queries.
    #[config(env = "HANAQL_TABLE_LIMIT", default = 1000)]
    pub table_limit: u32,
}

/// Load the environment configuration once, reporting load failures.
pub fn try_config() -> Result<&'static Config> {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = Config::builder()
        .env()
        .load()
        .map_err(|e| Error::Config(e.to_string()))?;
    debug!(
        "Loaded configuration: dialect={}, table_limit={}",
        loaded.dialect, loaded.table_limit
    );
    Ok(CONFIG.get_or_init(|| loaded))
}

pub fn config() -> &'static Config {
    try_config()
        .expect("Failed to load one or more value configuration from the current environment")
}

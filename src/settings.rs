use std::path::PathBuf;

use chrono::NaiveDate;
use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

/// Defaults read from `DIGEST_*` environment variables. CLI flags win.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// `DIGEST_OUTPUT`: write JSON here instead of stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// `DIGEST_DATE`: fixed `generatedAt` (YYYY-MM-DD).
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(Environment::with_prefix("DIGEST"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

//! # Configuration
//!
//! Configuration loaded from the environment. Every variable is prefixed with `PLASMA_`

use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "PLASMA_";

#[derive(Debug, Deserialize, Serialize)]
/// Client config
pub struct Config {
    /// Directory of the leveldb block store; blocks are kept in memory if unset
    database_dir: Option<PathBuf>,
}

impl Config {
    /// Try to create config from env
    pub fn try_from_env() -> anyhow::Result<Self> {
        Self::try_from_iter(std::env::vars())
    }

    /// Try to create config from the provided variables
    pub fn try_from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("could not load config from environment: {}", e))
    }

    /// Get database directory path
    pub fn database_dir(&self) -> Option<&Path> {
        self.database_dir.as_deref()
    }
}

#[cfg(test)]
mod test {

    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn should_load_config_with_database_dir() {
        let config = Config::try_from_iter(vec![
            (String::from("PLASMA_DATABASE_DIR"), String::from("./db")),
            (String::from("DATABASE_DIR"), String::from("./ignored")),
        ])
        .unwrap();
        assert_eq!(config.database_dir(), Some(Path::new("./db")));
    }

    #[test]
    fn should_load_config_without_database_dir() {
        let config = Config::try_from_iter(vec![]).unwrap();
        assert!(config.database_dir().is_none());
    }
}

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: env::var("MAINSTORAGEE_DATA_DIR")
                    .unwrap_or_else(|_| "data".to_string())
                    .into(),
            },
        }
    }
}

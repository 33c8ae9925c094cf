use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_mongo_uri, validate_non_empty_string, validate_positive_number, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "course-catalog")]
#[command(about = "Course catalog HTTP service backed by a document store")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub bind: String,

    #[arg(long, default_value = "mongodb://localhost:27017")]
    pub mongo_uri: String,

    #[arg(long, default_value = "courses")]
    pub database: String,

    #[arg(long, default_value = "courses")]
    pub collection: String,

    #[arg(long, default_value = "5")]
    pub server_selection_timeout_secs: u64,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn mongo_uri(&self) -> &str {
        &self.mongo_uri
    }

    fn database_name(&self) -> &str {
        &self.database
    }

    fn collection_name(&self) -> &str {
        &self.collection
    }

    fn bind_addr(&self) -> String {
        self.bind.clone()
    }

    fn server_selection_timeout_secs(&self) -> u64 {
        self.server_selection_timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_mongo_uri("mongo_uri", &self.mongo_uri)?;
        validate_non_empty_string("database", &self.database)?;
        validate_non_empty_string("collection", &self.collection)?;
        validate_non_empty_string("bind", &self.bind)?;
        validate_positive_number(
            "server_selection_timeout_secs",
            self.server_selection_timeout_secs as usize,
            1,
        )?;
        Ok(())
    }
}

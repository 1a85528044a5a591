use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use pantry_chef_core::{
    domain::common::{LLMConfig, PantryChefConfig, StorageConfig},
    infrastructure::llm::DEFAULT_API_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pantry-chef", version, about = "Recipe suggestions from your pantry")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LLMArgs {
    #[arg(long = "gemini-api-key", env = "API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(
        long = "imagen-model",
        env = "IMAGEN_MODEL",
        default_value = "imagen-4.0-generate-001"
    )]
    pub imagen_model: String,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 120)]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    /// Directory holding the saved recipes file
    #[arg(long = "data-dir", env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for PantryChefConfig {
    fn from(args: Args) -> Self {
        PantryChefConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                imagen_model: args.llm.imagen_model,
                api_base_url: args.llm.api_base_url,
                request_timeout_secs: args.llm.request_timeout_secs,
            },
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_conversion() {
        let args = Args::parse_from(["pantry-chef", "--gemini-api-key", "k"]);
        let config = PantryChefConfig::from(args.clone());

        assert_eq!(args.server.port, 3333);
        assert_eq!(config.llm.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.llm.imagen_model, "imagen-4.0-generate-001");
        assert_eq!(config.storage.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "pantry-chef",
            "--gemini-api-key",
            "k",
            "--server-allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
    }
}

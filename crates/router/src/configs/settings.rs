use config::{Config, ConfigError, Environment, File};
use masking::Secret;
use serde::Deserialize;

/// Directory holding the per-environment configuration files,
/// relative to the workspace root.
const CONFIG_DIR: &str = "config";

fn config_path() -> std::path::PathBuf {
    let local = std::path::Path::new(CONFIG_DIR);
    if local.exists() {
        local.to_path_buf()
    } else {
        // Running from a member crate; fall back to the workspace root.
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(CONFIG_DIR)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: Server,
    #[serde(default)]
    pub proxy: Proxy,
    pub veritrans: Veritrans,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Proxy {
    pub http_url: Option<String>,
    pub https_url: Option<String>,
}

/// Vendor endpoints and merchant credentials. The credentials are
/// optional here so that the service can boot without them; flows that
/// need a missing credential fail with a configuration error instead.
#[derive(Debug, Deserialize, Clone)]
pub struct Veritrans {
    pub token_url: String,
    pub mpi_authorize_url: String,
    pub token_api_key: Option<Secret<String>>,
    pub merchant_ccid: Option<Secret<String>>,
    pub merchant_secret_key: Option<Secret<String>>,
    /// Default server-to-server result notification URL
    pub push_url: Option<String>,
    /// Default redirect target after issuer authentication
    pub redirection_uri: Option<String>,
    /// Mark outbound MPI requests as test-mode requests
    #[serde(default)]
    pub dummy_request: bool,
}

impl Settings {
    /// Load the configuration for the environment selected by the
    /// `RUN_ENV` variable (`Development` when unset), then apply
    /// `ROUTER__`-prefixed environment variable overrides.
    pub fn new() -> Result<Self, ConfigError> {
        let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "Development".to_string());
        let file = config_path().join(format!("{run_env}.toml"));

        Config::builder()
            .add_source(File::from(file))
            .add_source(Environment::with_prefix("ROUTER").separator("__"))
            .build()?
            .try_deserialize()
    }
}

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// CSV or JSON file with sale records; embedded sample when absent
    pub path: Option<String>,
}

/// Presentation knobs for the sales overview dashboard
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardSettings {
    /// Cities shown in the revenue bar chart
    pub top_cities: usize,
    /// Segments shown in the donut chart
    pub top_segments: usize,
    /// City revenue strictly above this is labelled "Alta Prod."
    pub high_revenue_threshold: f64,
    pub currency_symbol: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_cities: 10,
            top_segments: 8,
            high_revenue_threshold: 1000.0,
            currency_symbol: "R$".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[data]

[dashboard]
top_cities = 10
top_segments = 8
high_revenue_threshold = 1000.0
currency_symbol = "R$"
"#;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "SALES_DASHBOARD_CONFIG";

/// Load configuration
///
/// Search order:
/// 1. File named by `SALES_DASHBOARD_CONFIG`
/// 2. config.toml next to the executable
/// 3. Embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        tracing::info!("Loading config from {}: {}", CONFIG_ENV_VAR, explicit);
        return read_config_file(Path::new(&explicit));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return read_config_file(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn read_config_file(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read config {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolve the configured data file path, if any
///
/// Relative paths are resolved next to the executable when the file exists
/// there, otherwise relative to the current directory.
pub fn get_data_path(config: &Config) -> Option<PathBuf> {
    let raw = config.data.path.as_deref()?;
    let path = Path::new(raw);

    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(path);
            if resolved.exists() {
                return Some(resolved);
            }
        }
    }

    Some(PathBuf::from(raw))
}

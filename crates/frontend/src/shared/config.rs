use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShowcaseConfig {
    pub grid: GridConfig,
    pub samples: SamplesConfig,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    pub retry_interval_ms: u32,
}

/// Сколько записей показывает каждый вид
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SamplesConfig {
    pub dataset: usize,
    pub basic: usize,
    pub complex: usize,
    pub editable: usize,
    pub row_management: usize,
    pub draggable: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavigationConfig {
    pub default_view: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[grid]
retry_interval_ms = 100

[samples]
dataset = 100
basic = 50
complex = 10
editable = 15
row_management = 10
draggable = 15

[navigation]
default_view = "basic"
"#;

const CONFIG_STORAGE_KEY: &str = "grid-showcase-config";

impl Default for ShowcaseConfig {
    fn default() -> Self {
        // Встроенный TOML проверяется тестом ниже
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            grid: GridConfig {
                retry_interval_ms: 100,
            },
            samples: SamplesConfig {
                dataset: 100,
                basic: 50,
                complex: 10,
                editable: 15,
                row_management: 10,
                draggable: 15,
            },
            navigation: NavigationConfig {
                default_view: "basic".to_string(),
            },
        })
    }
}

/// Load configuration
///
/// Search order:
/// 1. TOML text in localStorage under `grid-showcase-config`
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<ShowcaseConfig> {
    if let Some(contents) = read_override() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage[{}]", CONFIG_STORAGE_KEY);
                return Ok(config);
            }
            Err(err) => log::warn!("Ignoring malformed config override: {}", err),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<ShowcaseConfig> {
    let config: ShowcaseConfig = toml::from_str(contents)?;
    if config.grid.retry_interval_ms == 0 {
        anyhow::bail!("grid.retry_interval_ms must be positive");
    }
    Ok(config)
}

fn read_override() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.grid.retry_interval_ms, 100);
        assert_eq!(config.samples.dataset, 100);
        assert_eq!(config.samples.basic, 50);
        assert_eq!(config.samples.row_management, 10);
        assert_eq!(config.navigation.default_view, "basic");
        assert_eq!(ShowcaseConfig::default(), config);
    }

    #[test]
    fn test_override_replaces_values() {
        let config = parse_config(
            r#"
            [grid]
            retry_interval_ms = 250

            [samples]
            dataset = 20
            basic = 5
            complex = 5
            editable = 5
            row_management = 3
            draggable = 5

            [navigation]
            default_view = "masterDetail"
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.retry_interval_ms, 250);
        assert_eq!(config.samples.row_management, 3);
        assert_eq!(config.navigation.default_view, "masterDetail");
    }

    #[test]
    fn test_malformed_config_rejected() {
        assert!(parse_config("[grid]\nretry_interval_ms = \"fast\"").is_err());
        assert!(parse_config(&DEFAULT_CONFIG.replace("= 100\n", "= 0\n")).is_err());
    }
}

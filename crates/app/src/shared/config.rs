use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub supabase: SupabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Anonymous API key sent as `apikey` / bearer token.
    pub anon_key: String,
}

pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";
pub const PLACEHOLDER_KEY: &str = "placeholder-key";

/// Default configuration embedded in the binary. The placeholders keep the
/// process alive for local development; requests against them simply fail
/// and surface through the normal error path.
const DEFAULT_CONFIG: &str = r#"
[supabase]
url = "https://placeholder.supabase.co"
anon_key = "placeholder-key"
"#;

impl SupabaseConfig {
    /// True when the offline/local-dev placeholders are still in effect.
    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER_URL || self.anon_key == PLACEHOLDER_KEY
    }
}

/// Load configuration.
///
/// Search order:
/// 1. `config.toml` next to the executable
/// 2. Embedded default (placeholders)
///
/// `SUPABASE_URL` / `SUPABASE_ANON_KEY` environment variables override
/// either source. Missing credentials are logged, never fatal.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_or_default()?;

    if let Ok(url) = std::env::var("SUPABASE_URL") {
        if !url.trim().is_empty() {
            config.supabase.url = url;
        }
    }
    if let Ok(key) = std::env::var("SUPABASE_ANON_KEY") {
        if !key.trim().is_empty() {
            config.supabase.anon_key = key;
        }
    }

    if config.supabase.is_placeholder() {
        tracing::error!(
            "Variáveis de ambiente do Supabase não configuradas; usando placeholders (modo offline)"
        );
    }

    Ok(config)
}

fn load_file_or_default() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.supabase.url, PLACEHOLDER_URL);
        assert_eq!(config.supabase.anon_key, PLACEHOLDER_KEY);
        assert!(config.supabase.is_placeholder());
    }

    #[test]
    fn test_real_config_is_not_placeholder() {
        let config = SupabaseConfig {
            url: "https://real-project.supabase.co".into(),
            anon_key: "real-key".into(),
        };
        assert!(!config.is_placeholder());
    }
}

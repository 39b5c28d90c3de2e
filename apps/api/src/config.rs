use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_API_BASE;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_RENDER_DPI: u32 = 72;
const MAX_RENDER_DPI: u32 = 600;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// Resolution used when rasterizing the first resume page.
    /// 72 keeps the page at its native point size.
    pub render_dpi: u32,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let render_dpi = optional_env("RENDER_DPI")
            .map(|v| v.parse::<u32>())
            .transpose()
            .context("RENDER_DPI must be a positive integer")?
            .unwrap_or(DEFAULT_RENDER_DPI);
        validate_render_dpi(render_dpi)?;

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            render_dpi,
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn validate_render_dpi(dpi: u32) -> Result<()> {
    if dpi == 0 || dpi > MAX_RENDER_DPI {
        bail!("RENDER_DPI must be between 1 and {MAX_RENDER_DPI}, got {dpi}");
    }
    Ok(())
}

#[cfg(test)]
impl Config {
    /// Config for router tests; never reads the environment.
    pub fn for_tests() -> Self {
        Config {
            google_api_key: "test-key".to_string(),
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            render_dpi: DEFAULT_RENDER_DPI,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dpi_bounds() {
        assert!(validate_render_dpi(72).is_ok());
        assert!(validate_render_dpi(MAX_RENDER_DPI).is_ok());
        assert!(validate_render_dpi(0).is_err());
        assert!(validate_render_dpi(MAX_RENDER_DPI + 1).is_err());
    }
}

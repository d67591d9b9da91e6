use anyhow::Result;

/// Application configuration loaded from environment variables.
///
/// The API key is the only credential and is deliberately optional here:
/// when absent the driver asks for it interactively instead of refusing to
/// start. It is held in memory for the session and never written anywhere.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_is_treated_as_absent() {
        // Mirrors the filter in from_env without touching process env.
        let key = Some("   ".to_string()).filter(|k: &String| !k.trim().is_empty());
        assert!(key.is_none());
    }

    #[test]
    fn test_config_is_cloneable_for_session_handoff() {
        let config = Config {
            openai_api_key: Some("sk-test".to_string()),
            rust_log: "info".to_string(),
        };
        let copy = config.clone();
        assert_eq!(copy.openai_api_key.as_deref(), Some("sk-test"));
    }
}

use std::env;
use tracing::warn;

const URL_VARS: &[&str] = &["SUPABASE_URL", "EXPO_PUBLIC_SUPABASE_URL"];
const ANON_KEY_VARS: &[&str] = &[
    "SUPABASE_ANON_KEY",
    "EXPO_PUBLIC_SUPABASE_ANON_KEY",
    "SUPABASE_ANON_PUBLIC_KEY",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Each setting accepts several
    /// variable names; the first non-empty one wins.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = first_set(&lookup, URL_VARS)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| {
                warn!("SUPABASE_URL not set, using empty value");
                String::new()
            });

        let supabase_anon_key = first_set(&lookup, ANON_KEY_VARS).unwrap_or_else(|| {
            warn!("SUPABASE_ANON_KEY not set, using empty value");
            String::new()
        });

        let config = Self {
            supabase_url,
            supabase_anon_key,
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }
}

fn first_set<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

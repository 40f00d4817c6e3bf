use serde::Serialize;
use sha2::{Digest, Sha256};

/// Runtime configuration, sourced entirely from the environment.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub data_dir: String,
    pub records_dir: String,
    /// Row cap per dataset; the canonical first-round sample is bounded.
    pub nrows: usize,
    pub max_bins: usize,
    pub out_dir: String,
    pub docs_dir: String,
    pub port: u16,
    pub pg_gpt4_files: Vec<String>,
    pub pg_gpt3_files: Vec<String>,
    pub bomb_gpt4_files: Vec<String>,
    pub bomb_gpt3_files: Vec<String>,
}

fn env_list(key: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => default.iter().map(|s| s.to_string()).collect(),
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            records_dir: std::env::var("RECORDS_DIR").unwrap_or_else(|_| "records".to_string()),
            nrows: std::env::var("NROWS").ok().and_then(|v| v.parse().ok()).unwrap_or(5000),
            max_bins: std::env::var("MAX_BINS").ok().and_then(|v| v.parse().ok()).unwrap_or(20),
            out_dir: std::env::var("OUT_DIR").unwrap_or_else(|_| "out".to_string()),
            docs_dir: std::env::var("DOCS_DIR").unwrap_or_else(|_| "docs".to_string()),
            port: std::env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(8766),
            pg_gpt4_files: env_list(
                "PG_GPT4_FILES",
                &[
                    "PG_basic_gpt4_2023_05_09-11_15_42_PM.json",
                    "PG_basic_gpt4_loss_2023_05_09-10_44_38_PM.json",
                ],
            ),
            pg_gpt3_files: env_list(
                "PG_GPT3_FILES",
                &[
                    "PG_basic_turbo_2023_05_09-02_49_09_AM.json",
                    "PG_basic_turbo_loss_2023_05_09-03_59_49_AM.json",
                ],
            ),
            bomb_gpt4_files: env_list(
                "BOMB_GPT4_FILES",
                &["bomb_gpt4_2023_05_15-12_13_51_AM.json"],
            ),
            bomb_gpt3_files: env_list(
                "BOMB_GPT3_FILES",
                &["bomb_turbo_2023_05_14-10_45_50_PM.json"],
            ),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// SHA256 over the canonical JSON form, for run provenance.
    pub fn config_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_json().as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_hash_deterministic() {
        let a = Config::from_env();
        let b = Config::from_env();
        assert_eq!(a.config_hash(), b.config_hash());
        assert_eq!(a.config_hash().len(), 64);
    }

    #[test]
    fn config_json_has_core_fields() {
        let cfg = Config::from_env();
        let json = cfg.to_json();
        assert!(json.contains("\"data_dir\""));
        assert!(json.contains("\"nrows\""));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_object());
    }
}

use std::path::PathBuf;

use crate::errors::{NewsError, NewsResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub repo_dir: PathBuf,
    pub db_path: String,
    pub preferred_langs: Vec<String>,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let repo_dir = std::env::var("PKGNEWS_REPO_DIR")
            .map_err(|_| NewsError::MissingEnvVar("PKGNEWS_REPO_DIR".to_string()))?;
        if repo_dir.trim().is_empty() {
            return Err(NewsError::Config("PKGNEWS_REPO_DIR is empty".to_string()));
        }

        // Default db_path is relative to executable directory
        let db_path = std::env::var("PKGNEWS_DB_PATH").unwrap_or_else(|_| {
            exe_dir
                .map(|d| d.join("pkgnews.db").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./pkgnews.db".to_string())
        });

        let preferred_langs = match std::env::var("PKGNEWS_LANG") {
            Ok(langs) => parse_lang_list(&langs),
            Err(_) => std::env::var("LANG")
                .ok()
                .and_then(|locale| lang_from_locale(&locale))
                .into_iter()
                .collect(),
        };

        Ok(Self {
            repo_dir: PathBuf::from(repo_dir),
            db_path,
            preferred_langs,
        })
    }
}

/// Split a comma-separated language list, dropping blanks
pub fn parse_lang_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
        .collect()
}

/// Language part of a POSIX locale: `zh_CN.UTF-8@latin` → `zh_CN`
pub fn lang_from_locale(locale: &str) -> Option<String> {
    let lang = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    match lang {
        "" | "C" | "POSIX" => None,
        lang => Some(lang.to_string()),
    }
}

//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, IconResult};

use super::types::{Config, CONFIG_FILE_NAME};
use super::ConfigWarning;

/// Environment variable overriding `source`
pub const SOURCE_ENV: &str = "ICON_ELEMENTS_SOURCE";
/// Environment variable overriding `output`
pub const OUTPUT_ENV: &str = "ICON_ELEMENTS_OUTPUT";

/// A resolved configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// The file that was read, `None` when running on defaults
    pub file: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> IconResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| IconError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| IconError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run
///
/// 1. `explicit` (must exist), else `icon-elements.toml` in `cwd` when present,
///    else built-in defaults
/// 2. relative paths resolved against the config file's directory
/// 3. environment overrides
/// 4. validation
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> IconResult<LoadedConfig> {
    resolve_with_env(explicit, cwd, |key| std::env::var(key).ok())
}

pub(crate) fn resolve_with_env<F>(explicit: Option<&Path>, cwd: &Path, env: F) -> IconResult<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => Some(cwd.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    };

    let (config, warnings) = match &file {
        Some(path) => {
            let (config, warnings) = load_with_warnings(path)?;
            let base = path.parent().unwrap_or(cwd);
            (config.relative_to(base), warnings)
        }
        None => (Config::default().relative_to(cwd), Vec::new()),
    };

    let config = with_env_overrides_from(config, cwd, env);
    config.validate(file.as_deref().unwrap_or(Path::new(CONFIG_FILE_NAME)))?;

    Ok(LoadedConfig {
        config,
        warnings,
        file,
    })
}

/// Apply environment variable overrides (ICON_ELEMENTS_* prefix)
fn with_env_overrides_from<F>(mut config: Config, cwd: &Path, env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // ICON_ELEMENTS_SOURCE
    if let Some(source) = env(SOURCE_ENV).filter(|v| !v.is_empty()) {
        config.source = cwd.join(source);
    }

    // ICON_ELEMENTS_OUTPUT
    if let Some(output) = env(OUTPUT_ENV).filter(|v| !v.is_empty()) {
        config.output = cwd.join(output);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "output",
        "layout",
        "groups",
        "naming",
        "tag_prefix",
        "class_prefix",
        "class_suffix",
        "extension",
        "transforms",
        "collapse_whitespace",
        "optimizer",
        "style_minifier",
        "markup_minifier",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

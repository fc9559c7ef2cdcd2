use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::detect::DEFAULT_SCAN_LIMIT;
use crate::normalize::NormalizePolicy;
use crate::sift::SiftOptions;
use crate::writer::OutputFormat;

/// Column names accepted out of the box (jewellery and diamond stock sheets).
/// `colsift allow seed` copies them into the allow-list store.
pub const DEFAULT_SEED_COLUMNS: &[&str] = &[
    "PRODUCTION", "GOLD", "COLOUR STONE", "BLACK BEADS", "DIAMOND",
    "NO", "PRODUCT ID", "PRODUCT", "STYLE", "QTY", "G Qly", "Gr. WT", "Nt. WT",
    "ITEMCODE", "STONE PCS", "STONE WT", "STONE RATE", "STONE AMT",
    "BEADS PCS", "BEADS WT", "BEADS RATE", "BEADS AMT",
    "DIA PCS", "DIA WT", "SR NO", "LAB", "REPORT", "LOT NUMBER", "GIVEN TO",
    "SHAPE", "WT.", "COL", "CLA", "CUT", "POL", "SYM", "FLO",
    "STK", "SIZE", "MM", "CRTS.", "PCS.", "COLOR", "CLARITY",
    "CODE", "JOB NO", "ITEM", "DESIGN NO.", "METAL AND CLR.", "GROSS WT.",
    "NET WT.", "METAL AMT.", "DIAMOND PCS", "STUDDING TYPE",
    "STUDDING WT", "QUALITY", "DIAMOND TYPE",
    "SIZE (mm)", "PIECES", "CARAT", "TYPE",
    "PARTICULAR", "CTS",
];

fn default_seed_columns() -> Vec<String> {
    DEFAULT_SEED_COLUMNS.iter().map(|s| s.to_string()).collect()
}

/// Global configuration loaded from `~/.config/colsift/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColsiftConfig {
    /// Number of leading rows scored when looking for the header row.
    pub header_scan_limit: usize,
    /// Label normalization policy: "lenient" or "strict".
    pub normalization: NormalizePolicy,
    /// Names loaded by `colsift allow seed`.
    #[serde(default = "default_seed_columns")]
    pub seed_columns: Vec<String>,
    /// Output format when `--format` is not given (None = xlsx).
    #[serde(default)]
    pub output_format: Option<OutputFormat>,
    /// Worksheet to read from workbooks (None = first sheet).
    #[serde(default)]
    pub sheet_index: Option<usize>,
}

impl Default for ColsiftConfig {
    fn default() -> Self {
        Self {
            header_scan_limit: DEFAULT_SCAN_LIMIT,
            normalization: NormalizePolicy::Lenient,
            seed_columns: default_seed_columns(),
            output_format: None,
            sheet_index: None,
        }
    }
}

impl ColsiftConfig {
    pub fn sift_options(&self) -> SiftOptions {
        SiftOptions {
            scan_limit: self.header_scan_limit,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("colsift")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ColsiftConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ColsiftConfig> {
    if !path.exists() {
        let default_cfg = ColsiftConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ColsiftConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ColsiftConfig::default();
        assert_eq!(cfg.header_scan_limit, 300);
        assert_eq!(cfg.normalization, NormalizePolicy::Lenient);
        assert_eq!(cfg.seed_columns.len(), DEFAULT_SEED_COLUMNS.len());
        assert!(cfg.output_format.is_none());
        assert_eq!(cfg.sift_options().scan_limit, 300);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ColsiftConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ColsiftConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.header_scan_limit, cfg.header_scan_limit);
        assert_eq!(parsed.normalization, cfg.normalization);
        assert_eq!(parsed.seed_columns, cfg.seed_columns);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            header_scan_limit = 50
            normalization = "strict"
            output_format = "csv"
            sheet_index = 2
            seed_columns = ["Qty", "Lab"]
        "#;
        let cfg: ColsiftConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.header_scan_limit, 50);
        assert_eq!(cfg.normalization, NormalizePolicy::Strict);
        assert_eq!(cfg.output_format, Some(OutputFormat::Csv));
        assert_eq!(cfg.sheet_index, Some(2));
        assert_eq!(cfg.seed_columns, vec!["Qty".to_string(), "Lab".to_string()]);
    }

    #[test]
    fn missing_seed_columns_fall_back_to_builtin_list() {
        let toml = r#"
            header_scan_limit = 300
            normalization = "lenient"
        "#;
        let cfg: ColsiftConfig = toml::from_str(toml).unwrap();
        assert!(cfg.seed_columns.iter().any(|c| c == "Gr. WT"));
        assert!(cfg.sheet_index.is_none());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let toml = r#"
            header_scan_limit = 300
            normalization = "fuzzy"
        "#;
        assert!(toml::from_str::<ColsiftConfig>(toml).is_err());
    }

    #[test]
    fn load_or_init_at_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.header_scan_limit, 300);

        fs::write(&path, "header_scan_limit = 10\nnormalization = \"strict\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.header_scan_limit, 10);
        assert_eq!(loaded.normalization, NormalizePolicy::Strict);
    }
}

use crate::detector::AnalyzerParams;
use crate::types::GridShape;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
    pub overlay_out: Option<PathBuf>,
}

/// Run description for the demo tool.
///
/// ```json
/// {
///   "input_path": "shots/board.png",
///   "grid": { "rows": 4, "cols": 3 },
///   "output": { "json_out": "out/report.json" },
///   "params": { "matching": { "mse_threshold": 1200.0 } }
/// }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    pub grid: GridShape,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: AnalyzerParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<RuntimeConfig, String> {
    let config: RuntimeConfig = serde_json::from_str(contents).map_err(|e| e.to_string())?;
    config.grid.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

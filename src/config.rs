//! Runtime configuration for the demo binary: JSON config file plus a
//! small hand-rolled CLI parser.

use crate::detector::DetectorParams;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Write the full detection report as pretty JSON to this path.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub detector: DetectorParams,
}

/// Load a `RuntimeConfig` from a JSON file.
pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <image> [--json <report.json>] [--threshold <0-255>]\n       {program} --config <config.json>"
    )
}

/// Parse the demo's command line into a `RuntimeConfig`.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    let mut args = env::args().skip(1);
    let mut input_path: Option<PathBuf> = None;
    let mut json_out: Option<PathBuf> = None;
    let mut detector = DetectorParams::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| format!("--config requires a path\n{}", usage(program)))?;
                return load_config(Path::new(&path));
            }
            "--json" => {
                let path = args
                    .next()
                    .ok_or_else(|| format!("--json requires a path\n{}", usage(program)))?;
                json_out = Some(PathBuf::from(path));
            }
            "--threshold" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("--threshold requires a value\n{}", usage(program)))?;
                detector.luma_threshold = value
                    .parse()
                    .map_err(|e| format!("invalid --threshold {value}: {e}"))?;
            }
            "--help" | "-h" => return Err(usage(program)),
            other if input_path.is_none() && !other.starts_with('-') => {
                input_path = Some(PathBuf::from(other));
            }
            other => return Err(format!("unexpected argument {other}\n{}", usage(program))),
        }
    }

    let input_path = input_path.ok_or_else(|| usage(program))?;
    Ok(RuntimeConfig {
        input_path,
        output: OutputConfig { json_out },
        detector,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_json_applies_partial_detector_overrides() {
        let json = r#"{
            "inputPath": "shapes.png",
            "output": { "jsonOut": "report.json" },
            "detector": { "lumaThreshold": 96 }
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.input_path, PathBuf::from("shapes.png"));
        assert_eq!(config.output.json_out, Some(PathBuf::from("report.json")));
        assert_eq!(config.detector.luma_threshold, 96);
        assert_eq!(config.detector.min_component_px, 50);
    }
}

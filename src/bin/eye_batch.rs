use eye_centers::image::io::{load_image, save_grayscale_u8, save_marked_image, write_json_file};
use eye_centers::{EyeCenterLocator, EyeCenterParams, Point};
use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BatchToolConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub heatmap_dir: Option<PathBuf>,
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: usize,
    #[serde(default)]
    pub params: EyeCenterParams,
}

fn default_marker_radius() -> usize {
    2
}

pub fn load_config(path: &Path) -> Result<BatchToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    config
        .params
        .validate()
        .map_err(|e| format!("Invalid params in {config_path}: {e}"))?;

    let inputs = list_inputs(&config.input_dir)?;
    let locator = EyeCenterLocator::new(config.params);
    let mut summary = BatchSummary {
        params: config.params,
        results: Vec::with_capacity(inputs.len()),
    };

    for path in &inputs {
        let file_name = path
            .file_name()
            .ok_or_else(|| format!("No file name in {}", path.display()))?;
        let img = load_image(path)?;
        let report = locator
            .locate_with_report(&img)
            .map_err(|e| format!("Failed to locate eye center in {}: {e}", path.display()))?;

        let out_path = config.output_dir.join(file_name);
        save_marked_image(&img, report.center, config.marker_radius, &out_path)?;
        let heatmap_path = match &config.heatmap_dir {
            Some(dir) => {
                let p = dir.join(Path::new(file_name).with_extension("png"));
                save_grayscale_u8(&report.heatmap(), &p)?;
                Some(p)
            }
            None => None,
        };

        info!(
            "{} -> ({}, {}) in {:.1} ms{}",
            path.display(),
            report.center.x,
            report.center.y,
            report.timings.total_ms,
            if report.low_confidence {
                " [low confidence]"
            } else {
                ""
            }
        );
        summary.results.push(BatchEntry {
            input: path.clone(),
            output: out_path,
            heatmap: heatmap_path,
            center: report.center,
            grid_center: report.grid_center,
            low_confidence: report.low_confidence,
            elapsed_ms: report.timings.total_ms,
        });
    }

    if let Some(path) = &config.summary_json {
        write_json_file(path, &summary)?;
        println!("Saved summary to {}", path.display());
    }
    println!(
        "Processed {} images into {}",
        summary.results.len(),
        config.output_dir.display()
    );
    Ok(())
}

fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn usage() -> String {
    "Usage: eye_batch <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchSummary {
    params: EyeCenterParams,
    results: Vec<BatchEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchEntry {
    input: PathBuf,
    output: PathBuf,
    heatmap: Option<PathBuf>,
    center: Point,
    grid_center: Point,
    low_confidence: bool,
    elapsed_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("eye_batch_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let dir = scratch_dir("config");
        let path = dir.join("config.json");
        fs::write(&path, r#"{ "input_dir": "in", "output_dir": "out" }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.marker_radius, 2);
        assert_eq!(config.params, EyeCenterParams::default());
        assert!(config.heatmap_dir.is_none());
        assert!(config.summary_json.is_none());

        assert!(load_config(&dir.join("missing.json")).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn inputs_are_sorted_and_skip_directories() {
        let dir = scratch_dir("inputs");
        for name in ["c.png", "a.jpg", "b.png"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        fs::create_dir(dir.join("nested")).unwrap();

        let names: Vec<_> = list_inputs(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.jpg", "b.png", "c.png"]);
        fs::remove_dir_all(&dir).unwrap();
    }
}

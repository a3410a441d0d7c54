// File: crates/xyplot-cli/src/config.rs
// Summary: Request file format for the CLI (chart request + output path + CSV sources) and CSV loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;
use xyplot_core::{ChartRequest, SeriesSpec};

/// One CSV file feeding the x/y values of a named series.
#[derive(Clone, Debug, Deserialize)]
pub struct CsvSource {
    pub series: String,
    pub path: PathBuf,
    #[serde(default = "default_x_column")]
    pub x_column: String,
    #[serde(default = "default_y_column")]
    pub y_column: String,
}

fn default_x_column() -> String {
    "x".to_string()
}

fn default_y_column() -> String {
    "y".to_string()
}

/// JSON request file: chart request fields at the top level, plus `output` and `sources`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RequestFile {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub sources: Vec<CsvSource>,
    #[serde(flatten)]
    pub request: ChartRequest,
}

impl RequestFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file: RequestFile =
            serde_json::from_str(&text).with_context(|| format!("parsing request {}", path.display()))?;
        Ok(file)
    }

    /// Load every CSV source into the request. Relative CSV paths resolve against `base`.
    pub fn load_sources(&mut self, base: &Path) -> Result<()> {
        for src in &self.sources {
            let path = if src.path.is_relative() { base.join(&src.path) } else { src.path.clone() };
            let (x, y) = load_xy_csv(&path, &src.x_column, &src.y_column)
                .with_context(|| format!("failed to load CSV '{}' for series '{}'", path.display(), src.series))?;
            debug!("loaded {} points for '{}' from {}", x.len(), src.series, path.display());
            match self.request.series.iter_mut().find(|s| s.name == src.series) {
                Some(spec) => {
                    spec.x = x;
                    spec.y = y;
                }
                None => self.request.series.push(SeriesSpec::new(src.series.clone(), x, y)),
            }
        }
        Ok(())
    }
}

/// Output path: the command-line argument wins over the request file's `output`.
pub fn output_path(arg: Option<PathBuf>, file: &RequestFile) -> Result<PathBuf> {
    arg.or_else(|| file.output.clone())
        .context("no output path: pass one as the second argument or set \"output\" in the request")
}

/// Read two numeric columns (matched case-insensitively by header) from a CSV file.
/// Rows where either cell fails to parse are skipped.
pub fn load_xy_csv(path: &Path, x_column: &str, y_column: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!("headers: {:?}", headers);

    let idx = |name: &str| headers.iter().position(|h| *h == name.to_lowercase());
    let i_x = idx(x_column).with_context(|| format!("no column '{}' in {:?}", x_column, headers))?;
    let i_y = idx(y_column).with_context(|| format!("no column '{}' in {:?}", y_column, headers))?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => {
                xs.push(x);
                ys.push(y);
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("{}: skipped {} rows without numeric '{}'/'{}'", path.display(), skipped, x_column, y_column);
    }
    Ok((xs, ys))
}

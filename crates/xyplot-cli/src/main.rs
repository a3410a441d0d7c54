// File: crates/xyplot-cli/src/main.rs
// Summary: CLI that renders a JSON chart request (optionally fed by CSV files) to an image.

mod config;

use anyhow::{Context, Result};
use config::RequestFile;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args().skip(1);
    let Some(request_path) = args.next().map(PathBuf::from) else {
        anyhow::bail!("usage: xyplot <request.json> [output.png|.jpg|.webp|.svg]");
    };
    let output_arg = args.next().map(PathBuf::from);

    let mut file = RequestFile::load(&request_path)?;
    let base = request_path.parent().unwrap_or_else(|| Path::new("."));
    file.load_sources(base)?;

    let output = config::output_path(output_arg, &file)?;

    xyplot_core::plot_xy(&file.request, &output)
        .with_context(|| format!("failed to plot '{}'", request_path.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

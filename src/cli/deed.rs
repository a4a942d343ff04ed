use crate::core::config::AppConfig;
use crate::core::deed::{DeedFormat, deed_file_name, render_deed};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders the configured trust record and writes it to `output`, or to the
/// configured output directory under the trust's name.
pub fn write_deed(
    config: &AppConfig,
    format: DeedFormat,
    output: Option<&Path>,
    generated_on: NaiveDate,
) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => config
            .output_dir()?
            .join(deed_file_name(&config.trust, format)),
    };

    let document = render_deed(&config.trust, generated_on, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(&path, document)
        .with_context(|| format!("Failed to write trust deed to {}", path.display()))?;

    info!("Wrote trust deed to {}", path.display());
    Ok(path)
}

pub fn run(config: &AppConfig, format: DeedFormat, output: Option<&Path>) -> Result<()> {
    let path = write_deed(config, format, output, Local::now().date_naive())?;
    println!("Trust deed saved to {}", path.display());
    Ok(())
}

use std::path::{Path, PathBuf};

use labrep_report::{LayoutMode, ReportOptions};

/// Environment variable overriding the layout mode for one run.
pub const LAYOUT_ENV: &str = "LABREP_LAYOUT";

const OPTIONS_FILE: &str = "options.json";

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.labrep.preview"))
}

fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(OPTIONS_FILE))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<ReportOptions> {
    load_config_from(&config_path()?)
}

/// Read and migrate an options file.
pub fn load_config_from(path: &Path) -> eyre::Result<ReportOptions> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read options at {}: {e}", path.display()))?;
    let options = ReportOptions::from_json(&contents)
        .map_err(|e| eyre::eyre!("failed to parse options at {}: {e}", path.display()))?;
    Ok(options)
}

/// Options for this run: the explicit file if given, else the saved
/// options, else defaults. [`LAYOUT_ENV`] overrides the layout mode.
pub fn resolve_options(explicit: Option<&Path>) -> eyre::Result<ReportOptions> {
    let mut options = match explicit {
        Some(path) => load_config_from(path)?,
        None if has_config() => load_config()?,
        None => {
            tracing::debug!("no saved options, using defaults");
            ReportOptions::default()
        }
    };

    if let Ok(raw) = std::env::var(LAYOUT_ENV) {
        match LayoutMode::parse(&raw) {
            Some(layout) => options.layout_mode = layout,
            None => tracing::warn!(value = %raw, "ignoring unknown {LAYOUT_ENV}"),
        }
    }

    Ok(options)
}

pub fn save_config(options: &ReportOptions) -> eyre::Result<PathBuf> {
    save_config_in(&config_dir()?, options)
}

/// Write options into `dir`, stamped with the current version.
pub fn save_config_in(dir: &Path, options: &ReportOptions) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(OPTIONS_FILE);
    let json = options.to_json_pretty()?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("options.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "options saved");
    Ok(path)
}

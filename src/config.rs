use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::raster::{RasterOptions, UnsetFill};

/// Zoom panel radius used when nothing else is configured.
pub const DEFAULT_LOOKAROUND: usize = 5;
/// Largest zoom panel radius.
pub const MAX_LOOKAROUND: usize = 32;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub perf: bool,
    pub debug_log: Option<PathBuf>,
    pub scale: Option<u32>,
    pub unset: Option<UnsetFill>,
    pub lookaround: Option<usize>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            perf: self.perf || other.perf,
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
            scale: other.scale.or(self.scale),
            unset: other.unset.or(self.unset),
            lookaround: other.lookaround.or(self.lookaround),
        }
    }

    pub fn raster_options(&self) -> RasterOptions {
        RasterOptions::new(self.scale.unwrap_or(1), self.unset.unwrap_or_default())
    }

    pub fn lookaround(&self) -> usize {
        self.lookaround
            .unwrap_or(DEFAULT_LOOKAROUND)
            .min(MAX_LOOKAROUND)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("pixelfield").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("pixelfield")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("pixelfield").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("pixelfield")
                .join("config");
        }
    }

    PathBuf::from(".pixelfieldrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".pixelfieldrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# pixelfield defaults (saved with --save)".to_string());
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(scale) = flags.scale {
        lines.push(format!("--scale {scale}"));
    }
    if let Some(unset) = flags.unset {
        let unset_str = match unset {
            UnsetFill::Gray => "gray",
            UnsetFill::Transparent => "transparent",
        };
        lines.push(format!("--unset {unset_str}"));
    }
    if let Some(lookaround) = flags.lookaround {
        lines.push(format!("--lookaround {lookaround}"));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of raw argument tokens.
///
/// Unknown tokens and malformed values are skipped; clap reports those for
/// the command line itself.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token.as_str(), None),
        };
        let takes_value = matches!(
            name,
            "--debug-log" | "--scale" | "--unset" | "--lookaround"
        );
        let value = if takes_value && inline_value.is_none() {
            i += 1;
            tokens.get(i).map(String::as_str)
        } else {
            inline_value
        };
        match (name, value) {
            ("--perf", None) => flags.perf = true,
            ("--debug-log", Some(v)) => flags.debug_log = Some(PathBuf::from(v)),
            ("--scale", Some(v)) => flags.scale = v.parse().ok().or(flags.scale),
            ("--unset", Some(v)) => flags.unset = parse_unset(v).or(flags.unset),
            ("--lookaround", Some(v)) => {
                flags.lookaround = v.parse().ok().or(flags.lookaround);
            }
            _ => {}
        }
        i += 1;
    }
    flags
}

fn parse_unset(s: &str) -> Option<UnsetFill> {
    match s {
        "gray" | "grey" => Some(UnsetFill::Gray),
        "transparent" => Some(UnsetFill::Transparent),
        _ => None,
    }
}

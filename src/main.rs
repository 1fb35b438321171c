//! Pixelfield - A terminal editor for tri-state pixel grids.
//!
//! # Usage
//!
//! ```bash
//! pixelfield create -W 32 -H 16 sprite.json
//! pixelfield open sprite.json
//! pixelfield --scale 8 to-png sprite.json sprite.png
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pixelfield::app::App;
use pixelfield::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use pixelfield::grid::PixelGrid;
use pixelfield::raster::UnsetFill;
use pixelfield::{codec, perf, raster};

/// A terminal editor for tri-state pixel grids
#[derive(Parser, Debug)]
#[command(name = "pixelfield", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Pixels per cell edge in exported PNGs
    #[arg(long, global = true, value_name = "N")]
    scale: Option<u32>,

    /// How unset cells appear in exported PNGs
    #[arg(long, global = true, value_enum)]
    unset: Option<UnsetFill>,

    /// Cells shown on each side of the cursor in the zoom panel
    #[arg(long, global = true, value_name = "N")]
    lookaround: Option<usize>,

    /// Enable performance logging
    #[arg(long, global = true)]
    perf: bool,

    /// Write key and frame events to a file
    #[arg(long, global = true, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long, global = true)]
    save: bool,

    /// Clear saved defaults
    #[arg(long, global = true)]
    clear: bool,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Write a blank grid to FILE and edit it
    Create {
        /// Grid width in cells
        #[arg(short = 'W', long)]
        width: usize,

        /// Grid height in cells
        #[arg(short = 'H', long)]
        height: usize,

        /// Field file to create
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Edit an existing field file
    Open {
        /// Field file to edit
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Convert a field file to PNG without opening the editor
    ToPng {
        /// Field file to read
        #[arg(value_name = "FIELD_FILE")]
        field_file: PathBuf,

        /// PNG file to write
        #[arg(value_name = "PNG_FILE")]
        png_file: PathBuf,
    },
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            perf: self.perf,
            debug_log: self.debug_log.clone(),
            scale: self.scale,
            unset: self.unset,
            lookaround: self.lookaround,
        }
    }
}

fn effective_flags(cli: &Cli) -> Result<ConfigFlags> {
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    Ok(file_flags.union(&cli_flags))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let effective = effective_flags(&cli)?;

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("PIXELFIELD_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize debug log {}: {}",
            debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    let raster_options = effective.raster_options();

    match cli.mode {
        Mode::Create {
            width,
            height,
            file,
        } => {
            if file.exists() {
                anyhow::bail!("Refusing to overwrite existing file: {}", file.display());
            }
            let grid = PixelGrid::new(width, height).context("Invalid grid size")?;
            codec::save(&file, &grid)
                .with_context(|| format!("Failed to create {}", file.display()))?;
            tracing::info!(path = %file.display(), width, height, "created field");
            App::new(file)
                .with_raster(raster_options)
                .with_lookaround(effective.lookaround())
                .run()
                .context("Application error")
        }
        Mode::Open { file } => {
            if !file.exists() {
                anyhow::bail!("File not found: {}", file.display());
            }
            App::new(file)
                .with_raster(raster_options)
                .with_lookaround(effective.lookaround())
                .run()
                .context("Application error")
        }
        Mode::ToPng {
            field_file,
            png_file,
        } => {
            let _scope = perf::scope("cli.to_png");
            let grid = codec::load(&field_file)
                .with_context(|| format!("Failed to read {}", field_file.display()))?;
            raster::export_png(&png_file, &grid, raster_options)
                .with_context(|| format!("Failed to write {}", png_file.display()))?;
            tracing::info!(
                from = %field_file.display(),
                to = %png_file.display(),
                "exported png"
            );
            Ok(())
        }
    }
}

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config, load_config_file},
    dedup::BlockMarkers,
    paths::resolve_targets,
};

/// Everything a command needs before touching the target files.
pub struct RunContext {
    pub config: Config,
    pub markers: BlockMarkers,
    pub files: Vec<PathBuf>,
}

impl RunContext {
    /// Load configuration, apply CLI overrides (CLI > config file > defaults)
    /// and resolve the target files.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => load_config_file(path)?,
            None => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                let result = load_config(&cwd)?;
                if args.verbose {
                    match &result.source {
                        Some(path) => eprintln!("Note: Using config {}", path.display()),
                        None => eprintln!(
                            "Note: No {} found, using default configuration",
                            CONFIG_FILE_NAME
                        ),
                    }
                }
                result.config
            }
        };

        if let Some(ref header_prefix) = args.header_prefix {
            config.header_prefix = header_prefix.clone();
        }
        if let Some(ref header_suffix) = args.header_suffix {
            config.header_suffix = header_suffix.clone();
        }
        if let Some(ref comment_prefix) = args.comment_prefix {
            config.comment_prefix = comment_prefix.clone();
        }
        config.validate()?;

        let files = resolve_targets(&args.paths)?;
        let markers = config.markers();

        Ok(Self {
            config,
            markers,
            files,
        })
    }
}

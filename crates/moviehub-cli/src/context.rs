use std::path::PathBuf;

use anyhow::Result;
use moviehub_app::{Workspace, resolve_data_path};

use crate::args::{Cli, OutputFormat};

/// Resolved invocation context shared by every handler.
pub struct ExecutionContext {
    pub data_dir: PathBuf,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = resolve_data_path(cli.data_dir.as_deref())?;
        Ok(Self {
            data_dir,
            format: cli.format,
        })
    }

    pub fn workspace(&self) -> Result<Workspace> {
        Ok(Workspace::open(&self.data_dir)?)
    }
}

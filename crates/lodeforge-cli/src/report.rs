use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lodeforge_compile::LoadReport;
use serde::Serialize;

use crate::CliError;

/// Metadata captured when a check starts.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub world_gen_dir: PathBuf,
    pub replace_vanilla: bool,
}

impl RunContext {
    pub fn start(world_gen_dir: &Path, replace_vanilla: bool) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            world_gen_dir: world_gen_dir.to_path_buf(),
            replace_vanilla,
        }
    }
}

/// JSON document written by `check --report`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub run_id: &'a str,
    pub started_at: String,
    pub world_gen_dir: &'a Path,
    pub replace_vanilla: bool,
    pub duration_ms: u128,
    pub load: &'a LoadReport,
}

impl<'a> RunReport<'a> {
    pub fn new(ctx: &'a RunContext, load: &'a LoadReport, duration_ms: u128) -> Self {
        Self {
            run_id: &ctx.run_id,
            started_at: ctx.started_at.to_rfc3339(),
            world_gen_dir: &ctx.world_gen_dir,
            replace_vanilla: ctx.replace_vanilla,
            duration_ms,
            load,
        }
    }
}

pub fn write_report(path: &Path, report: &RunReport<'_>) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

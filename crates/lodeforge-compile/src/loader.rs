use std::collections::VecDeque;
use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

use lodeforge_core::{CompileError, MaterialLookup};
use lodeforge_rules::CompileContext;
use serde_json::{Map, Value};

use crate::compiler::compile_rule_detailed;
use crate::errors::LoadError;
use crate::model::{FileReport, LoadReport};
use crate::registry::FeatureSink;

/// File name of the rule set that replaces built-in generation.
pub const VANILLA_FILE: &str = "Vanilla.json";

/// Where rule files live and which of them to read.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    pub world_gen_dir: PathBuf,
    /// Top-level file skipped unless `replace_vanilla` is set.
    pub vanilla_file: String,
    pub replace_vanilla: bool,
}

impl LoaderOptions {
    pub fn new(world_gen_dir: impl Into<PathBuf>) -> Self {
        Self {
            world_gen_dir: world_gen_dir.into(),
            vanilla_file: VANILLA_FILE.to_string(),
            replace_vanilla: false,
        }
    }
}

/// Enumerate rule files under the world generation directory.
///
/// Top-level entries come first, then the contents of each subdirectory in the
/// order the subdirectories were met. Entries of one directory are sorted by
/// name. The vanilla file is only considered at the top level.
pub fn collect_rule_files(options: &LoaderOptions) -> Vec<PathBuf> {
    let Some(top_level) = sorted_entries(&options.world_gen_dir) else {
        tracing::error!(
            event = "rule_dir_unreadable",
            path = %options.world_gen_dir.display(),
            "no world generation files present"
        );
        return Vec::new();
    };

    let mut pending: VecDeque<(PathBuf, FileType)> = top_level
        .into_iter()
        .filter(|(path, _)| {
            options.replace_vanilla
                || path.file_name().and_then(|name| name.to_str())
                    != Some(options.vanilla_file.as_str())
        })
        .collect();

    let mut files = Vec::new();
    while let Some((path, file_type)) = pending.pop_front() {
        if file_type.is_dir() {
            match sorted_entries(&path) {
                Some(children) => pending.extend(children),
                None => tracing::warn!(
                    event = "rule_dir_unreadable",
                    path = %path.display(),
                    "skipping unreadable directory"
                ),
            }
        } else if file_type.is_symlink() && path.is_dir() {
            tracing::warn!(
                event = "rule_dir_symlink_skipped",
                path = %path.display(),
                "not following directory symlink"
            );
        } else {
            files.push(path);
        }
    }
    files
}

/// Entries of `dir` sorted by path. File types come from the directory entry
/// and do not follow symlinks.
fn sorted_entries(dir: &Path) -> Option<Vec<(PathBuf, FileType)>> {
    let entries = fs::read_dir(dir).ok()?;
    let mut paths: Vec<(PathBuf, FileType)> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let file_type = entry.file_type().ok()?;
            Some((entry.path(), file_type))
        })
        .collect();
    paths.sort_by(|(left, _), (right, _)| left.cmp(right));
    Some(paths)
}

/// Compile and register every rule file under the configured directory.
pub fn load_directory<L, S>(
    ctx: &CompileContext<L>,
    options: &LoaderOptions,
    sink: &mut S,
) -> LoadReport
where
    L: MaterialLookup,
    S: FeatureSink + ?Sized,
{
    let mut report = LoadReport::new();
    for path in collect_rule_files(options) {
        report.push(load_rule_file(ctx, &path, sink));
    }
    tracing::info!(
        event = "load_finished",
        files = report.files.len(),
        registered = report.registered_total,
        failed = report.failed_total,
    );
    report
}

/// Read one rule file and compile every rule in it.
///
/// Read or parse failures skip the file and are recorded in the report.
pub fn load_rule_file<L, S>(ctx: &CompileContext<L>, path: &Path, sink: &mut S) -> FileReport
where
    L: MaterialLookup,
    S: FeatureSink + ?Sized,
{
    let document = match read_document(path) {
        Ok(document) => document,
        Err(err) => {
            tracing::error!(
                event = "rule_file_failed",
                path = %path.display(),
                error = %err,
                "critical error reading a world generation file"
            );
            return FileReport::failed(path, &err);
        }
    };

    tracing::info!(event = "rule_file_read", path = %path.display());
    load_rule_document(ctx, path, &document, sink)
}

/// Compile and register the rules of an already parsed document, in document
/// order.
pub fn load_rule_document<L, S>(
    ctx: &CompileContext<L>,
    source: impl Into<PathBuf>,
    document: &Map<String, Value>,
    sink: &mut S,
) -> FileReport
where
    L: MaterialLookup,
    S: FeatureSink + ?Sized,
{
    let mut report = FileReport::new(source);

    for (name, body) in document {
        match compile_rule_detailed(ctx, name, body) {
            Ok(compiled) => {
                report.warnings.extend(compiled.warnings);
                if sink.register(compiled.feature) {
                    tracing::debug!(event = "rule_registered", rule = %name);
                    report.record_registered(name);
                } else {
                    let err = CompileError::DuplicateRuleName(name.clone());
                    tracing::error!(
                        event = "rule_rejected",
                        rule = %name,
                        code = err.code(),
                        "registry rejected the rule, it may be a duplicate"
                    );
                    report.record_failure(name, &err);
                }
            }
            Err(err) => {
                tracing::error!(
                    event = "rule_failed",
                    rule = %name,
                    code = err.code(),
                    error = %err,
                    "error parsing generation entry"
                );
                report.record_failure(name, &err);
            }
        }
    }

    report
}

fn read_document(path: &Path) -> Result<Map<String, Value>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

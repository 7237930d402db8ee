use crate::error::{FileError, Result, RewriterError};
use crate::rewrite::Rewriter;
use cloak_core::TokenPrefix;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use typed_builder::TypedBuilder;

/// File name endings recognised as playlists, compared ignoring ASCII case.
const PLAYLIST_SUFFIXES: [&str; 2] = [".m3u", ".m3u8"];

/// Appended to the input file stem to name the rewritten copy.
pub const OUTPUT_SUFFIX: &str = ".encoded.m3u";

/// What to do when a single playlist cannot be read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure in the report and go on with the next file.
    #[default]
    SkipAndContinue,
    /// Stop the batch and return the failure.
    AbortOnError,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct BatchOptions {
    /// Directory scanned (non-recursively) for playlists.
    #[builder(setter(into))]
    pub input_dir: PathBuf,
    /// Directory receiving the rewritten copies. Created when missing.
    #[builder(setter(into))]
    pub output_dir: PathBuf,
    #[builder(default, setter(into))]
    pub prefix: TokenPrefix,
    #[builder(default)]
    pub policy: FailurePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of references replaced in this file.
    pub replaced: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub written: Vec<WrittenFile>,
    pub failed: Vec<FileFailure>,
}

impl RewriteReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn written_paths(&self) -> impl Iterator<Item = &Path> {
        self.written.iter().map(|file| file.output.as_path())
    }
}

/// Name of the rewritten copy of `input`: its stem plus [`OUTPUT_SUFFIX`].
///
/// Only the last extension is dropped, so `a.b.m3u8` becomes
/// `a.b.encoded.m3u`.
pub fn output_file_name(input: &Path) -> OsString {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    name
}

/// Matches on the whole file name, so a file called just `.m3u` counts.
fn is_playlist(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.to_string_lossy().to_ascii_lowercase();
        PLAYLIST_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
    })
}

fn list_playlists(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_error = |source| RewriterError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut playlists = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && is_playlist(&path) {
            playlists.push(path);
        }
    }

    // read_dir order is platform dependent
    playlists.sort();
    Ok(playlists)
}

fn rewrite_file(
    rewriter: &Rewriter,
    input: &Path,
    output: &Path,
) -> std::result::Result<usize, FileError> {
    let bytes = fs::read(input).map_err(|source| FileError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = content {
        warn!(input = %input.display(), "playlist is not valid UTF-8, invalid bytes replaced");
    }

    let (rewritten, replaced) = rewriter.rewrite_counted(&content);

    fs::write(output, rewritten).map_err(|source| FileError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(replaced)
}

/// Rewrites every playlist in `options.input_dir` into `options.output_dir`.
///
/// A missing input directory fails the whole run before anything is
/// created. Per-file failures follow `options.policy`.
pub fn process_directory(options: &BatchOptions) -> Result<RewriteReport> {
    let input_dir = options.input_dir.as_path();
    if !input_dir.is_dir() {
        return Err(RewriterError::InputDirMissing(input_dir.to_path_buf()));
    }

    let playlists = list_playlists(input_dir)?;

    fs::create_dir_all(&options.output_dir).map_err(|source| RewriterError::CreateOutputDir {
        path: options.output_dir.clone(),
        source,
    })?;

    let mut report = RewriteReport::default();
    if playlists.is_empty() {
        info!(input_dir = %input_dir.display(), "no .m3u/.m3u8 files found, nothing to do");
        return Ok(report);
    }

    debug!(count = playlists.len(), prefix = %options.prefix, "rewriting playlists");

    let rewriter = Rewriter::new(options.prefix.clone());
    let mut claimed = HashSet::new();

    for input in playlists {
        let output = options.output_dir.join(output_file_name(&input));
        if !claimed.insert(output.clone()) {
            warn!(
                input = %input.display(),
                output = %output.display(),
                "output name already used by another playlist in this run, overwriting"
            );
        }

        match rewrite_file(&rewriter, &input, &output) {
            Ok(replaced) => {
                info!(output = %output.display(), replaced, "wrote rewritten playlist");
                report.written.push(WrittenFile {
                    input,
                    output,
                    replaced,
                });
            }
            Err(err) => match options.policy {
                FailurePolicy::AbortOnError => return Err(err.into()),
                FailurePolicy::SkipAndContinue => {
                    error!(error = %err, "skipping playlist");
                    report.failed.push(FileFailure {
                        path: err.path().clone(),
                        error: err.to_string(),
                    });
                }
            },
        }
    }

    Ok(report)
}

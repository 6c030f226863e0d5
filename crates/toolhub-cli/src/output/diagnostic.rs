//! Miette diagnostics for catalog data errors and the CLI error type.

use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use toolhub::{LoadError, PreferenceError, RouteError};

/// A JSON syntax or shape error in a data file, pointing at the offending
/// location when the file can be re-read.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid data in {path}: {message}")]
#[diagnostic(code(toolhub::data))]
pub struct DataDiagnostic {
    path: String,

    #[source_code]
    src: Option<NamedSource<String>>,

    #[label("error here")]
    span: Option<SourceSpan>,

    message: String,

    #[help]
    help: Option<String>,
}

impl DataDiagnostic {
    /// Build a diagnostic for a parse failure at `line`:`column` of `path`,
    /// re-reading the file on disk for the snippet.
    pub fn from_parse_error(path: &Path, line: usize, column: usize, message: String) -> Self {
        let display = path.display().to_string();
        let (src, span) = match read_to_string(path) {
            Ok(content) => {
                let offset = byte_offset(&content, line, column);
                let span = SourceSpan::from((offset, usize::from(offset < content.len())));
                (Some(NamedSource::new(display.clone(), content)), Some(span))
            }
            Err(_) => (None, None),
        };
        DataDiagnostic {
            path: display,
            src,
            span,
            message,
            help: Some("data files are JSON arrays; see categories.json and tools.json".into()),
        }
    }

    /// Build a diagnostic for a parse failure in data compiled into the
    /// binary. There is no file to show, so no snippet is attached.
    pub fn without_source(path: &Path, message: String) -> Self {
        DataDiagnostic {
            path: path.display().to_string(),
            src: None,
            span: None,
            message,
            help: None,
        }
    }
}

/// Convert a 1-based line and column into a byte offset, clamped to the
/// content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);
    offset.min(content.len())
}

/// Failures that map to a specific process exit code.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Data(#[from] DataDiagnostic),

    #[error("cannot read '{path}'")]
    #[diagnostic(code(toolhub::no_input))]
    NoInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{path}'")]
    #[diagnostic(code(toolhub::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(toolhub::route))]
    Route(#[from] RouteError),

    #[error(transparent)]
    #[diagnostic(code(toolhub::preferences))]
    Preferences(#[from] PreferenceError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Data(_) | CliError::Route(_) => exitcode::DATAERR,
            CliError::NoInput { .. } => exitcode::NOINPUT,
            CliError::Write { .. } => exitcode::CANTCREAT,
            CliError::Preferences(_) => exitcode::IOERR,
        }
    }

    /// Convert a load failure of the bundled catalog. Parse errors there
    /// name embedded files, so nothing is read from disk.
    pub fn from_bundled(err: LoadError) -> Self {
        match err {
            LoadError::Parse { path, message, .. } => {
                CliError::Data(DataDiagnostic::without_source(&path, message))
            }
            err @ LoadError::Io { .. } => CliError::from(err),
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        CliError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The process exit code for a failed command.
pub fn exit_code(report: &miette::Report) -> i32 {
    report
        .downcast_ref::<CliError>()
        .map_or(exitcode::SOFTWARE, CliError::exit_code)
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Io { path, source } => CliError::NoInput { path, source },
            LoadError::Parse {
                path,
                line,
                column,
                message,
            } => CliError::Data(DataDiagnostic::from_parse_error(&path, line, column, message)),
        }
    }
}

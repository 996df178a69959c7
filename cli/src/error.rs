use std::path::PathBuf;

use holey::ArrayError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("SyntaxError: {message}")]
#[diagnostic(code(holey::syntax), help("check the command around this location"))]
pub struct SyntaxError {
    pub message: String,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            message: message.into(),
            span: (offset, length).into(),
        }
    }
}

/// Everything the CLI can report.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("ReferenceError: {name} is not defined")]
    #[diagnostic(
        code(holey::unknown_array),
        help("bind it first, for example `let {name} = []`")
    )]
    UnknownArray {
        name: String,
        #[label("not bound")]
        span: miette::SourceSpan,
    },

    #[error("TypeError: {target}.{method} is not a function")]
    #[diagnostic(code(holey::unknown_method), help("type `.help` for the supported methods"))]
    UnknownMethod { target: String, method: String },

    #[error("could not read '{}'", path.display())]
    #[diagnostic(code(holey::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(holey::config))]
    Config { message: String },

    #[error("failed to start the REPL: {message}")]
    #[diagnostic(code(holey::repl))]
    Repl { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Array(#[from] ArrayError),
}

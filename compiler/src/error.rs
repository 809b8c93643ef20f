use std::fmt;

use thiserror::Error;

use crate::utils::quote;

#[derive(Debug, Error)]
pub enum IdlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error on line {line}: couldn't parse {} as either a field or a constant", quote(.text))]
    MalformedLine {
        line: usize,
        /// The offending line as written, trimmed.
        text: String,
    },

    #[error("error on line {line}: unknown constant type {type_name}")]
    UnknownConstantType {
        line:      usize,
        type_name: String,
    },

    #[error("error on line {line}: too many '---' delimiters")]
    TooManyDelimiters {
        line: usize,
    },

    #[error("error on line {line}: invalid array size {size}")]
    InvalidArraySize {
        line: usize,
        size: String,
    },

    #[error("Invalid interface path: {0}")]
    InvalidPath(String),
}

impl IdlError {
    /// Source line the error is attributed to, if it came from a parse.
    pub fn line(&self) -> Option<usize> {
        match self {
            IdlError::MalformedLine { line, .. }
            | IdlError::UnknownConstantType { line, .. }
            | IdlError::TooManyDelimiters { line }
            | IdlError::InvalidArraySize { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// A failed parse together with whatever was assembled before the failing line.
///
/// `partial` is `None` when the failure leaves nothing usable, e.g. a service
/// with more than one delimiter.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Partial<T: fmt::Debug> {
    pub partial: Option<T>,
    #[source]
    pub error:   IdlError,
}

impl<T: fmt::Debug> Partial<T> {
    pub fn new(partial: T, error: IdlError) -> Self {
        Partial { partial: Some(partial), error }
    }

    pub fn fatal(error: IdlError) -> Self {
        Partial { partial: None, error }
    }

    pub fn into_error(self) -> IdlError {
        self.error
    }

    pub fn map<U: fmt::Debug>(self, f: impl FnOnce(T) -> U) -> Partial<U> {
        Partial {
            partial: self.partial.map(f),
            error:   self.error,
        }
    }
}

pub type ParseResult<T> = Result<T, Partial<T>>;

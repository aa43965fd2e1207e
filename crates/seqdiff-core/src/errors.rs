use thiserror::Error;

/// Result type alias using DiffError
pub type Result<T> = std::result::Result<T, DiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The matching engine itself has no recoverable failures; these kinds cover
/// the boundary layers (argument validation for the close-match ranker and
/// file loading for the front end). Each kind maps to a stable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A caller-supplied argument is outside its documented domain
    InvalidInput,
    /// Reading input failed
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Errors raised at the boundaries of the diff engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffError {
    /// Requested result count for close matches is zero
    #[error("n must be > 0: ({n})")]
    InvalidCount { n: usize },

    /// Similarity cutoff outside the unit interval (NaN included)
    #[error("cutoff must be in [0.0, 1.0]: ({cutoff})")]
    InvalidCutoff { cutoff: f64 },

    /// An input file could not be read
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

/// Conversion from DiffError to ExError
impl From<DiffError> for ExError {
    fn from(err: DiffError) -> Self {
        match err {
            DiffError::InvalidCount { n } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("get_close_matches")
                .with_message(format!("n must be > 0: ({})", n)),

            DiffError::InvalidCutoff { cutoff } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("get_close_matches")
                .with_message(format!("cutoff must be in [0.0, 1.0]: ({})", cutoff)),

            DiffError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_op("read_lines")
                .with_message(format!("{}: {}", path, message)),
        }
    }
}

/// Payload-free classification of an [`EnvError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Empty,
    Parse,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnvError {
    /// The variable is not set.
    NotFound(String),
    /// The variable is set to the empty string and the lookup disallowed it.
    Empty(String),
    /// The value, or one segment of it, could not be converted to `target`.
    ///
    /// `Display` shows `value`. Log lines go through
    /// [`LogFormat::error_summary`](crate::common::LogFormat::error_summary),
    /// which leaves it out.
    Parse {
        name: String,
        value: String,
        target: &'static str,
        reason: String,
    },
}

impl EnvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvError::NotFound(_) => ErrorKind::NotFound,
            EnvError::Empty(_) => ErrorKind::Empty,
            EnvError::Parse { .. } => ErrorKind::Parse,
        }
    }

    /// Name of the variable the failed lookup or conversion was for.
    pub fn name(&self) -> &str {
        match self {
            EnvError::NotFound(name) | EnvError::Empty(name) => name.as_str(),
            EnvError::Parse { name, .. } => name.as_str(),
        }
    }
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::NotFound(name) => write!(f, "NotFound: {}", name),
            EnvError::Empty(name)    => write!(f, "Empty: {}", name),
            EnvError::Parse { name, value, target, reason } => write!(
                f,
                "ParseError: {}: cannot convert {:?} to {}: {}",
                name, value, target, reason
            ),
        }
    }
}

impl std::error::Error for EnvError {}

/// The lookup primitive every converter is built on.
pub trait Lookup {
    /// Returns the raw value of `name`, unchanged.
    ///
    /// Fails with [`EnvError::NotFound`] when the variable is unset, and with
    /// [`EnvError::Empty`] when it is set to `""` and `allow_empty` is false.
    fn lookup(&self, name: &str, allow_empty: bool) -> Result<String, EnvError>;

    /// Same as `lookup(name, true)`, with `fallback` returned on any failure.
    fn lookup_or(&self, name: &str, fallback: &str) -> String {
        self.lookup(name, true)
            .unwrap_or_else(|_| fallback.to_string())
    }
}

// Decorated errors
//
// An error carries optional diagnostics next to its message: a stack
// snapshot taken where it was created, an HTTP status classification and a
// severity level. The `find_*` functions look those up anywhere along an
// error's `source()` chain.

use crate::HttpStatus;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use verity_log::Level;

/// Result type with a decorated [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Call-stack snapshot.
///
/// The caller location is always recorded. The backtrace honours
/// `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE` and is empty when capture is
/// disabled.
#[derive(Clone)]
pub struct Stack {
    location: &'static Location<'static>,
    backtrace: Arc<Backtrace>,
}

impl Stack {
    /// Capture a snapshot at the caller.
    #[track_caller]
    pub fn capture() -> Self {
        Self::at(Location::caller())
    }

    /// Capture a snapshot attributed to `location`.
    pub fn at(location: &'static Location<'static>) -> Self {
        Self {
            location,
            backtrace: Arc::new(Backtrace::capture()),
        }
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for Stack {
    /// `{}` prints `file:line:column`; `{:#}` appends the backtrace when one
    /// was captured.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location)?;
        if f.alternate() && self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\n{}", self.backtrace)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("location", &format_args!("{}", self.location))
            .field("backtrace", &self.backtrace.status())
            .finish()
    }
}

/// An error message decorated with a stack snapshot, a status and a level.
#[derive(Debug, Clone)]
pub struct Error {
    message: String,
    source: Option<Arc<dyn StdError + Send + Sync + 'static>>,
    stack: Option<Stack>,
    status: Option<HttpStatus>,
    level: Option<Level>,
}

impl Error {
    /// Create an error with a stack snapshot taken at the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(message, Location::caller())
    }

    /// Create an error whose stack snapshot is attributed to `location`.
    pub fn at(message: impl Into<String>, location: &'static Location<'static>) -> Self {
        Self {
            message: message.into(),
            source: None,
            stack: Some(Stack::at(location)),
            status: None,
            level: None,
        }
    }

    /// Classify the error with an HTTP status.
    pub fn with_status(mut self, status: HttpStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach a severity level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    pub fn status(&self) -> Option<HttpStatus> {
        self.status
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

fn find_decoration<'a, T>(
    err: &'a (dyn StdError + 'static),
    pick: impl Fn(&'a Error) -> Option<T>,
) -> Option<T> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(found) = err.downcast_ref::<Error>().and_then(&pick) {
            return Some(found);
        }
        current = err.source();
    }
    None
}

/// First stack snapshot along the error chain.
pub fn find_stack<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Stack> {
    find_decoration(err, Error::stack)
}

/// First status classification along the error chain.
pub fn find_status(err: &(dyn StdError + 'static)) -> Option<HttpStatus> {
    find_decoration(err, Error::status)
}

/// First severity level along the error chain.
pub fn find_level(err: &(dyn StdError + 'static)) -> Option<Level> {
    find_decoration(err, Error::level)
}

/// Failure categories, each with its own process exit status.
///
/// Codes start at 3 so they never collide with clap's usage-error status (2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// RA/DEC bounds are inverted or degenerate.
    InvalidWindow,
    /// The output catalog could not be created.
    OutputOpen,
    /// Connecting to the database or running the procedure failed.
    QueryExecution,
    /// Connection settings are missing or unusable.
    Config,
    /// A write to the already-open output file failed.
    OutputWrite,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidWindow => 3,
            ErrorKind::OutputOpen => 4,
            ErrorKind::QueryExecution => 5,
            ErrorKind::Config => 6,
            ErrorKind::OutputWrite => 7,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code())
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

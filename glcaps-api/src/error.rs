pub type GlcapsResult<T> = Result<T, GlcapsError>;

/// Errors that escape the resolution layer. Limit queries never produce these, a failing limit is
/// recorded in the `GlLimitsRecord` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum GlcapsError {
    StringError(String),

    /// The command exists but none of its aliases could be bound for the current context. Carries
    /// the logical command name so the missing version/extension can be diagnosed.
    UnavailableCommand(&'static str),

    /// The logical name is not in the command table at all
    UnknownCommand(String),

    /// A command was dispatched on a thread with no current context
    NoCurrentContext,

    /// A checked GL call reported an error code through `glGetError`
    GlError(u32),
}

impl std::error::Error for GlcapsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl core::fmt::Display for GlcapsError {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        match *self {
            GlcapsError::StringError(ref e) => e.fmt(fmt),
            GlcapsError::UnavailableCommand(name) => write!(
                fmt,
                "GL command {} is not available in the current context",
                name
            ),
            GlcapsError::UnknownCommand(ref name) => write!(fmt, "Unknown GL command {}", name),
            GlcapsError::NoCurrentContext => {
                write!(fmt, "No GL context is current on this thread")
            }
            GlcapsError::GlError(code) => write!(fmt, "GL error 0x{:04X}", code),
        }
    }
}

impl From<&str> for GlcapsError {
    fn from(str: &str) -> Self {
        GlcapsError::StringError(str.to_string())
    }
}

impl From<String> for GlcapsError {
    fn from(string: String) -> Self {
        GlcapsError::StringError(string)
    }
}

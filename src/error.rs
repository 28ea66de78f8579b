use std::error::Error as StdError;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

pub struct Error {
    inner: Box<Inner>,
}

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

struct Inner {
    kind: Kind,
    msg: Option<String>,
    source: Option<BoxError>,
}

impl Error {
    pub(crate) fn new<E>(kind: Kind, msg: Option<String>, source: Option<E>) -> Error
        where
            E: Into<BoxError>,
    {
        Error {
            inner: Box::new(Inner {
                kind,
                msg,
                source: source.map(Into::into),
            }),
        }
    }

    pub(crate) fn new_msg(kind: Kind, msg: Option<String>) -> Error
    {
        Error {
            inner: Box::new(Inner {
                kind,
                msg,
                source: None
            }),
        }
    }

    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    pub fn is_malformed_length(&self) -> bool {
        matches!(self.inner.kind, Kind::MalformedLength { .. })
    }

    pub fn is_invalid_digit(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidDigit { .. })
    }

    pub fn into_io(self) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, self)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut builder = f.debug_struct("uuid_bytes_utils::Error");

        builder.field("kind", &self.inner.kind);

        if let Some(ref msg) = self.inner.msg {
            builder.field("msg", msg);
        }

        if let Some(ref source) = self.inner.source {
            builder.field("source", source);
        }

        builder.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.inner.kind {
            Kind::MalformedLength { len } =>
                write!(f, "malformed length error: got {}", len)?,
            Kind::InvalidDigit { digit, position } =>
                write!(f, "invalid digit error: {:?} at position {}", digit, position)?,
        };

        if let Some(msg) = &self.inner.msg {
            write!(f, ": {}", msg)?;
        }

        if let Some(e) = &self.inner.source {
            write!(f, ": {}", e)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Kind {
    /// Input did not hold the expected number of digits (or bytes).
    MalformedLength { len: usize },
    /// A character outside `0-9a-fA-F`, `position` counted with hyphens removed.
    InvalidDigit { digit: char, position: usize },
}

// constructors

pub(crate) fn malformed_length(len: usize, msg: Option<String>) -> Error {
    Error::new_msg(Kind::MalformedLength { len }, msg)
}

pub(crate) fn invalid_digit(digit: char, position: usize) -> Error {
    Error::new_msg(Kind::InvalidDigit { digit, position }, None)
}

pub(crate) fn malformed_slice<E: Into<BoxError>>(len: usize, e: E) -> Error {
    Error::new(Kind::MalformedLength { len }, None, Some(e))
}

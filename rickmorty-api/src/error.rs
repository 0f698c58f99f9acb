use strum_macros::Display;

/// A failed call against the reference API.
///
/// Callers upstream of the fetch boundary never see this type: the
/// browser layers catch it, log it, and move on.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
    /// The request never produced a response.
    Request,
    /// The server answered with a non-success status.
    Status,
    /// The response body did not decode into the expected model.
    Decode,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn request(err: surf::Error) -> Self {
        Self::new(ErrorKind::Request, err.to_string())
    }

    pub(crate) fn status(status: surf::StatusCode) -> Self {
        Self::new(ErrorKind::Status, format!("unexpected status {}", status))
    }

    pub(crate) fn decode(err: surf::Error) -> Self {
        Self::new(ErrorKind::Decode, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_kind_and_message() {
        let err = Error::new(ErrorKind::Status, "unexpected status 404");
        assert_eq!(err.to_string(), "Status error: unexpected status 404");
        assert_eq!(err.kind(), ErrorKind::Status);
    }
}

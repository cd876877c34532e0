use thiserror::Error;

/// The error type shared by all `contig` collection operations.
///
/// The kind is boxed to keep `Result<T>` the size of a pointer on the
/// success path.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_range(index: usize, count: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, count }.into())
    }

    pub fn range_out_of_bounds(start: usize, length: usize, count: usize) -> Error {
        Error(
            ErrorKind::RangeOutOfBounds {
                start,
                length,
                count,
            }
            .into(),
        )
    }

    pub fn view_size_mismatch(view_size: usize, element_size: usize) -> Error {
        Error(
            ErrorKind::ViewSizeMismatch {
                view_size,
                element_size,
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index (is {index}) out of range for count {count}")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("range [{start}, {start} + {length}) out of bounds for count {count}")]
    RangeOutOfBounds {
        start: usize,
        length: usize,
        count: usize,
    },

    #[error("view element size {view_size} is not a nonzero multiple of element size {element_size}")]
    ViewSizeMismatch {
        view_size: usize,
        element_size: usize,
    },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_roundtrip() {
        let err = Error::index_out_of_range(5, 3);
        assert!(matches!(
            err.kind(),
            ErrorKind::IndexOutOfRange { index: 5, count: 3 }
        ));
        assert!(matches!(
            err.into_kind(),
            ErrorKind::IndexOutOfRange { index: 5, count: 3 }
        ));
    }

    #[test]
    fn test_error_display() {
        let err = Error::range_out_of_bounds(2, 4, 5);
        assert_eq!(
            err.to_string(),
            "range [2, 2 + 4) out of bounds for count 5"
        );
    }
}

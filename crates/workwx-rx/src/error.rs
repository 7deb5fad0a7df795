// ABOUTME: Error types for workwx-rx.
// ABOUTME: Distinguishes unknown top-level message types from payloads that fail to decode.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RxError {
    /// `MsgType` is not one of the known top-level message types.
    #[error("unrecognized message type '{0}'")]
    UnrecognizedKind(String),

    /// The payload is malformed: not UTF-8, not parseable against the shape
    /// selected for it, or carrying an unrepresentable `CreateTime`.
    #[error("failed to decode {pass}: {source}")]
    Decode {
        /// Which step failed: `utf-8`, `common header`, `create time` or a
        /// specific variant.
        pass: &'static str,
        #[source]
        source: DecodeFailure,
    },
}

/// What went wrong inside a [`RxError::Decode`].
#[derive(Error, Debug)]
pub enum DecodeFailure {
    #[error(transparent)]
    Xml(#[from] quick_xml::DeError),

    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    #[error("CreateTime {0} is out of range")]
    TimestampOutOfRange(i64),
}

impl RxError {
    pub(crate) fn decode(pass: &'static str, source: impl Into<DecodeFailure>) -> Self {
        RxError::Decode {
            pass,
            source: source.into(),
        }
    }

    /// True for every failure caused by malformed payload bytes, as opposed
    /// to a well-formed payload of an unsupported type.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, RxError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, RxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RxError::UnrecognizedKind("miniprogram".to_string());
        assert_eq!(err.to_string(), "unrecognized message type 'miniprogram'");

        let err = RxError::decode("create time", DecodeFailure::TimestampOutOfRange(i64::MAX));
        assert_eq!(
            err.to_string(),
            format!("failed to decode create time: CreateTime {} is out of range", i64::MAX)
        );
    }

    #[test]
    fn test_decode_classification() {
        assert!(!RxError::UnrecognizedKind("x".into()).is_decode_error());
        assert!(RxError::decode("create time", DecodeFailure::TimestampOutOfRange(0)).is_decode_error());

        let bytes = vec![0xff, 0xfe];
        let utf8 = std::str::from_utf8(&bytes).unwrap_err();
        let err = RxError::decode("utf-8", utf8);
        assert!(matches!(
            err,
            RxError::Decode {
                pass: "utf-8",
                source: DecodeFailure::Utf8(_)
            }
        ));
    }
}

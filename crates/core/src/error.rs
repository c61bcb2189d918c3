//! Error types for the hslkit core.

use thiserror::Error;

/// Errors produced by conversion and backend lookup.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An input component fell outside the closed interval [0, 1].
    ///
    /// This is the kernel's only failure mode: once a triple passes
    /// validation, the arithmetic itself cannot fail.
    #[error("channel '{channel}' out of range: {value} is not in [0, 1]")]
    ChannelOutOfRange { channel: &'static str, value: f64 },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A requested backend name was not recognized.
    #[error("unknown backend: {0}")]
    UnknownBackend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_out_of_range_includes_channel_and_value() {
        let err = ConvertError::ChannelOutOfRange {
            channel: "g",
            value: 1.5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("'g'"), "missing channel name in: {msg}");
        assert!(msg.contains("1.5"), "missing value in: {msg}");
    }

    #[test]
    fn channel_out_of_range_formats_nan() {
        let err = ConvertError::ChannelOutOfRange {
            channel: "h",
            value: f64::NAN,
        };
        let msg = format!("{err}");
        assert!(msg.contains("NaN"), "missing NaN in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = ConvertError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_backend_includes_name() {
        let err = ConvertError::UnknownBackend("turbo".into());
        let msg = format!("{err}");
        assert!(msg.contains("turbo"), "missing backend name in: {msg}");
    }

    #[test]
    fn convert_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConvertError>();
    }

    #[test]
    fn convert_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ConvertError>();
    }
}

//! Output formatting for wrapper errors.
//!
//! Tool output is relayed untouched; only errors raised by show_h5 itself
//! are formatted here.

use crate::error::Error;
use serde::Serialize;
use std::io::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    program: Option<String>,
}

/// Formats a wrapper error.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            let program = match err {
                Error::Launch { program, .. } => Some(program.display().to_string()),
                Error::Relay(_) => None,
            };
            format_json(&ErrorReport {
                error: err.kind(),
                message: err.to_string(),
                program,
            })
        }
    }
}

/// Writes a wrapper error to the stream its format calls for.
///
/// JSON goes to `stdout` for programmatic parsing, text goes to `stderr`.
/// Write failures are ignored: the stream may be the one that just failed.
pub fn report_error<O: Write, E: Write>(
    err: &Error,
    format: OutputFormat,
    stdout: &mut O,
    stderr: &mut E,
) {
    let output = format_error(err, format);
    let _ = match format {
        OutputFormat::Json => writeln!(stdout, "{output}"),
        OutputFormat::Text => writeln!(stderr, "Error: {output}"),
    };
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn launch_error() -> Error {
        Error::Launch {
            program: PathBuf::from("h5dump"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_error_text() {
        let output = format_error(&launch_error(), OutputFormat::Text);
        assert_eq!(output, "failed to launch h5dump: No such file or directory");
    }

    #[test]
    fn test_format_error_json() {
        let output = format_error(&launch_error(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["error"], "launch");
        assert_eq!(value["program"], "h5dump");
        assert!(
            value["message"]
                .as_str()
                .unwrap()
                .contains("No such file or directory")
        );
    }

    struct ClosedStream;

    impl Write for ClosedStream {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_error_text_goes_to_stderr() {
        let (mut out, mut err): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
        report_error(&launch_error(), OutputFormat::Text, &mut out, &mut err);
        assert!(out.is_empty());
        assert_eq!(
            err,
            b"Error: failed to launch h5dump: No such file or directory\n"
        );
    }

    #[test]
    fn test_report_error_json_goes_to_stdout() {
        let (mut out, mut err): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
        report_error(&launch_error(), OutputFormat::Json, &mut out, &mut err);
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["error"], "launch");
    }

    #[test]
    fn test_report_error_survives_closed_stream() {
        let err = Error::Relay(io::Error::from(io::ErrorKind::BrokenPipe));
        report_error(&err, OutputFormat::Text, &mut io::sink(), &mut ClosedStream);
        report_error(&err, OutputFormat::Json, &mut ClosedStream, &mut io::sink());
    }

    #[test]
    fn test_format_relay_error_json_has_no_program() {
        let err = Error::Relay(io::Error::other("disk full"));
        let output = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["error"], "relay");
        assert!(value.get("program").is_none());
    }
}

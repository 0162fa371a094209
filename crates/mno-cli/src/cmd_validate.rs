/// Implementation of `mno validate`.
///
/// Decodes the whole file and reports either a series of success
/// checkmarks (`✓`) or a diagnostic failure line (`✗`). The first
/// malformed MNO line ends validation; nothing after it is checked.
///
/// # Success output
///
/// ```text
/// ✓ Records: 998000 decoded
/// ✓ Skipped: 2000 untagged lines
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Line 17, column 10: unexpected byte 0x61 at offset 9
/// ```
use anyhow::{Result, anyhow};
use mno_scanner::ScanError;

use crate::ValidateArgs;
use crate::input::{self, Input};

/// Run the `mno validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, or after printing a
/// `✗` diagnostic if any record fails to decode.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let config = input::scan_config(&args.input);

    match Input::open(&args.input)?.scan(&config, |_record| Ok::<_, ScanError>(())) {
        Ok(summary) => {
            println!("✓ Records: {} decoded", summary.records);
            println!(
                "✓ Skipped: {} untagged line{}",
                summary.skipped,
                if summary.skipped == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Err(e) => {
            println!("✗ {}", scan_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

/// Converts a [`ScanError`] into a one-line diagnostic.
///
/// Format errors carry a 0-based byte offset within the line; it is
/// shown as a 1-based column.
fn scan_error_diagnostic(e: &ScanError) -> String {
    match e {
        ScanError::Format { line, source } => {
            format!("Line {line}, column {}: {source}", source.offset() + 1)
        }
        ScanError::Cancelled { line } => format!("Cancelled after line {line}"),
        other => format!("Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mno_types::FormatError;

    #[test]
    fn format_diagnostic_names_line_and_column() {
        let e = ScanError::Format {
            line: 17,
            source: FormatError::UnexpectedByte {
                byte: b'a',
                offset: 9,
            },
        };
        assert_eq!(
            scan_error_diagnostic(&e),
            "Line 17, column 10: unexpected byte 0x61 at offset 9"
        );
    }

    #[test]
    fn io_diagnostic_uses_display() {
        let e = ScanError::Io(std::io::Error::other("boom"));
        assert_eq!(scan_error_diagnostic(&e), "Error: boom");
    }
}

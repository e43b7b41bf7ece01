//! Log-file timing extraction
//!
//! Each demo writes `log_<name>.txt` next to its binary and ends it with a
//! line of the form `Testing time -> 12.3ms`. Extraction is purely textual
//! and trusts that convention: the value is whatever follows the first `->`
//! on the last non-empty line, trimmed. Every failure mode (missing file,
//! unreadable content, no delimiter) degrades to the `"N/A"` sentinel rather
//! than failing the case.

use std::fs;
use std::path::Path;

/// Placeholder reported when no timing could be determined.
pub const TIME_UNAVAILABLE: &str = "N/A";

/// Delimiter preceding the timing token on the log's last line.
const DELIMITER: &str = "->";

/// Name of the log file a demo writes next to its binary.
pub fn log_file_name(case_name: &str) -> String {
    format!("log_{}.txt", case_name)
}

/// Extract the reported timing from a demo log file.
pub fn reported_time(log_file: &Path) -> String {
    let Ok(text) = fs::read_to_string(log_file) else {
        return TIME_UNAVAILABLE.to_string();
    };

    text.lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.split_once(DELIMITER))
        .map(|(_, time)| time.trim().to_string())
        .unwrap_or_else(|| TIME_UNAVAILABLE.to_string())
}

//! Output formatting utilities

use crate::domain::Entry;

/// Format the raw log, one stored line per entry
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "Log is empty".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.to_string());
        output.push('\n');
    }
    output
}

/// Format line texts, one per line
pub fn format_lines(lines: &[String]) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

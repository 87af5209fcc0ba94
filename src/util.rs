//! Small formatting helpers shared by the GUI and the CLI

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Character count as shown under message fields
pub fn char_count_label(text: &str) -> String {
    let count = text.chars().count();
    if count == 1 {
        "1 character".to_string()
    } else {
        format!("{} characters", count)
    }
}

//! Byte-level formatting helpers for terminal output

/// Human-readable size, e.g. `350 B`, `1.5 KB`, `2.0 MB`
///
/// # Examples
/// ```
/// use stdtour_core::utils::data::format_bytes;
/// assert_eq!(format_bytes(350), "350 B");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// ```
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

/// Printable rendering of raw bytes, non-ASCII and control bytes escaped
pub fn preview_bytes(data: &[u8]) -> String {
    data.escape_ascii().to_string()
}

//! Shared formatting helpers for dashboard widgets.
//!
//! All pure formatting and derived-metric functions (no ratatui styles, no
//! layout) live here.

use crate::storage::model::{Histogram, LoadAverages};

/// Width of the queue bar in placeholder state; one block per 5 %.
pub const QUEUE_BAR_SLOTS: usize = 20;

/// Block character used for the queue bar.
pub const BAR_BLOCK: char = '█';

const BYTE_UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

// ---------------------------------------------------------------------------
// Derived metrics
// ---------------------------------------------------------------------------

/// Agent CPU usage over its lifetime: `total_ms / uptime_ms * 100`.
///
/// Returns `0.0` when uptime is zero.
pub fn cpu_percent(total_ms: u64, uptime_ms: u64) -> f64 {
    if uptime_ms == 0 {
        return 0.0;
    }
    total_ms as f64 / uptime_ms as f64 * 100.0
}

/// Queue fill: `filled / max * 100`, or `0.0` when `max` is zero.
pub fn queue_percent(filled: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    filled as f64 / max as f64 * 100.0
}

/// Number of bar blocks for a fill percentage: `floor(percent / 5)`.
///
/// Not clamped above, so an over-reported queue overflows the bar.
pub fn queue_bar_len(percent: f64) -> usize {
    let blocks = (percent / 5.0).floor();
    if blocks.is_nan() || blocks < 0.0 {
        0
    } else {
        blocks as usize
    }
}

/// Queue bar string for a fill percentage.
pub fn queue_bar(percent: f64) -> String {
    std::iter::repeat_n(BAR_BLOCK, queue_bar_len(percent)).collect()
}

// ---------------------------------------------------------------------------
// Value formatting
// ---------------------------------------------------------------------------

/// Format byte count with binary units.
///
/// `"512 B"`, `"1.0 KiB"`, `"1.5 MiB"`, ... up to EiB.
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}", bytes as f64 / div as f64, BYTE_UNITS[exp])
}

/// Resident memory in megabytes: `"52.3 MB"`.
pub fn format_rss_mb(rss: u64) -> String {
    format!("{:.1} MB", rss as f64 / (1024.0 * 1024.0))
}

/// Format a percentage with one decimal: `"5.0%"`.
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Uptime truncated to whole minutes: `"2h5m"`, `"45m"`.
pub fn format_uptime(uptime_ms: u64) -> String {
    let minutes = uptime_ms / 60_000;
    let (h, m) = (minutes / 60, minutes % 60);
    if h > 0 {
        format!("{}h{}m", h, m)
    } else {
        format!("{}m", m)
    }
}

/// Normalized load averages: `"0.12 0.34 0.56"`.
pub fn format_load(load: &LoadAverages) -> String {
    format!("{:.2} {:.2} {:.2}", load.load1, load.load5, load.load15)
}

/// Histogram as `"  label          : value"` lines, numeric buckets only.
pub fn format_histogram(histogram: &Histogram) -> Vec<String> {
    histogram
        .numeric_buckets()
        .map(|(label, value)| format!("  {:<15}: {:.2}", label, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cpu_percent() {
        assert_eq!(cpu_percent(500, 10_000), 5.0);
        assert_eq!(cpu_percent(0, 10_000), 0.0);
        let zero_uptime = cpu_percent(500, 0);
        assert!(zero_uptime.is_finite());
        assert_eq!(zero_uptime, 0.0);
    }

    #[test]
    fn test_queue_percent_and_bar() {
        let pct = queue_percent(50, 1000);
        assert_eq!(pct, 5.0);
        assert_eq!(queue_bar_len(pct), 1);
        assert_eq!(queue_bar(pct), "█");

        assert_eq!(queue_percent(50, 0), 0.0);
        assert_eq!(queue_bar_len(0.0), 0);
        assert_eq!(queue_bar(0.0), "");

        assert_eq!(queue_bar_len(queue_percent(1000, 1000)), 20);
        assert_eq!(queue_bar_len(4.99), 0);
    }

    #[test]
    fn test_queue_bar_overflows_past_full() {
        let pct = queue_percent(1500, 1000);
        assert_eq!(pct, 150.0);
        assert_eq!(queue_bar_len(pct), 30);
        assert_eq!(queue_bar(pct).chars().count(), 30);
    }

    #[test]
    fn test_queue_bar_negative_is_empty() {
        assert_eq!(queue_bar_len(-10.0), 0);
        assert_eq!(queue_bar_len(f64::NAN), 0);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.0 KiB");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(1_048_576), "1.0 MiB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.0 GiB");
        assert_eq!(format_bytes(1 << 40), "1.0 TiB");
        assert_eq!(format_bytes(u64::MAX), "16.0 EiB");
    }

    #[test]
    fn test_format_rss_and_percent() {
        assert_eq!(format_rss_mb(0), "0.0 MB");
        assert_eq!(format_rss_mb(52_428_800), "50.0 MB");
        assert_eq!(format_percent(5.0), "5.0%");
        assert_eq!(format_percent(12.345), "12.3%");
    }

    #[test]
    fn test_format_uptime_truncates_to_minutes() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59_999), "0m");
        assert_eq!(format_uptime(45 * 60_000 + 30_000), "45m");
        assert_eq!(format_uptime((2 * 60 + 5) * 60_000 + 59_000), "2h5m");
        assert_eq!(format_uptime(50 * 3_600_000), "50h0m");
    }

    #[test]
    fn test_format_load() {
        let load = LoadAverages {
            load1: 0.12,
            load5: 1.0,
            load15: 12.3456,
        };
        assert_eq!(format_load(&load), "0.12 1.00 12.35");
    }

    #[test]
    fn test_format_histogram_skips_non_numeric() {
        let histogram: Histogram = [
            ("p99".to_string(), json!(12.5)),
            ("label".to_string(), json!("text")),
            ("count".to_string(), json!(3)),
        ]
        .into_iter()
        .collect();

        let lines = format_histogram(&histogram);
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&"  p99            : 12.50".to_string()));
        assert!(lines.contains(&"  count          : 3.00".to_string()));
    }
}

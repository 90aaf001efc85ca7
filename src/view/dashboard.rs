//! Main dashboard view model: system metrics, pipeline queue, harvesters and
//! modules.
//!
//! Built from the last known snapshot on every render; `None` yields the
//! placeholder state shown before the first successful fetch.

use crate::fmt::{
    QUEUE_BAR_SLOTS, cpu_percent, format_load, format_percent, format_rss_mb, format_uptime,
    queue_bar, queue_percent,
};
use crate::storage::Snapshot;
use crate::storage::model::ModuleInfo;

use super::common::{Metric, RowStyleClass, TableViewModel, ViewCell};
use super::inputs::inputs_table;

/// Glyph for an enabled module.
pub const MODULE_ENABLED: char = '✓';
/// Glyph for a disabled module.
pub const MODULE_DISABLED: char = '✗';

/// Pipeline queue panel.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueView {
    pub filled: u64,
    pub max: u64,
    pub percent: f64,
    /// Filled blocks, one per 5 %; may exceed 20 blocks on over-report.
    pub bar: String,
    /// Empty part of the bar, only drawn in the placeholder state.
    pub track: String,
    /// Pipeline event counters line.
    pub events: String,
}

impl QueueView {
    fn placeholder() -> Self {
        Self {
            filled: 0,
            max: 0,
            percent: 0.0,
            bar: String::new(),
            track: ".".repeat(QUEUE_BAR_SLOTS),
            events: String::new(),
        }
    }

    fn from_snapshot(snap: &Snapshot) -> Self {
        let queue = &snap.libbeat.pipeline.queue;
        let events = &snap.libbeat.pipeline.events;
        let percent = queue_percent(queue.filled.events, queue.max_events);
        Self {
            filled: queue.filled.events,
            max: queue.max_events,
            percent,
            bar: queue_bar(percent),
            track: String::new(),
            events: format!(
                "Events: {} total, {} dropped, {} failed, {} filtered",
                events.total, events.dropped, events.failed, events.filtered
            ),
        }
    }

    /// Counter prefix: `"50/1000"`.
    pub fn counts(&self) -> String {
        format!("{}/{}", self.filled, self.max)
    }

    /// Full bar line: `"50/1000 | █"`.
    pub fn text(&self) -> String {
        format!("{} | {}{}", self.counts(), self.bar, self.track)
    }
}

/// Everything the main screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub system: Vec<Metric>,
    pub queue: QueueView,
    pub harvesters: String,
    pub inputs: TableViewModel,
    pub modules: Vec<ViewCell>,
}

impl DashboardView {
    pub fn from_snapshot(snapshot: Option<&Snapshot>) -> Self {
        let Some(snap) = snapshot else {
            return Self::placeholder();
        };

        let harvester = &snap.filebeat.harvester;
        Self {
            system: system_metrics(snap),
            queue: QueueView::from_snapshot(snap),
            harvesters: harvester_text(harvester.running, harvester.open_files),
            inputs: inputs_table(Some(snap)),
            modules: snap.modules().iter().map(module_line).collect(),
        }
    }

    fn placeholder() -> Self {
        Self {
            system: vec![
                metric("CPU Total:", "0.0%"),
                metric("Memory RSS:", "0.0 MB"),
                metric("Uptime:", "0h 0m"),
                metric("Load Avg:", "0.00 0.00 0.00"),
            ],
            queue: QueueView::placeholder(),
            harvesters: harvester_text(0, 0),
            inputs: inputs_table(None),
            modules: vec![ViewCell::styled(
                "Loading...".to_string(),
                RowStyleClass::Dimmed,
            )],
        }
    }

    /// Plain-text rendering used by one-shot mode.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("System\n");
        for m in &self.system {
            out.push_str(&format!("  {:<12} {}\n", m.label, m.value));
        }
        out.push_str("Pipeline Queue\n");
        out.push_str(&format!("  {}\n", self.queue.text()));
        if !self.queue.events.is_empty() {
            out.push_str(&format!("  {}\n", self.queue.events));
        }
        out.push_str("Harvesters\n");
        out.push_str(&format!("  {}\n", self.harvesters));

        out.push_str(&format!("{}\n", self.inputs.title));
        out.push_str(&format!("  {}\n", self.inputs.headers.join(" | ")));
        for row in &self.inputs.rows {
            out.push_str(&format!("  {}\n", row.texts().join(" | ")));
        }

        out.push_str("Modules\n");
        for line in &self.modules {
            out.push_str(&format!("  {}\n", line.text));
        }
        out
    }
}

fn metric(label: &'static str, value: &str) -> Metric {
    Metric {
        label,
        value: value.to_string(),
    }
}

fn system_metrics(snap: &Snapshot) -> Vec<Metric> {
    let cpu = cpu_percent(snap.beat.cpu.total.time.ms, snap.uptime_ms());
    vec![
        metric("CPU Total:", &format_percent(cpu)),
        metric("Memory RSS:", &format_rss_mb(snap.beat.memstats.rss)),
        metric("Uptime:", &format_uptime(snap.uptime_ms())),
        metric("Load Avg:", &format_load(&snap.system.load.norm)),
    ]
}

/// `"Active: 3 | Open Files: 7"`
pub fn harvester_text(running: u64, open_files: u64) -> String {
    format!("Active: {} | Open Files: {}", running, open_files)
}

/// `"✓ nginx (0 errors)"`, green when enabled, red otherwise.
pub fn module_line(module: &ModuleInfo) -> ViewCell {
    let (glyph, style) = if module.enabled {
        (MODULE_ENABLED, RowStyleClass::Active)
    } else {
        (MODULE_DISABLED, RowStyleClass::Critical)
    };
    ViewCell::styled(
        format!("{} {} ({} errors)", glyph, module.name, module.errors),
        style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::model::Input;

    fn values(view: &DashboardView) -> Vec<&str> {
        view.system.iter().map(|m| m.value.as_str()).collect()
    }

    #[test]
    fn test_placeholder_state() {
        let view = DashboardView::from_snapshot(None);

        assert_eq!(
            values(&view),
            vec!["0.0%", "0.0 MB", "0h 0m", "0.00 0.00 0.00"]
        );
        assert_eq!(view.queue.text(), "0/0 | ....................");
        assert_eq!(view.harvesters, "Active: 0 | Open Files: 0");
        assert!(view.inputs.rows.is_empty());
        assert_eq!(view.modules.len(), 1);
        assert_eq!(view.modules[0].text, "Loading...");
    }

    #[test]
    fn test_system_metrics_from_snapshot() {
        let mut snap = Snapshot::default();
        snap.beat.cpu.total.time.ms = 500;
        snap.beat.info.uptime.ms = 10_000;
        snap.beat.memstats.rss = 52_428_800;
        snap.system.load.norm.load1 = 0.5;
        snap.system.load.norm.load5 = 0.25;
        snap.system.load.norm.load15 = 1.0;

        let view = DashboardView::from_snapshot(Some(&snap));
        assert_eq!(values(&view), vec!["5.0%", "50.0 MB", "0m", "0.50 0.25 1.00"]);
    }

    #[test]
    fn test_zero_uptime_shows_zero_cpu() {
        let mut snap = Snapshot::default();
        snap.beat.cpu.total.time.ms = 500;

        let view = DashboardView::from_snapshot(Some(&snap));
        assert_eq!(view.system[0].value, "0.0%");
    }

    #[test]
    fn test_harvester_text() {
        let mut snap = Snapshot::default();
        snap.filebeat.harvester.running = 3;
        snap.filebeat.harvester.open_files = 7;

        let view = DashboardView::from_snapshot(Some(&snap));
        assert_eq!(view.harvesters, "Active: 3 | Open Files: 7");
    }

    #[test]
    fn test_queue_view() {
        let mut snap = Snapshot::default();
        snap.libbeat.pipeline.queue.filled.events = 50;
        snap.libbeat.pipeline.queue.max_events = 1000;
        snap.libbeat.pipeline.events.total = 9;

        let view = DashboardView::from_snapshot(Some(&snap));
        assert_eq!(view.queue.percent, 5.0);
        assert_eq!(view.queue.text(), "50/1000 | █");
        assert!(view.queue.events.starts_with("Events: 9 total"));

        snap.libbeat.pipeline.queue.max_events = 0;
        let view = DashboardView::from_snapshot(Some(&snap));
        assert_eq!(view.queue.percent, 0.0);
        assert_eq!(view.queue.text(), "50/0 | ");
    }

    #[test]
    fn test_module_lines() {
        let mut snap = Snapshot::default();
        snap.filebeat.modules.list = vec![
            ModuleInfo {
                name: "nginx".to_string(),
                enabled: true,
                errors: 0,
            },
            ModuleInfo {
                name: "mysql".to_string(),
                enabled: false,
                errors: 4,
            },
        ];

        let view = DashboardView::from_snapshot(Some(&snap));
        assert_eq!(view.modules.len(), 2);
        assert_eq!(view.modules[0].text, "✓ nginx (0 errors)");
        assert_eq!(view.modules[0].style, Some(RowStyleClass::Active));
        assert_eq!(view.modules[1].text, "✗ mysql (4 errors)");
        assert_eq!(view.modules[1].style, Some(RowStyleClass::Critical));
    }

    #[test]
    fn test_snapshot_without_modules_clears_placeholder() {
        let view = DashboardView::from_snapshot(Some(&Snapshot::default()));
        assert!(view.modules.is_empty());
    }

    #[test]
    fn test_to_text_contains_every_panel() {
        let mut snap = Snapshot::default();
        snap.filebeat.harvester.running = 2;
        snap.filebeat.inputs = vec![Input {
            kind: "udp".to_string(),
            ..Input::default()
        }];

        let text = DashboardView::from_snapshot(Some(&snap)).to_text();
        assert!(text.contains("CPU Total:"));
        assert!(text.contains("Active: 2 | Open Files: 0"));
        assert!(text.contains("Type | Active | Events | Throughput | Files"));
        assert!(text.contains("udp | false | 0 | 0.00 | 0"));
    }
}

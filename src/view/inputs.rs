//! Inputs table, inputs list and per-input detail view models.

use crate::fmt::{format_bytes, format_histogram};
use crate::storage::Snapshot;
use crate::storage::model::Input;

use super::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

/// Label of the trailing "go back" entry in the inputs list.
pub const BACK_ITEM: &str = "Back";

const INPUT_HEADERS: [&str; 5] = ["Type", "Active", "Events", "Throughput", "Files"];
const INPUT_WIDTHS: [u16; 5] = [14, 8, 12, 14, 8];

/// Builds the inputs table: one row per input, in list order.
pub fn inputs_table(snapshot: Option<&Snapshot>) -> TableViewModel {
    let rows = snapshot
        .map(|snap| snap.inputs().iter().map(input_row).collect())
        .unwrap_or_default();

    TableViewModel {
        title: "Inputs".to_string(),
        headers: INPUT_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: INPUT_WIDTHS.to_vec(),
        rows,
    }
}

fn input_row(input: &Input) -> ViewRow {
    let active_style = if input.active {
        RowStyleClass::Active
    } else {
        RowStyleClass::Dimmed
    };
    ViewRow {
        cells: vec![
            ViewCell::plain(input.kind.clone()),
            ViewCell::styled(input.active.to_string(), active_style),
            ViewCell::plain(input.events.to_string()),
            ViewCell::plain(format!("{:.2}", input.throughput.bytes)),
            ViewCell::plain(input.files.to_string()),
        ],
        style: RowStyleClass::Normal,
    }
}

/// Entries of the inputs selection list: `"{type} ({device})"` per input,
/// then [`BACK_ITEM`].
pub fn input_list_items(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .inputs()
        .iter()
        .map(|input| format!("{} ({})", input.kind, input.device))
        .chain(std::iter::once(BACK_ITEM.to_string()))
        .collect()
}

/// One line of the input detail panel.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailLine {
    Field { label: &'static str, value: String },
    Section(&'static str),
    Text(String),
    Blank,
}

/// Detail panel for a single input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDetail {
    pub title: String,
    pub lines: Vec<DetailLine>,
}

impl InputDetail {
    pub fn new(input: &Input) -> Self {
        let field = |label, value: String| DetailLine::Field { label, value };

        let mut lines = vec![
            field("Type:", input.kind.clone()),
            field("Device:", input.device.clone()),
            field("Packets:", input.packets.to_string()),
            field("Bytes:", format_bytes(input.bytes)),
            field("Events:", input.events.to_string()),
            field("Active:", input.active.to_string()),
            DetailLine::Blank,
            DetailLine::Section("Histograms:"),
            DetailLine::Text("Arrival Period:".to_string()),
        ];
        lines.extend(
            format_histogram(&input.arrival_period.histogram)
                .into_iter()
                .map(DetailLine::Text),
        );
        lines.push(DetailLine::Blank);
        lines.push(DetailLine::Text("Processing Time:".to_string()));
        lines.extend(
            format_histogram(&input.processing_time.histogram)
                .into_iter()
                .map(DetailLine::Text),
        );

        Self {
            title: format!(" Metrics: {} ", input.id),
            lines,
        }
    }

    /// Flattened text of every line, for plain output and tests.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| match line {
                DetailLine::Field { label, value } => format!("{} {}", label, value),
                DetailLine::Section(s) => s.to_string(),
                DetailLine::Text(t) => t.clone(),
                DetailLine::Blank => String::new(),
            })
            .collect()
    }
}

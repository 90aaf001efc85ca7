//! Stats snapshot as reported by the agent's `/stats` endpoint.
//!
//! The structure mirrors the JSON layout one struct per nesting level, so a
//! field path such as `beat.cpu.total.time.ms` reads as
//! `snapshot.beat.cpu.total.time.ms`. Unknown fields are ignored; missing
//! or `null` ones are zero-filled. Every level must be a JSON object.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::input::Input;

/// One fetched sample.
///
/// `timestamp` is not part of the payload; the poller stamps it with the
/// local time at fetch.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct Snapshot {
    #[serde(skip)]
    pub timestamp: DateTime<Local>,
    pub beat: BeatInfo,
    pub libbeat: LibbeatInfo,
    pub filebeat: FilebeatInfo,
    pub system: SystemInfo,
}

impl Snapshot {
    /// Process uptime in milliseconds.
    pub fn uptime_ms(&self) -> u64 {
        self.beat.info.uptime.ms
    }

    pub fn inputs(&self) -> &[Input] {
        &self.filebeat.inputs
    }

    pub fn modules(&self) -> &[ModuleInfo] {
        &self.filebeat.modules.list
    }
}

// ============================================================
// beat.*
// ============================================================

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct BeatInfo {
    pub cpu: CpuInfo,
    pub memstats: MemStats,
    pub info: ProcessInfo,
}

/// CPU usage of the agent process.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct CpuInfo {
    pub system: CpuTime,
    pub user: CpuTime,
    pub total: CpuTotal,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct CpuTime {
    pub ticks: u64,
    pub time: Millis,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct CpuTotal {
    pub ticks: u64,
    pub time: Millis,
    pub value: u64,
}

/// A `{ "ms": N }` object, used for both CPU time and uptime.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, remote = "Self")]
pub struct Millis {
    pub ms: u64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct MemStats {
    pub memory_alloc: u64,
    pub rss: u64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct ProcessInfo {
    pub uptime: Millis,
}

// ============================================================
// libbeat.*
// ============================================================

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct LibbeatInfo {
    pub pipeline: PipelineInfo,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct PipelineInfo {
    pub queue: QueueInfo,
    pub events: PipelineEvents,
}

/// Pipeline queue occupancy.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct QueueInfo {
    pub filled: QueueFilled,
    pub max_events: u64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct QueueFilled {
    pub events: u64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct PipelineEvents {
    pub total: u64,
    pub dropped: u64,
    pub failed: u64,
    pub filtered: u64,
}

// ============================================================
// filebeat.*
// ============================================================

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct FilebeatInfo {
    pub harvester: HarvesterInfo,
    /// Normally absent from `/stats`; filled from `/inputs`.
    pub inputs: Vec<Input>,
    pub modules: ModuleList,
}

/// Harvester counters.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct HarvesterInfo {
    pub running: u64,
    pub open_files: u64,
    pub closed: u64,
    pub started: u64,
    #[serde(rename = "skipped")]
    pub terminated: u64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct ModuleList {
    pub list: Vec<ModuleInfo>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct ModuleInfo {
    pub name: String,
    pub enabled: bool,
    pub errors: i64,
}

// ============================================================
// system.*
// ============================================================

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct SystemInfo {
    pub load: LoadInfo,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct LoadInfo {
    pub norm: LoadAverages,
}

/// Load averages normalized by CPU count.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct LoadAverages {
    #[serde(rename = "1")]
    pub load1: f64,
    #[serde(rename = "5")]
    pub load5: f64,
    #[serde(rename = "15")]
    pub load15: f64,
}

json_object!(
    Snapshot,
    BeatInfo,
    CpuInfo,
    CpuTime,
    CpuTotal,
    Millis,
    MemStats,
    ProcessInfo,
    LibbeatInfo,
    PipelineInfo,
    QueueInfo,
    QueueFilled,
    PipelineEvents,
    FilebeatInfo,
    HarvesterInfo,
    ModuleList,
    ModuleInfo,
    SystemInfo,
    LoadInfo,
    LoadAverages,
);

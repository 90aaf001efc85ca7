//! Pre-built agent scenarios.
//!
//! Counters grow with `cycle` so a demo session looks alive.

use serde_json::json;

use super::MockSource;

impl MockSource {
    /// A healthy agent with two inputs and three modules, one disabled.
    pub fn typical_agent() -> Self {
        Self {
            synthetic: true,
            ..Self::default()
        }
    }
}

pub(super) fn agent_stats(cycle: u64) -> String {
    let uptime_ms = 3_600_000 + cycle * 5_000;
    let total_ms = uptime_ms / 40 + (cycle % 7) * 300;
    json!({
        "beat": {
            "cpu": {
                "system": {"ticks": total_ms / 30, "time": {"ms": total_ms / 3}},
                "user": {"ticks": total_ms / 15, "time": {"ms": total_ms * 2 / 3}},
                "total": {"ticks": total_ms / 10, "time": {"ms": total_ms}, "value": total_ms}
            },
            "memstats": {"memory_alloc": 18_874_368 + cycle * 4096, "rss": 73_400_320 + cycle * 8192},
            "info": {"uptime": {"ms": uptime_ms}}
        },
        "libbeat": {
            "pipeline": {
                "queue": {"filled": {"events": (cycle * 137) % 4096}, "max_events": 4096},
                "events": {
                    "total": cycle * 1_250,
                    "dropped": cycle / 10,
                    "failed": cycle / 25,
                    "filtered": cycle * 12
                }
            }
        },
        "filebeat": {
            "harvester": {
                "running": 4,
                "open_files": 4 + cycle % 3,
                "closed": cycle / 4,
                "started": 4 + cycle / 4,
                "skipped": 0
            },
            "modules": {"list": [
                {"name": "system", "enabled": true, "errors": 0},
                {"name": "nginx", "enabled": true, "errors": cycle / 20},
                {"name": "mysql", "enabled": false, "errors": 0}
            ]}
        },
        "system": {"load": {"norm": {"1": 0.12, "5": 0.18, "15": 0.21}}}
    })
    .to_string()
}

pub(super) fn agent_inputs(cycle: u64) -> String {
    json!([
        {
            "id": "filestream-syslog",
            "input": "filestream",
            "device": "/var/log/syslog",
            "packets": 0,
            "bytes": 1_048_576 + cycle * 65_536,
            "events": cycle * 900,
            "active": true,
            "files": 2,
            "arrival_period": {"histogram": {"count": cycle, "mean": 1_100_000.0, "p99": 4_500_000.0}},
            "processing_time": {"histogram": {"count": cycle, "mean": 23_000.0, "p99": 91_000.0}},
            "throughput": {"bytes": 13_107.2, "events": 180.0}
        },
        {
            "id": "udp-514",
            "input": "udp",
            "device": "0.0.0.0:514",
            "packets": cycle * 70,
            "bytes": cycle * 22_400,
            "events": cycle * 70,
            "active": cycle % 5 != 0,
            "files": 0,
            "arrival_period": {"histogram": {"count": cycle * 70, "mean": 71_000.0}},
            "processing_time": {"histogram": {"count": cycle * 70, "mean": 8_000.0}},
            "throughput": {"bytes": 4_480.0, "events": 14.0}
        }
    ])
    .to_string()
}

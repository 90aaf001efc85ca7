//! Per-input records from the agent's `/inputs` endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One configured data source.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct Input {
    pub id: String,
    #[serde(rename = "input")]
    pub kind: String,
    pub device: String,
    pub packets: u64,
    pub bytes: u64,
    pub events: u64,
    pub active: bool,
    pub files: u64,
    pub arrival_period: HistogramMetric,
    pub processing_time: HistogramMetric,
    pub throughput: Throughput,
}

/// Events and bytes per second.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct Throughput {
    pub bytes: f64,
    pub events: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, remote = "Self")]
pub struct HistogramMetric {
    pub histogram: Histogram,
}

json_object!(Input, Throughput, HistogramMetric);

/// Bucket label to value mapping.
///
/// Values are kept as raw JSON; only numeric buckets are displayed.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Histogram(BTreeMap<String, Value>);

impl Histogram {
    /// Iterates over buckets whose value is a number.
    pub fn numeric_buckets(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0
            .iter()
            .filter_map(|(label, value)| value.as_f64().map(|v| (label.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_inputs_array() {
        let json = r#"[
            {
                "id": "a1", "input": "udp", "device": "0.0.0.0:514",
                "packets": 10, "bytes": 2048, "events": 9, "active": true, "files": 0,
                "arrival_period": {"histogram": {"p50": 1.5, "count": 3, "label": "x"}},
                "processing_time": {"histogram": {}},
                "throughput": {"bytes": 12.345, "events": 1.5},
                "extra": {"ignored": true}
            },
            {"id": "b2", "input": "filestream"}
        ]"#;

        let inputs: Vec<Input> = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.len(), 2);

        let udp = &inputs[0];
        assert_eq!(udp.kind, "udp");
        assert_eq!(udp.device, "0.0.0.0:514");
        assert_eq!(udp.bytes, 2048);
        assert!(udp.active);
        assert_eq!(udp.throughput.bytes, 12.345);
        assert!(udp.processing_time.histogram.is_empty());

        let buckets: Vec<_> = udp.arrival_period.histogram.numeric_buckets().collect();
        assert_eq!(buckets, vec![("count", 3.0), ("p50", 1.5)]);

        let fs = &inputs[1];
        assert_eq!(fs.kind, "filestream");
        assert_eq!(fs.events, 0);
        assert!(!fs.active);
        assert_eq!(fs.throughput, Throughput::default());
    }

    #[test]
    fn test_decode_inputs_rejects_object() {
        assert!(serde_json::from_str::<Vec<Input>>(r#"{"id": "a"}"#).is_err());
    }

    #[test]
    fn test_decode_inputs_rejects_positional_entries() {
        assert!(serde_json::from_str::<Vec<Input>>(r#"[["a", "udp", "0.0.0.0:514"]]"#).is_err());
        assert!(serde_json::from_str::<Vec<Input>>(r#"[{"id": "a", "throughput": [1.0, 2.0]}]"#).is_err());
    }

    #[test]
    fn test_decode_inputs_null_fields() {
        let json = r#"[
            {"id": "a", "input": "udp", "device": null, "events": null,
             "arrival_period": {"histogram": null}, "throughput": null},
            null
        ]"#;

        let inputs: Vec<Input> = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].id, "a");
        assert_eq!(inputs[0].device, "");
        assert_eq!(inputs[0].events, 0);
        assert!(inputs[0].arrival_period.histogram.is_empty());
        assert_eq!(inputs[0].throughput, Throughput::default());
        assert_eq!(inputs[1], Input::default());
    }
}

//! Data model for agent stats.

/// Implements `Serialize` and `Deserialize` for payload structs derived with
/// `#[serde(remote = "Self")]`.
///
/// A struct decodes only from a JSON object. An explicit `null`, either for
/// the whole struct or for one of its fields, yields the default value.
macro_rules! json_object {
    ($($ty:ident),+ $(,)?) => {$(
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let fields = <Option<serde_json::Map<String, serde_json::Value>> as serde::Deserialize>::deserialize(deserializer)?;
                let Some(mut fields) = fields else {
                    return Ok(Self::default());
                };
                fields.retain(|_, value| !value.is_null());
                $ty::deserialize(serde_json::Value::Object(fields)).map_err(serde::de::Error::custom)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                $ty::serialize(self, serializer)
            }
        }
    )+};
}

mod input;
mod snapshot;

pub use input::{Histogram, HistogramMetric, Input, Throughput};
pub use snapshot::{
    BeatInfo, CpuInfo, CpuTime, CpuTotal, FilebeatInfo, HarvesterInfo, LibbeatInfo, LoadAverages,
    LoadInfo, MemStats, Millis, ModuleInfo, ModuleList, PipelineEvents, PipelineInfo, ProcessInfo,
    QueueFilled, QueueInfo, Snapshot, SystemInfo,
};

// Copyright 2025 Detbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark results record types.
//!
//! The record is produced by the external benchmark harness and consumed
//! read-only here. Absent fields never fail deserialization: numeric fields
//! default to zero and status-like strings to `"N/A"`, so the formatting
//! code downstream never deals with missing values.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status string the harness assigns to fully deterministic scripts.
pub const STATUS_DETERMINISTIC: &str = "DETERMINISTIC";

fn not_available() -> String {
    "N/A".to_string()
}

/// The full results record for one benchmark run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsRecord {
    /// Metadata about the benchmark run itself.
    #[serde(default)]
    pub benchmark_info: BenchmarkInfo,
    /// Aggregate statistics across all scripts.
    #[serde(default)]
    pub overall: Overall,
    /// Per-script results, in the order the harness recorded them.
    #[serde(default)]
    pub scripts: ScriptResults,
}

/// Metadata describing the benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkInfo {
    /// When the harness executed the run.
    #[serde(default = "not_available")]
    pub timestamp: String,
    /// How many times each script was executed.
    #[serde(default)]
    pub iterations: u64,
}

impl Default for BenchmarkInfo {
    fn default() -> Self {
        Self {
            timestamp: not_available(),
            iterations: 0,
        }
    }
}

/// Aggregate statistics across all scripts in the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overall {
    /// Total number of scripts tested.
    #[serde(default)]
    pub total_scripts: u64,
    /// Number of scripts the harness judged fully deterministic.
    #[serde(default)]
    pub deterministic_scripts: u64,
    /// Overall determinism score as a percentage.
    #[serde(default)]
    pub overall_score: f64,
}

/// Determinism and timing statistics for a single script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptResult {
    /// Harness-assigned status, `"DETERMINISTIC"` for a clean pass.
    #[serde(default = "not_available")]
    pub status: String,
    /// Percentage of runs whose output matched the first run.
    #[serde(default)]
    pub determinism_score: f64,
    /// Number of times the script was executed.
    #[serde(default)]
    pub iterations: u64,
    /// Number of runs matching the first run's output.
    #[serde(default)]
    pub match_count: u64,
    /// Number of distinct outputs across all runs.
    #[serde(default)]
    pub unique_outputs: u64,
    /// Average execution time in seconds.
    #[serde(default)]
    pub avg_time_seconds: f64,
}

impl Default for ScriptResult {
    fn default() -> Self {
        Self {
            status: not_available(),
            determinism_score: 0.0,
            iterations: 0,
            match_count: 0,
            unique_outputs: 0,
            avg_time_seconds: 0.0,
        }
    }
}

impl ScriptResult {
    /// Whether the harness judged this script fully deterministic.
    ///
    /// Pass/fail derives from the status string alone. The numeric score is
    /// displayed alongside but never consulted; the two may disagree in the
    /// input, and the renderer shows both without reconciling them.
    pub fn is_deterministic(&self) -> bool {
        self.status == STATUS_DETERMINISTIC
    }
}

/// Insertion-ordered mapping from script name to its result.
///
/// JSON object order is preserved on deserialization so every table and
/// chart lists scripts in the order the harness recorded them; nothing here
/// re-sorts.
#[derive(Debug, Clone, Default)]
pub struct ScriptResults(Vec<(String, ScriptResult)>);

impl ScriptResults {
    /// Number of scripts in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record contains no scripts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, result)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScriptResult)> {
        self.0.iter().map(|(name, result)| (name.as_str(), result))
    }
}

impl FromIterator<(String, ScriptResult)> for ScriptResults {
    fn from_iter<I: IntoIterator<Item = (String, ScriptResult)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ScriptResults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, result) in &self.0 {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScriptResults {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = ScriptResults;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of script name to script result")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, ScriptResult>()? {
                    entries.push(entry);
                }
                Ok(ScriptResults(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_deserializes() {
        let record: ResultsRecord = serde_json::from_str(
            r#"{
                "benchmark_info": {"timestamp": "2025-11-02T12:00:00", "iterations": 5},
                "overall": {"total_scripts": 2, "deterministic_scripts": 1, "overall_score": 50.0},
                "scripts": {
                    "hello.en": {
                        "status": "DETERMINISTIC",
                        "determinism_score": 100.0,
                        "iterations": 5,
                        "match_count": 5,
                        "unique_outputs": 1,
                        "avg_time_seconds": 0.123
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(record.benchmark_info.timestamp, "2025-11-02T12:00:00");
        assert_eq!(record.benchmark_info.iterations, 5);
        assert_eq!(record.overall.total_scripts, 2);
        assert_eq!(record.scripts.len(), 1);
        let (name, result) = record.scripts.iter().next().unwrap();
        assert_eq!(name, "hello.en");
        assert!(result.is_deterministic());
        assert_eq!(result.avg_time_seconds, 0.123);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let record: ResultsRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.benchmark_info.timestamp, "N/A");
        assert_eq!(record.benchmark_info.iterations, 0);
        assert_eq!(record.overall.total_scripts, 0);
        assert_eq!(record.overall.overall_score, 0.0);
        assert!(record.scripts.is_empty());
    }

    #[test]
    fn test_missing_script_fields_default() {
        let record: ResultsRecord =
            serde_json::from_str(r#"{"scripts": {"bare.en": {}}}"#).unwrap();
        let (_, result) = record.scripts.iter().next().unwrap();
        assert_eq!(result.status, "N/A");
        assert!(!result.is_deterministic());
        assert_eq!(result.determinism_score, 0.0);
        assert_eq!(result.avg_time_seconds, 0.0);
        assert_eq!(result.unique_outputs, 0);
    }

    #[test]
    fn test_scripts_preserve_record_order() {
        let record: ResultsRecord = serde_json::from_str(
            r#"{"scripts": {"zeta.en": {}, "alpha.en": {}, "mid.en": {}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = record.scripts.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta.en", "alpha.en", "mid.en"]);
    }

    #[test]
    fn test_serialization_preserves_order() {
        let record: ResultsRecord =
            serde_json::from_str(r#"{"scripts": {"b.en": {}, "a.en": {}}}"#).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let b_pos = json.find("b.en").unwrap();
        let a_pos = json.find("a.en").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_status_alone_governs_determinism() {
        let result = ScriptResult {
            status: "FLAKY".to_string(),
            determinism_score: 100.0,
            ..ScriptResult::default()
        };
        assert!(!result.is_deterministic());

        let result = ScriptResult {
            status: STATUS_DETERMINISTIC.to_string(),
            determinism_score: 0.0,
            ..ScriptResult::default()
        };
        assert!(result.is_deterministic());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(serde_json::from_str::<ResultsRecord>(r#"{"scripts": 5}"#).is_err());
        assert!(serde_json::from_str::<ResultsRecord>("[]").is_err());
    }
}

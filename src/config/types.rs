use serde::{Deserialize, Serialize};

use crate::graph::propagate::PropagationMode;
use crate::graph::transitions::UnknownSourcePolicy;

/// Column names shared by the sequence and index tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    #[serde(default = "default_group_column")]
    pub group: String,
    #[serde(default = "default_item_column")]
    pub item: String,
    #[serde(default = "default_index_column")]
    pub index: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            group: default_group_column(),
            item: default_item_column(),
            index: default_index_column(),
        }
    }
}

fn default_group_column() -> String { "group_id".to_string() }
fn default_item_column() -> String { "item_id".to_string() }
fn default_index_column() -> String { "index".to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationConfig {
    /// Number of propagation steps (`t_max`).
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default)]
    pub mode: PropagationMode,
    #[serde(default)]
    pub unknown_source: UnknownSourcePolicy,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            mode: PropagationMode::default(),
            unknown_source: UnknownSourcePolicy::default(),
        }
    }
}

const fn default_steps() -> usize { 10 }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rows shown in the console report; 0 shows every item.
    #[serde(default = "default_top")]
    pub top: usize,
    #[serde(default = "default_true")]
    pub show_trace: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: default_top(), show_trace: true }
    }
}

const fn default_top() -> usize { 20 }
const fn default_true() -> bool { true }

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub columns: ColumnConfig,
    #[serde(default)]
    pub propagation: PropagationConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names of the statistics the benchmark metrics are derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatNames {
    /// instructions per cycle
    pub ipc: String,
    /// conditional branches predicted incorrectly
    pub cond_incorrect: String,
    /// conditional branches predicted
    pub cond_predicted: String,
    /// branches mispredicted at commit
    pub branch_mispredicts: String,
    /// committed instructions
    pub num_insts: String,
}

impl Default for StatNames {
    fn default() -> Self {
        Self {
            ipc: "system.cpu.ipc".to_string(),
            cond_incorrect: "system.cpu.branchPred.condIncorrect".to_string(),
            cond_predicted: "system.cpu.branchPred.condPredicted".to_string(),
            branch_mispredicts: "system.cpu.commit.branchMispredicts".to_string(),
            num_insts: "system.cpu.thread_0.numInsts".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub stats: StatNames,
}

impl ReportConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<ReportConfig> {
        Ok(serde_json::from_slice(&std::fs::read(path)?)?)
    }
}

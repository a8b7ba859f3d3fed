use crate::{StatNames, StatsError, StatsTable};
use serde::Serialize;
use std::fmt;

/// Benchmark metrics derived from a stats table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// instructions per cycle
    pub ipc: f64,
    /// prediction accuracy of conditional branches, in [0, 1]
    pub accuracy: f64,
    /// branch mispredictions per kilo instructions
    pub mpki: f64,
}

fn divide(table: &StatsTable, numerator: &str, denominator: &str) -> Result<f64, StatsError> {
    let num = table.get_f64(numerator)?;
    let den = table.get_f64(denominator)?;
    if den == 0.0 {
        return Err(StatsError::DivisionByZero {
            numerator: numerator.to_string(),
            denominator: denominator.to_string(),
        });
    }
    Ok(num / den)
}

impl Metrics {
    pub fn compute(table: &StatsTable, names: &StatNames) -> Result<Metrics, StatsError> {
        let ipc = table.get_f64(&names.ipc)?;
        let accuracy = 1.0 - divide(table, &names.cond_incorrect, &names.cond_predicted)?;
        let mpki = divide(table, &names.branch_mispredicts, &names.num_insts)? * 1000.0;
        Ok(Metrics {
            ipc,
            accuracy,
            mpki,
        })
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IPC={:.4}", self.ipc)?;
        writeln!(f, "acc={:.4}", self.accuracy)?;
        write!(f, "MPKI={:.4}", self.mpki)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Metrics, StatNames, StatsError, parse_stats};

    const REPORT: &str = "(header line)
system.cpu.ipc                    1.2345                    # avg
system.cpu.branchPred.condIncorrect   100
system.cpu.branchPred.condPredicted  1000
system.cpu.commit.branchMispredicts   90
system.cpu.thread_0.numInsts          500000
(footer line)
";

    #[test]
    fn test_end_to_end() {
        let table = parse_stats(REPORT);
        let metrics = Metrics::compute(&table, &StatNames::default()).unwrap();
        assert_eq!(metrics.to_string(), "IPC=1.2345\nacc=0.9000\nMPKI=0.1800");
    }

    #[test]
    fn test_missing_name() {
        let table = parse_stats(&REPORT.replace("system.cpu.commit.branchMispredicts", "other"));
        assert!(matches!(
            Metrics::compute(&table, &StatNames::default()),
            Err(StatsError::Missing(name)) if name == "system.cpu.commit.branchMispredicts"
        ));
    }

    #[test]
    fn test_division_by_zero() {
        let table = parse_stats(&REPORT.replace("500000", "0"));
        assert!(matches!(
            Metrics::compute(&table, &StatNames::default()),
            Err(StatsError::DivisionByZero { .. })
        ));

        let table = parse_stats(&REPORT.replace("  1000", "  0.0"));
        assert!(matches!(
            Metrics::compute(&table, &StatNames::default()),
            Err(StatsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_nan_ipc() {
        let table = parse_stats(&REPORT.replace("1.2345", "nan"));
        assert!(matches!(
            Metrics::compute(&table, &StatNames::default()),
            Err(StatsError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_custom_names() {
        let report = "header\nsystem.switch_cpus.ipc 2\na 1\nb 4\nc 500\nd 1000\nfooter\n";
        let names = StatNames {
            ipc: "system.switch_cpus.ipc".to_string(),
            cond_incorrect: "a".to_string(),
            cond_predicted: "b".to_string(),
            branch_mispredicts: "c".to_string(),
            num_insts: "d".to_string(),
        };
        let metrics = Metrics::compute(&parse_stats(report), &names).unwrap();
        assert_eq!(metrics.ipc, 2.0);
        assert_eq!(metrics.accuracy, 0.75);
        assert_eq!(metrics.mpki, 500.0);
    }
}

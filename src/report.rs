use std::fmt::{Debug, Display};

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::algorithm::ShortestPathResult;
use crate::graph::NodeId;
use crate::Result;

/// Serializable summary of one source-to-target query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    pub algorithm: String,
    pub source: String,
    pub target: String,
    /// `None` when the target is unreachable
    pub cost: Option<f64>,
    /// Empty when the target is unreachable
    #[serde(default)]
    pub path: Vec<String>,
    /// Number of nodes whose cost was finalized
    pub processed: usize,
}

impl PathReport {
    /// Summarizes `result` for its own target
    ///
    /// The path is only walked when the target has a finite cost; if the
    /// parent table cannot back that cost with a path, the walk's error is
    /// returned instead of a report with a cost and no route.
    pub fn new<N, W>(algorithm: &str, result: &ShortestPathResult<N, W>) -> Result<Self>
    where
        N: NodeId + Display,
        W: Float + Debug,
    {
        let cost = result.cost(&result.target);
        let path = match cost {
            Some(_) => result.path()?.iter().map(ToString::to_string).collect(),
            None => Vec::new(),
        };

        Ok(PathReport {
            algorithm: algorithm.to_string(),
            source: result.source.to_string(),
            target: result.target.to_string(),
            cost: cost.and_then(|cost| cost.to_f64()),
            path,
            processed: result.processed.len(),
        })
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}

impl Display for PathReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cost {
            Some(cost) => {
                writeln!(f, "cost to {}: {}", self.target, cost)?;
                write!(
                    f,
                    "shortest path from {} to {}: {}",
                    self.source,
                    self.target,
                    self.path.join(" -> ")
                )
            }
            None => write!(f, "no path from {} to {}", self.source, self.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{CostScan, ShortestPathAlgorithm};
    use crate::graph::samples;
    use crate::Error;

    #[test]
    fn test_report_for_reachable_target() {
        let graph = samples::opening_graph();
        let result = CostScan::new()
            .compute_shortest_paths(&graph, &"start".to_string(), &"fin".to_string())
            .unwrap();
        let report = PathReport::new("CostScan", &result).unwrap();

        assert_eq!(report.cost, Some(6.0));
        assert_eq!(report.path, vec!["start", "b", "a", "fin"]);
        assert_eq!(report.processed, 4);
        assert_eq!(
            report.to_string(),
            "cost to fin: 6\nshortest path from start to fin: start -> b -> a -> fin"
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cost"], 6.0);
        assert_eq!(json["path"][1], "b");
    }

    #[test]
    fn test_report_for_unreachable_target() {
        let graph = samples::cycle_graph();
        let result = CostScan::new()
            .compute_shortest_paths(&graph, &"fin".to_string(), &"start".to_string())
            .unwrap();
        let report = PathReport::new("CostScan", &result).unwrap();

        assert!(!report.is_reachable());
        assert!(report.path.is_empty());
        assert_eq!(report.to_string(), "no path from fin to start");
        assert!(serde_json::to_value(&report).unwrap()["cost"].is_null());
    }

    #[test]
    fn test_report_refuses_cost_without_path() {
        let graph = samples::opening_graph();
        let mut result = CostScan::new()
            .compute_shortest_paths(&graph, &"start".to_string(), &"fin".to_string())
            .unwrap();
        // Finite cost left behind with its parent pointer wiped
        result.parents.set_none("fin".to_string());

        let err = PathReport::new("CostScan", &result).unwrap_err();
        assert!(matches!(err, Error::UnreachableTarget { .. }));
    }
}

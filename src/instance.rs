//! Problem instances as plain data.
//!
//! An [`Instance`] is the serializable form of a [`CostModel`] with string
//! labels. With the `serde` feature it reads from and writes to JSON as
//! `{"locations": [...], "costs": [[...], ...]}`.

use crate::cost::CostModel;
use crate::error::Result;

/// Location labels and their cost matrix, unvalidated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    /// Location labels; index `i` labels row and column `i` of `costs`.
    pub locations: Vec<String>,
    /// Row-major cost matrix, `costs[from][to]`.
    pub costs: Vec<Vec<f64>>,
}

impl Instance {
    /// Seven cities `A`–`G` with a small symmetric distance table.
    pub fn sample() -> Self {
        let locations = ["A", "B", "C", "D", "E", "F", "G"]
            .into_iter()
            .map(String::from)
            .collect();
        let costs = [
            [0, 2, 3, 1, 4, 7, 5],
            [2, 0, 6, 3, 1, 2, 3],
            [3, 6, 0, 2, 3, 5, 2],
            [1, 3, 2, 0, 2, 4, 1],
            [4, 1, 3, 2, 0, 3, 2],
            [7, 2, 5, 4, 3, 0, 6],
            [5, 3, 2, 1, 2, 6, 0],
        ]
        .iter()
        .map(|row| row.iter().map(|&c| f64::from(c)).collect())
        .collect();
        Self { locations, costs }
    }

    /// Validates the instance into a [`CostModel`].
    pub fn into_cost_model(self) -> Result<CostModel<String>> {
        CostModel::new(self.locations, self.costs)
    }
}

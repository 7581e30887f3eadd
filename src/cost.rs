//! Location set and travel-cost matrix.
//!
//! [`CostModel`] is built once per problem instance and shared read-only by
//! every component of the search. Engine-facing queries work on location
//! indices (`0..len()`); the label-based queries are for callers.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An immutable set of locations with an N×N cost matrix.
///
/// The matrix must be square, match the number of locations, have a zero
/// diagonal and contain only finite, non-negative entries. Symmetry is not
/// required.
///
/// # Examples
///
/// ```
/// use tsp_evo::CostModel;
///
/// let model = CostModel::new(
///     vec!['A', 'B', 'C'],
///     vec![
///         vec![0.0, 1.0, 4.0],
///         vec![1.0, 0.0, 2.0],
///         vec![4.0, 2.0, 0.0],
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(model.cost(&'A', &'C').unwrap(), 4.0);
/// assert_eq!(model.tour_cost(&['A', 'B', 'C']).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct CostModel<L> {
    locations: Vec<L>,
    index: HashMap<L, usize>,
    // Row-major, len() * len() entries.
    costs: Vec<f64>,
}

impl<L> CostModel<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Builds a cost model, validating the matrix against the location list.
    pub fn new(locations: Vec<L>, matrix: Vec<Vec<f64>>) -> Result<Self> {
        let n = locations.len();
        if n == 0 {
            return Err(Error::InvalidCostMatrix(
                "at least one location is required".into(),
            ));
        }
        if matrix.len() != n {
            return Err(Error::InvalidCostMatrix(format!(
                "expected {n} rows, got {}",
                matrix.len()
            )));
        }

        let mut index = HashMap::with_capacity(n);
        for (i, loc) in locations.iter().enumerate() {
            if index.insert(loc.clone(), i).is_some() {
                return Err(Error::DuplicateLocation(format!("{loc:?}")));
            }
        }

        let mut costs = Vec::with_capacity(n * n);
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidCostMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &c) in row.iter().enumerate() {
                if !c.is_finite() || c < 0.0 {
                    return Err(Error::InvalidCostMatrix(format!(
                        "entry ({i}, {j}) = {c} is not a finite non-negative cost"
                    )));
                }
                if i == j && c != 0.0 {
                    return Err(Error::InvalidCostMatrix(format!(
                        "diagonal entry ({i}, {i}) = {c} must be zero"
                    )));
                }
                costs.push(c);
            }
        }

        Ok(Self {
            locations,
            index,
            costs,
        })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always `false` for a successfully built model.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The locations in their index order.
    pub fn locations(&self) -> &[L] {
        &self.locations
    }

    /// Index of a location label.
    pub fn index_of(&self, location: &L) -> Result<usize> {
        self.index
            .get(location)
            .copied()
            .ok_or_else(|| Error::InvalidLocation(format!("{location:?}")))
    }

    /// Cost of travelling from `a` to `b`.
    pub fn cost(&self, a: &L, b: &L) -> Result<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.edge(i, j))
    }

    /// Open-path cost of a labelled tour: the sum of its `len - 1`
    /// consecutive edges.
    pub fn tour_cost(&self, tour: &[L]) -> Result<f64> {
        if tour.is_empty() {
            return Err(Error::InvalidTour("tour is empty".into()));
        }
        let indices = tour
            .iter()
            .map(|loc| {
                self.index
                    .get(loc)
                    .copied()
                    .ok_or_else(|| Error::InvalidTour(format!("unknown location {loc:?}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.path_cost(&indices))
    }

    /// Open-path cost of a tour given as location indices.
    pub fn tour_cost_indices(&self, tour: &[usize]) -> Result<f64> {
        if tour.is_empty() {
            return Err(Error::InvalidTour("tour is empty".into()));
        }
        let n = self.len();
        if let Some(&bad) = tour.iter().find(|&&i| i >= n) {
            return Err(Error::InvalidTour(format!(
                "location index {bad} out of range for {n} locations"
            )));
        }
        Ok(self.path_cost(tour))
    }

    /// Maps location indices back to their labels.
    ///
    /// Indices outside `0..len()` are skipped.
    pub fn labels(&self, tour: &[usize]) -> Vec<L> {
        tour.iter()
            .filter_map(|&i| self.locations.get(i).cloned())
            .collect()
    }

    fn edge(&self, i: usize, j: usize) -> f64 {
        self.costs[i * self.locations.len() + j]
    }

    fn path_cost(&self, tour: &[usize]) -> f64 {
        tour.windows(2).map(|w| self.edge(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line4() -> CostModel<&'static str> {
        CostModel::new(
            vec!["A", "B", "C", "D"],
            vec![
                vec![0.0, 1.0, 2.0, 3.0],
                vec![1.0, 0.0, 1.0, 2.0],
                vec![2.0, 1.0, 0.0, 1.0],
                vec![3.0, 2.0, 1.0, 0.0],
            ],
        )
        .expect("valid matrix")
    }

    #[test]
    fn test_point_cost() {
        let m = line4();
        assert_eq!(m.cost(&"A", &"D").unwrap(), 3.0);
        assert_eq!(m.cost(&"C", &"B").unwrap(), 1.0);
        assert_eq!(m.cost(&"B", &"B").unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_location() {
        let m = line4();
        assert_eq!(
            m.cost(&"A", &"Z"),
            Err(Error::InvalidLocation("\"Z\"".into()))
        );
    }

    #[test]
    fn test_tour_cost_is_open_path() {
        let m = line4();
        // A-B-C-D, no closing edge D-A
        assert_eq!(m.tour_cost(&["A", "B", "C", "D"]).unwrap(), 3.0);
        assert_eq!(m.tour_cost(&["B", "A", "C", "D"]).unwrap(), 4.0);
        assert_eq!(m.tour_cost(&["C"]).unwrap(), 0.0);
    }

    #[test]
    fn test_tour_cost_rejects_empty_and_unknown() {
        let m = line4();
        assert!(matches!(m.tour_cost(&[]), Err(Error::InvalidTour(_))));
        assert!(matches!(
            m.tour_cost(&["A", "X"]),
            Err(Error::InvalidTour(_))
        ));
    }

    #[test]
    fn test_tour_cost_indices() {
        let m = line4();
        assert_eq!(m.tour_cost_indices(&[3, 2, 1, 0]).unwrap(), 3.0);
        assert!(matches!(
            m.tour_cost_indices(&[0, 4]),
            Err(Error::InvalidTour(_))
        ));
        assert!(matches!(
            m.tour_cost_indices(&[]),
            Err(Error::InvalidTour(_))
        ));
    }

    #[test]
    fn test_asymmetric_matrix_allowed() {
        let m = CostModel::new(vec![0u8, 1], vec![vec![0.0, 1.0], vec![5.0, 0.0]]).unwrap();
        assert_eq!(m.tour_cost(&[0, 1]).unwrap(), 1.0);
        assert_eq!(m.tour_cost(&[1, 0]).unwrap(), 5.0);
    }

    #[test]
    fn test_rejects_malformed_matrices() {
        assert!(matches!(
            CostModel::<u8>::new(vec![], vec![]),
            Err(Error::InvalidCostMatrix(_))
        ));
        assert!(matches!(
            CostModel::new(vec![0u8, 1], vec![vec![0.0, 1.0]]),
            Err(Error::InvalidCostMatrix(_))
        ));
        assert!(matches!(
            CostModel::new(vec![0u8, 1], vec![vec![0.0, 1.0], vec![1.0]]),
            Err(Error::InvalidCostMatrix(_))
        ));
        assert!(matches!(
            CostModel::new(vec![0u8, 1], vec![vec![0.0, -1.0], vec![1.0, 0.0]]),
            Err(Error::InvalidCostMatrix(_))
        ));
        assert!(matches!(
            CostModel::new(vec![0u8, 1], vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]),
            Err(Error::InvalidCostMatrix(_))
        ));
        assert!(matches!(
            CostModel::new(vec![0u8, 1], vec![vec![2.0, 1.0], vec![1.0, 0.0]]),
            Err(Error::InvalidCostMatrix(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_locations() {
        let r = CostModel::new(vec!["A", "A"], vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert_eq!(r.unwrap_err(), Error::DuplicateLocation("\"A\"".into()));
    }

    #[test]
    fn test_labels_roundtrip() {
        let m = line4();
        assert_eq!(m.labels(&[2, 0, 3, 1]), vec!["C", "A", "D", "B"]);
        assert_eq!(m.index_of(&"D").unwrap(), 3);
    }
}

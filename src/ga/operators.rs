//! Permutation operators.
//!
//! These operate on `&[usize]` index vectors and know nothing about costs:
//! any permutation-encoded problem can use them.
//!
//! # Initialization
//!
//! - [`shuffle`]: Fisher–Yates, uniform over all permutations
//!
//! # Crossover Operators
//!
//! - [`ordered_crossover`]: prefix from parent1, remainder in parent2's order
//! - [`index_aligned_crossover`]: prefix from parent1, then `parent2[i]`
//!   position by position (may drop elements)
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: exchange two distinct random positions — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Knuth, *TAOCP* Vol. 2, §3.4.2 (Algorithm P)

use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// In-place Fisher–Yates shuffle.
///
/// For `i` from the last index down to 1, swaps element `i` with a uniformly
/// chosen element at index `<= i`.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Ordered crossover.
///
/// # Algorithm
///
/// 1. Pick a pivot `p` uniformly in `[0, L-1]`
/// 2. Copy `parent1[..=p]` into the child
/// 3. Scan `parent2` left to right, appending every element not yet placed
///
/// When both parents are permutations of the same set the child is a
/// full-length permutation of that set.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn ordered_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    if parent1.is_empty() {
        return Vec::new();
    }
    let pivot = rng.random_range(0..parent1.len());
    ordered_child(parent1, parent2, pivot)
}

fn ordered_child(parent1: &[usize], parent2: &[usize], pivot: usize) -> Vec<usize> {
    let mut placed = vec![false; value_bound(parent1, parent2)];
    let mut child = Vec::with_capacity(parent1.len());

    for &v in &parent1[..=pivot] {
        placed[v] = true;
        child.push(v);
    }
    for &v in parent2 {
        if !placed[v] {
            placed[v] = true;
            child.push(v);
        }
    }
    child
}

/// Index-aligned crossover.
///
/// Copies `parent1[..=p]` for a uniform pivot `p`, then for every later
/// position `i` appends `parent2[i]` unless it is already in the child.
/// Nothing is substituted for a skipped position, so the child can be
/// shorter than the parents. It never contains duplicates and is never
/// empty for a non-empty `parent1`.
///
/// Kept for compatibility runs; [`ordered_crossover`] is the operator that
/// preserves the permutation invariant.
pub fn index_aligned_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    if parent1.is_empty() {
        return Vec::new();
    }
    let pivot = rng.random_range(0..parent1.len());
    index_aligned_child(parent1, parent2, pivot)
}

fn index_aligned_child(parent1: &[usize], parent2: &[usize], pivot: usize) -> Vec<usize> {
    let mut placed = vec![false; value_bound(parent1, parent2)];
    let mut child = Vec::with_capacity(parent1.len());

    for &v in &parent1[..=pivot] {
        placed[v] = true;
        child.push(v);
    }
    // parent2 may be shorter than parent1 once truncated children circulate
    for &v in parent2.iter().take(parent1.len()).skip(pivot + 1) {
        if !placed[v] {
            placed[v] = true;
            child.push(v);
        }
    }
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// Slices shorter than 2 are left untouched.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    // draw from the n-1 other positions
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    perm.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Whether `perm` is a permutation of `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

fn value_bound(a: &[usize], b: &[usize]) -> usize {
    a.iter().chain(b).max().map_or(0, |&m| m + 1)
}

// ============================================================================
// Tests
// ============================================================================

// ============================================================
// Layer 4 — Stratified Train/Test Splitter
// ============================================================
// Splits row indices into a training partition and a held-out
// partition while keeping each class's share the same in both.
//
// Why stratify?
//   The dataset is imbalanced (far more negative than positive
//   diagnoses). A plain random 10% slice could end up with very
//   few positives, making the held-out accuracy meaningless.
//
// How it works:
//   1. Group row indices by label (BTreeMap so classes are
//      always visited in the same order)
//   2. Size the test partition: ceil(n * test_fraction) rows
//   3. Give each class its floor share of that, then hand the
//      leftover rows to the classes with the largest remainders
//   4. Shuffle each group with a seeded StdRng and move its
//      share from the front of the group into the test partition
//   5. Shuffle the train partition once more so classes are
//      interleaved for the optimiser
//
// Same labels + same seed → identical partitions, every run.
//
// Reference: rand crate documentation (SeedableRng, SliceRandom)

use std::collections::BTreeMap;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Row indices of the two partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test:  Vec<usize>,
}

/// Stratified split of `labels` into (train, test) index sets.
///
/// # Arguments
/// * `labels`        - Class label per row
/// * `test_fraction` - Share of all rows held out, e.g. 0.1 = 10%
/// * `seed`          - RNG seed; fixes partition membership
pub fn stratified_split(labels: &[usize], test_fraction: f64, seed: u64) -> SplitIndices {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut by_class: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (row, &label) in labels.iter().enumerate() {
        by_class.entry(label).or_default().push(row);
    }

    let fraction  = test_fraction.clamp(0.0, 1.0);
    let n_test    = ((labels.len() as f64) * fraction).ceil() as usize;
    let shares    = allocate(&by_class, n_test.min(labels.len()));
    let mut train = Vec::with_capacity(labels.len());
    let mut test  = Vec::with_capacity(n_test);

    for ((label, mut rows), n_test) in by_class.into_iter().zip(shares) {
        rows.shuffle(&mut rng);

        tracing::debug!(
            "Class {}: {} rows → {} train / {} test",
            label,
            rows.len(),
            rows.len() - n_test,
            n_test,
        );

        let rest = rows.split_off(n_test);
        test.extend(rows);
        train.extend(rest);
    }

    train.shuffle(&mut rng);
    test.sort_unstable();

    SplitIndices { train, test }
}

/// Split `n_test` held-out rows across classes in proportion to
/// their size. Floors first, then one extra row each to the
/// largest remainders (ties go to the earlier class).
fn allocate(by_class: &BTreeMap<usize, Vec<usize>>, n_test: usize) -> Vec<usize> {
    let total = by_class.values().map(Vec::len).sum::<usize>();
    if total == 0 {
        return vec![0; by_class.len()];
    }

    let exact: Vec<f64> = by_class
        .values()
        .map(|rows| rows.len() as f64 * n_test as f64 / total as f64)
        .collect();
    let mut shares: Vec<usize> = exact.iter().map(|x| x.floor() as usize).collect();

    let mut by_remainder: Vec<usize> = (0..exact.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let ra = exact[a] - shares[a] as f64;
        let rb = exact[b] - shares[b] as f64;
        rb.total_cmp(&ra)
    });

    let leftover = n_test.saturating_sub(shares.iter().sum());
    for &class in by_remainder.iter().take(leftover) {
        shares[class] += 1;
    }
    shares
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// 70 negatives followed by 30 positives
    fn imbalanced() -> Vec<usize> {
        let mut labels = vec![0; 70];
        labels.extend(vec![1; 30]);
        labels
    }

    fn count(labels: &[usize], rows: &[usize], class: usize) -> usize {
        rows.iter().filter(|&&r| labels[r] == class).count()
    }

    #[test]
    fn test_class_proportions_preserved() {
        let labels = imbalanced();
        let split  = stratified_split(&labels, 0.1, 1);
        assert_eq!(split.test.len(), 10);
        assert_eq!(count(&labels, &split.test, 0), 7);
        assert_eq!(count(&labels, &split.test, 1), 3);
        assert_eq!(count(&labels, &split.train, 0), 63);
        assert_eq!(count(&labels, &split.train, 1), 27);
    }

    #[test]
    fn test_uneven_classes_hold_out_ten_percent() {
        let mut labels = vec![0; 55];
        labels.extend(vec![1; 45]);
        let split = stratified_split(&labels, 0.1, 1);
        assert_eq!(split.test.len(), 10);
        assert_eq!(split.train.len(), 90);
        // 5.5 / 4.5: the tie on remainders goes to class 0
        assert_eq!(count(&labels, &split.test, 0), 6);
        assert_eq!(count(&labels, &split.test, 1), 4);
    }

    #[test]
    fn test_small_class_still_held_out() {
        let mut labels = vec![0; 8];
        labels.extend(vec![1; 4]);
        let split = stratified_split(&labels, 0.1, 1);
        // ceil(1.2) = 2 rows, one from each class
        assert_eq!(split.test.len(), 2);
        assert_eq!(count(&labels, &split.test, 0), 1);
        assert_eq!(count(&labels, &split.test, 1), 1);
    }

    #[test]
    fn test_held_out_size_rounds_up() {
        let mut labels = vec![0; 1389];
        labels.extend(vec![1; 760]);
        let split = stratified_split(&labels, 0.1, 1);
        assert_eq!(split.test.len(), 215);
        assert_eq!(split.train.len(), 1934);
    }

    #[test]
    fn test_all_rows_assigned_once() {
        let labels = imbalanced();
        let split  = stratified_split(&labels, 0.1, 1);
        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..labels.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_partitions() {
        let labels = imbalanced();
        assert_eq!(stratified_split(&labels, 0.1, 1), stratified_split(&labels, 0.1, 1));
    }

    #[test]
    fn test_different_seed_changes_membership() {
        let labels = imbalanced();
        let a = stratified_split(&labels, 0.1, 1);
        let b = stratified_split(&labels, 0.1, 2);
        assert_ne!(a.test, b.test);
    }

    #[test]
    fn test_empty_labels() {
        let split = stratified_split(&[], 0.1, 1);
        assert!(split.train.is_empty());
        assert!(split.test.is_empty());
    }
}

//! Seven-segment truth table with controlled column drift

use crate::error::{GeneratorError, Result};
use rand::Rng;

/// Segments on a seven-segment display
pub const NUM_RELEVANT: usize = 7;

/// Digit classes 0-9
pub const NUM_CLASSES: usize = 10;

/// Lit segments for each digit, indexed by class label
const SEGMENTS: [[u8; NUM_RELEVANT]; NUM_CLASSES] = [
    [1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 1, 1, 0],
    [1, 0, 1, 1, 0, 1, 1],
    [1, 0, 0, 1, 1, 1, 1],
    [0, 1, 0, 0, 1, 1, 1],
    [1, 1, 0, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1],
    [1, 1, 0, 0, 1, 1, 1],
];

/// Largest drift magnitude that can always be reached.
///
/// A swap must exchange two columns with different content, and the first
/// column of a pair is always relevant. Once irrelevant columns move into
/// relevant positions, pairs of two irrelevant columns stop counting, so the
/// bound is the pair count in the worst such arrangement.
pub fn max_effective_swaps(num_irrelevant: usize) -> usize {
    let pairs = NUM_RELEVANT * (NUM_RELEVANT - 1) / 2 + NUM_RELEVANT * num_irrelevant;
    let unchanged = (0..=NUM_RELEVANT.min(num_irrelevant))
        .map(|moved| moved * moved.saturating_sub(1) / 2 + moved * (num_irrelevant - moved))
        .max()
        .unwrap_or(0);
    pairs - unchanged
}

/// A single attribute slot in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Segment is on for this digit
    Lit,
    /// Segment is off for this digit
    Unlit,
    /// No information about the label; drawn per record
    Irrelevant,
}

impl Cell {
    fn from_bit(bit: u8) -> Self {
        if bit == 1 {
            Cell::Lit
        } else {
            Cell::Unlit
        }
    }

    /// Materialize the cell as an attribute value
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            Cell::Lit => true,
            Cell::Unlit => false,
            Cell::Irrelevant => rng.gen_bool(0.5),
        }
    }
}

/// Mapping from digit class to attribute template.
///
/// A table is an immutable value: drift produces a new table whose columns
/// are a permutation of the base layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitTable {
    rows: [Vec<Cell>; NUM_CLASSES],
    /// `permutation[i]` is the base column now found at column `i`
    permutation: Vec<usize>,
    swaps: Vec<(usize, usize)>,
}

impl DigitTable {
    /// Canonical table with `num_irrelevant` unknown columns appended
    pub fn base(num_irrelevant: usize) -> Self {
        let rows = std::array::from_fn(|label| {
            SEGMENTS[label]
                .iter()
                .map(|&bit| Cell::from_bit(bit))
                .chain(std::iter::repeat(Cell::Irrelevant).take(num_irrelevant))
                .collect()
        });

        Self {
            rows,
            permutation: (0..NUM_RELEVANT + num_irrelevant).collect(),
            swaps: Vec::new(),
        }
    }

    /// Base table with `magnitude` content-changing column swaps applied.
    ///
    /// Each swap pairs a relevant column with any other column holding
    /// different content; a pair is never swapped twice, so no swap undoes
    /// or repeats an earlier one.
    pub fn drifted<R: Rng + ?Sized>(
        num_irrelevant: usize,
        magnitude: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut table = Self::base(num_irrelevant);
        let columns = table.num_columns();

        if magnitude > max_effective_swaps(num_irrelevant) {
            return Err(GeneratorError::DegenerateDrift {
                magnitude,
                requested: max_effective_swaps(num_irrelevant) + 1,
                columns,
            });
        }

        while table.swaps.len() < magnitude {
            if !table.has_admissible_swap() {
                return Err(GeneratorError::DegenerateDrift {
                    magnitude,
                    requested: table.swaps.len() + 1,
                    columns,
                });
            }
            let first = rng.gen_range(0..NUM_RELEVANT);
            let second = rng.gen_range(0..columns);
            if !table.is_admissible(first, second) {
                continue;
            }
            let pair = (first.min(second), first.max(second));
            table.swap_columns(pair.0, pair.1);
            table.swaps.push(pair);
        }

        Ok(table)
    }

    fn is_admissible(&self, first: usize, second: usize) -> bool {
        first != second
            && !self.swaps.contains(&(first.min(second), first.max(second)))
            && self.column(first) != self.column(second)
    }

    fn has_admissible_swap(&self) -> bool {
        (0..NUM_RELEVANT).any(|a| (0..self.num_columns()).any(|b| self.is_admissible(a, b)))
    }

    fn swap_columns(&mut self, a: usize, b: usize) {
        for row in self.rows.iter_mut() {
            row.swap(a, b);
        }
        self.permutation.swap(a, b);
    }

    /// Attributes per row, relevant and irrelevant
    pub fn num_columns(&self) -> usize {
        self.permutation.len()
    }

    /// Template for a class label
    pub fn row(&self, label: usize) -> &[Cell] {
        &self.rows[label]
    }

    /// All ten rows in label order
    pub fn rows(&self) -> &[Vec<Cell>; NUM_CLASSES] {
        &self.rows
    }

    /// One column across all ten rows
    pub fn column(&self, index: usize) -> [Cell; NUM_CLASSES] {
        std::array::from_fn(|label| self.rows[label][index])
    }

    /// Column pairs swapped to reach this table, in application order
    pub fn swaps(&self) -> &[(usize, usize)] {
        &self.swaps
    }

    /// Base column found at each position
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Drift magnitude that produced this table
    pub fn magnitude(&self) -> usize {
        self.swaps.len()
    }

    /// Columns whose base column moved
    pub fn displaced_columns(&self) -> Vec<usize> {
        self.permutation
            .iter()
            .enumerate()
            .filter(|(position, &source)| *position != source)
            .map(|(position, _)| position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_base_table_shape() {
        let table = DigitTable::base(3);
        assert_eq!(table.num_columns(), 10);
        for row in table.rows() {
            assert_eq!(row.len(), 10);
            assert!(row[NUM_RELEVANT..].iter().all(|&c| c == Cell::Irrelevant));
            assert!(row[..NUM_RELEVANT].iter().all(|&c| c != Cell::Irrelevant));
        }
        // digit 8 lights every segment
        assert!(table.row(8)[..NUM_RELEVANT].iter().all(|&c| c == Cell::Lit));
        assert_eq!(table.row(1)[4], Cell::Lit);
        assert_eq!(table.row(1)[0], Cell::Unlit);
    }

    #[test]
    fn test_rows_are_distinct() {
        let table = DigitTable::base(0);
        for a in 0..NUM_CLASSES {
            for b in (a + 1)..NUM_CLASSES {
                assert_ne!(table.row(a), table.row(b), "digits {} and {}", a, b);
            }
        }
    }

    #[test]
    fn test_zero_magnitude_is_base() {
        let mut rng = StdRng::seed_from_u64(3);
        let table = DigitTable::drifted(5, 0, &mut rng).unwrap();
        assert_eq!(table, DigitTable::base(5));
        assert!(table.swaps().is_empty());
        assert!(table.displaced_columns().is_empty());
    }

    #[test]
    fn test_drift_applies_recorded_swaps() {
        let mut rng = StdRng::seed_from_u64(11);
        let table = DigitTable::drifted(4, 5, &mut rng).unwrap();
        assert_eq!(table.magnitude(), 5);

        let base = DigitTable::base(4);
        for (position, &source) in table.permutation().iter().enumerate() {
            assert_eq!(table.column(position), base.column(source));
        }

        // each swap starts from a relevant column and no pair repeats
        for (i, &(a, b)) in table.swaps().iter().enumerate() {
            assert!(a < b);
            assert!(a < NUM_RELEVANT);
            assert!(!table.swaps()[..i].contains(&(a, b)));
        }
    }

    #[test]
    fn test_drift_is_column_permutation() {
        let mut rng = StdRng::seed_from_u64(5);
        let table = DigitTable::drifted(2, 3, &mut rng).unwrap();

        let mut sorted = table.permutation().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..9).collect::<Vec<_>>());

        let base = DigitTable::base(2);
        for label in 0..NUM_CLASSES {
            let mut drifted_row = table.row(label).to_vec();
            let mut base_row = base.row(label).to_vec();
            drifted_row.sort_by_key(|c| *c as u8);
            base_row.sort_by_key(|c| *c as u8);
            assert_eq!(drifted_row, base_row);
        }
    }

    #[test]
    fn test_concepts_do_not_share_tables() {
        let mut rng = StdRng::seed_from_u64(9);
        let first = DigitTable::drifted(0, 0, &mut rng).unwrap();
        let _second = DigitTable::drifted(0, 4, &mut rng).unwrap();
        assert_eq!(first, DigitTable::base(0));
    }

    #[test]
    fn test_all_pairs_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        let table = DigitTable::drifted(1, max_effective_swaps(1), &mut rng).unwrap();
        assert_eq!(table.magnitude(), 28);

        let err = DigitTable::drifted(1, 29, &mut rng).unwrap_err();
        assert!(matches!(err, GeneratorError::DegenerateDrift { .. }));
    }

    #[test]
    fn test_irrelevant_cells_resolve_to_bits() {
        let mut rng = StdRng::seed_from_u64(2);
        let ones = (0..1000)
            .filter(|_| Cell::Irrelevant.resolve(&mut rng))
            .count();
        assert!(ones > 400 && ones < 600);
        assert!(Cell::Lit.resolve(&mut rng));
        assert!(!Cell::Unlit.resolve(&mut rng));
    }

    #[test]
    fn test_every_swap_changes_content() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let table = DigitTable::drifted(17, 5, &mut rng).unwrap();

            let mut replay = DigitTable::base(17);
            for &(a, b) in table.swaps() {
                let before = replay.rows().clone();
                replay.swap_columns(a, b);
                assert_ne!(replay.rows(), &before, "seed {} swap ({}, {})", seed, a, b);
            }
            assert_eq!(replay.rows(), table.rows());
        }
    }

    #[test]
    fn test_bound_reachable_with_many_irrelevant() {
        assert_eq!(max_effective_swaps(0), 21);
        assert_eq!(max_effective_swaps(1), 28);
        assert_eq!(max_effective_swaps(17), 49);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let table = DigitTable::drifted(17, max_effective_swaps(17), &mut rng).unwrap();
            assert_eq!(table.magnitude(), 49);
        }

        let mut rng = StdRng::seed_from_u64(0);
        assert!(DigitTable::drifted(17, 50, &mut rng).is_err());
    }
}

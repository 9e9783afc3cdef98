use std::slice;

use crate::error::{PatternError, Result};
use crate::format::SupportFormat;
use crate::itemset::{Item, Itemset};
use crate::sequence_ids::SequenceIds;

/// A sequential pattern found by a pattern-growth miner such as PrefixSpan or BIDE+.
///
/// The pattern is an ordered list of itemsets together with the IDs of the
/// sequences that contain it. Itemsets are append-only. The sequence IDs stay
/// unset until the miner has computed support, and querying support before
/// that is an error rather than a support of zero.
///
/// A miner branches its search with [`SequentialPattern::clone_sequence`],
/// which deep-copies the itemsets but leaves the new candidate's support
/// unset.
///
/// # Example:
/// ```rust
/// use sequential_pattern::{Itemset, SequentialPattern};
///
/// let mut pattern = SequentialPattern::new();
/// pattern.add_itemset(vec![1, 2].into_iter().collect::<Itemset>());
/// pattern.add_itemset(vec![3].into_iter().collect::<Itemset>());
/// pattern.set_sequence_ids(vec![2, 5, 9].into_iter().collect());
///
/// assert_eq!(pattern.to_string(), "(1 2 )(3 )    ");
/// assert_eq!(pattern.absolute_support(), Ok(3));
/// assert_eq!(pattern.relative_support_formatted(10).unwrap(), "0.3");
/// ```
#[derive(Debug, Default, Eq, PartialEq)]
pub struct SequentialPattern {
    itemsets: Vec<Itemset>,
    sequence_ids: Option<SequenceIds>,
}

impl SequentialPattern {
    pub fn new() -> Self {
        Self {
            itemsets: Vec::new(),
            sequence_ids: None,
        }
    }

    pub fn add_itemset(&mut self, itemset: Itemset) {
        self.itemsets.push(itemset);
    }

    /// Assign the IDs of the sequences containing this pattern.
    pub fn set_sequence_ids(&mut self, sequence_ids: SequenceIds) {
        if let Some(previous) = &self.sequence_ids {
            log::debug!(
                "overwriting sequence IDs of {}: support {} -> {}",
                self,
                previous.len(),
                sequence_ids.len()
            );
        }
        self.sequence_ids = Some(sequence_ids);
    }

    /// Copy the itemsets into a new candidate. The copy's sequence IDs are
    /// unset and must be recomputed before querying support.
    pub fn clone_sequence(&self) -> Self {
        log::trace!("branching pattern of {} itemsets", self.itemsets.len());
        self.itemsets.iter().cloned().collect()
    }

    /// Number of itemsets.
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn itemsets(&self) -> &[Itemset] {
        &self.itemsets
    }

    pub fn iter(&self) -> slice::Iter<'_, Itemset> {
        self.itemsets.iter()
    }

    pub fn get(&self, index: usize) -> Result<&Itemset> {
        self.itemsets.get(index).ok_or(PatternError::IndexOutOfRange {
            index,
            len: self.itemsets.len(),
        })
    }

    /// The item at flat position `i`, counting across itemset boundaries.
    /// Returns `None` past the last item.
    pub fn ith_item(&self, mut i: usize) -> Option<Item> {
        for itemset in &self.itemsets {
            if i < itemset.len() {
                return itemset.get(i);
            }
            i -= itemset.len();
        }
        None
    }

    /// Number of item occurrences. An item appearing in two itemsets counts twice.
    pub fn item_occurrences_total_count(&self) -> usize {
        self.itemsets.iter().map(Itemset::len).sum()
    }

    pub fn sequence_ids(&self) -> Option<&SequenceIds> {
        self.sequence_ids.as_ref()
    }

    pub fn absolute_support(&self) -> Result<usize> {
        self.sequence_ids
            .as_ref()
            .map(|ids| ids.len())
            .ok_or(PatternError::SupportUnknown)
    }

    pub fn relative_support(&self, sequence_count: usize) -> Result<f64> {
        let support = self.absolute_support()?;
        if sequence_count == 0 {
            return Err(PatternError::EmptyDatabase);
        }
        Ok(support as f64 / sequence_count as f64)
    }

    pub fn relative_support_formatted(&self, sequence_count: usize) -> Result<String> {
        self.relative_support_formatted_with(&SupportFormat::default(), sequence_count)
    }

    pub fn relative_support_formatted_with(
        &self,
        format: &SupportFormat,
        sequence_count: usize,
    ) -> Result<String> {
        self.relative_support(sequence_count)
            .map(|support| format.format(support))
    }
}

impl FromIterator<Itemset> for SequentialPattern {
    fn from_iter<I: IntoIterator<Item = Itemset>>(iter: I) -> Self {
        Self {
            itemsets: iter.into_iter().collect(),
            sequence_ids: None,
        }
    }
}

impl<'a> IntoIterator for &'a SequentialPattern {
    type Item = &'a Itemset;
    type IntoIter = slice::Iter<'a, Itemset>;

    fn into_iter(self) -> Self::IntoIter {
        self.itemsets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SequentialPattern;
    use crate::error::PatternError;
    use crate::itemset::{Item, Itemset};
    use crate::sequence_ids::SequenceIds;
    use proptest::prelude::*;
    use rayon::prelude::*;

    fn pattern(itemsets: &[&[Item]]) -> SequentialPattern {
        itemsets
            .iter()
            .map(|items| items.iter().copied().collect::<Itemset>())
            .collect()
    }

    fn sids(ids: &[usize]) -> SequenceIds {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_new_is_empty_and_unset() {
        let pattern = SequentialPattern::new();
        assert_eq!(pattern.len(), 0);
        assert!(pattern.is_empty());
        assert!(pattern.sequence_ids().is_none());
        assert_eq!(pattern.item_occurrences_total_count(), 0);
        assert_eq!(pattern.ith_item(0), None);
    }

    #[test]
    fn test_add_itemset_appends_in_order() {
        let mut pattern = SequentialPattern::new();
        pattern.add_itemset(vec![5].into_iter().collect());
        pattern.add_itemset(vec![1, 2].into_iter().collect());

        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.get(0).unwrap().items(), &[5]);
        assert_eq!(pattern.get(1).unwrap().items(), &[1, 2]);
    }

    #[test]
    fn test_get_out_of_range() {
        let pattern = pattern(&[&[1, 2], &[3]]);
        assert_eq!(
            pattern.get(2),
            Err(PatternError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_ith_item_walks_itemsets() {
        let pattern = pattern(&[&[1, 2], &[3], &[4, 5, 6]]);
        let flat: Vec<_> = (0..6).map(|i| pattern.ith_item(i)).collect();
        assert_eq!(
            flat,
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)]
        );
        assert_eq!(pattern.ith_item(6), None);
        assert_eq!(pattern.ith_item(usize::MAX), None);
    }

    #[test]
    fn test_item_occurrences_count_repeats() {
        let pattern = pattern(&[&[1, 2], &[1], &[2, 3]]);
        assert_eq!(pattern.item_occurrences_total_count(), 5);
    }

    #[test]
    fn test_support() {
        let mut pattern = pattern(&[&[1, 2], &[3]]);
        pattern.set_sequence_ids(sids(&[2, 5, 9]));

        assert_eq!(pattern.absolute_support(), Ok(3));
        assert_eq!(pattern.relative_support_formatted(10).unwrap(), "0.3");
    }

    #[test]
    fn test_relative_support_rounding() {
        let mut third = pattern(&[&[1]]);
        third.set_sequence_ids(sids(&[0]));
        assert_eq!(third.relative_support_formatted(3).unwrap(), "0.33333");

        let mut half = pattern(&[&[1]]);
        half.set_sequence_ids(sids(&[0, 3]));
        assert_eq!(half.relative_support_formatted(4).unwrap(), "0.5");
    }

    #[test]
    fn test_support_unknown_before_assignment() {
        let pattern = pattern(&[&[1]]);
        assert_eq!(pattern.absolute_support(), Err(PatternError::SupportUnknown));
        assert_eq!(
            pattern.relative_support_formatted(10),
            Err(PatternError::SupportUnknown)
        );
    }

    #[test]
    fn test_empty_set_is_zero_support() {
        let mut pattern = pattern(&[&[1]]);
        pattern.set_sequence_ids(SequenceIds::new());
        assert_eq!(pattern.absolute_support(), Ok(0));
        assert_eq!(pattern.relative_support_formatted(4).unwrap(), "0");
    }

    #[test]
    fn test_zero_sequence_count() {
        let mut pattern = pattern(&[&[1]]);
        pattern.set_sequence_ids(sids(&[1]));
        assert_eq!(
            pattern.relative_support_formatted(0),
            Err(PatternError::EmptyDatabase)
        );
        assert_eq!(pattern.relative_support(0), Err(PatternError::EmptyDatabase));
    }

    #[test]
    fn test_sparse_large_sequence_id() {
        let mut pattern = pattern(&[&[1, 2], &[3]]);
        pattern.set_sequence_ids(sids(&[i32::MAX as usize, 4]));

        assert_eq!(pattern.absolute_support(), Ok(2));
        assert_eq!(pattern.relative_support_formatted(4).unwrap(), "0.5");
        assert_eq!(
            pattern.sequence_ids().unwrap().as_slice(),
            &[4, i32::MAX as usize]
        );
    }

    #[test]
    fn test_set_sequence_ids_overwrites() {
        let mut pattern = pattern(&[&[1]]);
        pattern.set_sequence_ids(sids(&[1, 2]));
        pattern.set_sequence_ids(sids(&[7]));
        assert_eq!(pattern.absolute_support(), Ok(1));
        assert!(pattern.sequence_ids().unwrap().contains(7));
    }

    #[test]
    fn test_clone_sequence_drops_sequence_ids() {
        let mut original = pattern(&[&[1, 2], &[3]]);
        original.set_sequence_ids(sids(&[0, 1]));

        let mut branch = original.clone_sequence();
        assert_eq!(branch.itemsets(), original.itemsets());
        assert!(branch.sequence_ids().is_none());
        assert_eq!(branch.absolute_support(), Err(PatternError::SupportUnknown));

        branch.add_itemset(vec![4].into_iter().collect());
        assert_eq!(original.len(), 2);
        assert_eq!(branch.len(), 3);
        assert_eq!(original.absolute_support(), Ok(2));
    }

    #[test]
    fn test_parallel_branches_are_independent() {
        let root = pattern(&[&[1], &[2]]);

        let branches: Vec<SequentialPattern> = (10..18)
            .into_par_iter()
            .map(|item: Item| {
                let mut branch = root.clone_sequence();
                branch.add_itemset(vec![item].into_iter().collect());
                branch.set_sequence_ids(sids(&[item as usize]));
                branch
            })
            .collect();

        assert_eq!(root.len(), 2);
        assert!(root.sequence_ids().is_none());
        for (branch, item) in branches.iter().zip(10..) {
            assert_eq!(branch.len(), 3);
            assert_eq!(branch.ith_item(2), Some(item));
            assert_eq!(branch.absolute_support(), Ok(1));
        }
    }

    fn arb_pattern() -> impl Strategy<Value = SequentialPattern> {
        prop::collection::vec(prop::collection::vec(0u32..50, 0..6), 0..8).prop_map(|itemsets| {
            itemsets
                .into_iter()
                .map(|items| items.into_iter().collect::<Itemset>())
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_size_and_item_count(pattern in arb_pattern()) {
            prop_assert_eq!(pattern.len(), pattern.itemsets().len());
            let total: usize = pattern.itemsets().iter().map(|itemset| itemset.len()).sum();
            prop_assert_eq!(pattern.item_occurrences_total_count(), total);
        }

        #[test]
        fn prop_flat_index_matches_walk(pattern in arb_pattern()) {
            let flat: Vec<Item> = pattern.iter().flat_map(|itemset| itemset.iter()).collect();
            for (i, item) in flat.iter().enumerate() {
                prop_assert_eq!(pattern.ith_item(i), Some(*item));
            }
            prop_assert_eq!(pattern.ith_item(flat.len()), None);
            prop_assert_eq!(pattern.ith_item(flat.len() + 7), None);
        }

        #[test]
        fn prop_clone_copies_itemsets_only(
            mut pattern in arb_pattern(),
            ids in prop::collection::vec(0usize..100, 0..10),
            assign in any::<bool>(),
        ) {
            if assign {
                pattern.set_sequence_ids(ids.into_iter().collect());
            }
            let mut branch = pattern.clone_sequence();
            prop_assert_eq!(branch.itemsets(), pattern.itemsets());
            prop_assert!(branch.sequence_ids().is_none());

            let before = pattern.item_occurrences_total_count();
            branch.add_itemset(vec![99].into_iter().collect());
            prop_assert_eq!(pattern.item_occurrences_total_count(), before);
            prop_assert_eq!(branch.len(), pattern.len() + 1);
        }
    }
}

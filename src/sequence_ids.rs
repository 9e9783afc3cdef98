use std::slice;

pub type SequenceId = usize;

/// IDs of the source sequences containing a pattern.
///
/// Stored as a sorted, deduplicated sid list, so memory follows support and
/// not the largest ID.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SequenceIds {
    ids: Vec<SequenceId>,
}

impl SequenceIds {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: SequenceId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// IDs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = SequenceId> + '_ {
        self.ids.iter().copied()
    }

    pub fn as_slice(&self) -> &[SequenceId] {
        &self.ids
    }

    /// IDs present in both sets, e.g. the support of a pattern extended by an
    /// item whose own sid list is `other`.
    pub fn intersection(&self, other: &SequenceIds) -> SequenceIds {
        let (a, b) = (&self.ids, &other.ids);
        let mut ids = Vec::with_capacity(a.len().min(b.len()));
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            if a[i] < b[j] {
                i += 1;
                continue;
            }

            if a[i] > b[j] {
                j += 1;
                continue;
            }

            ids.push(a[i]);
            i += 1;
            j += 1;
        }

        SequenceIds { ids }
    }
}

impl FromIterator<SequenceId> for SequenceIds {
    fn from_iter<I: IntoIterator<Item = SequenceId>>(iter: I) -> Self {
        let mut ids: Vec<SequenceId> = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }
}

impl<'a> IntoIterator for &'a SequenceIds {
    type Item = &'a SequenceId;
    type IntoIter = slice::Iter<'a, SequenceId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

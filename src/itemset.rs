use std::fmt;
use std::slice;

pub type Item = u32;

/// A group of distinct items occurring together at one position of a sequence.
///
/// Items keep the order they were inserted in. Itemsets produced during mining
/// are small, so membership is a linear scan.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Itemset {
    items: Vec<Item>,
}

impl Itemset {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `item` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Item> {
        self.items.get(index).copied()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.items.iter().copied()
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut itemset = Itemset::new();
        for item in iter {
            itemset.insert(item);
        }
        itemset
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for item in &self.items {
            write!(f, "{} ", item)?;
        }
        Ok(())
    }
}

//! Player inventory
//!
//! An insertion-ordered list without duplicates. Order matters for display
//! and for which item a trap knocks loose.

use serde::{Deserialize, Serialize};

use super::ItemId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<ItemId>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Add an item to the end. Returns false if it was already held.
    pub fn add(&mut self, item: ItemId) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove an item. Returns false if it was not held.
    pub fn remove(&mut self, item: ItemId) -> bool {
        match self.items.iter().position(|&held| held == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove the item at `index`, shifting later items down
    pub fn remove_at(&mut self, index: usize) -> Option<ItemId> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.items
    }
}

impl FromIterator<ItemId> for Inventory {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for item in iter {
            inventory.add(item);
        }
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut inv = Inventory::new();
        assert!(inv.add(ItemId::Torch));
        assert!(!inv.add(ItemId::Torch));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let inv: Inventory = [ItemId::Sword, ItemId::Torch, ItemId::Coin, ItemId::Sword]
            .into_iter()
            .collect();
        assert_eq!(inv.as_slice(), &[ItemId::Sword, ItemId::Torch, ItemId::Coin]);
    }

    #[test]
    fn test_remove_at_shifts() {
        let mut inv: Inventory = [ItemId::Sword, ItemId::Torch, ItemId::Coin].into_iter().collect();
        assert_eq!(inv.remove_at(1), Some(ItemId::Torch));
        assert_eq!(inv.as_slice(), &[ItemId::Sword, ItemId::Coin]);
        assert_eq!(inv.remove_at(5), None);
    }

    #[test]
    fn test_remove_missing_item() {
        let mut inv = Inventory::new();
        assert!(!inv.remove(ItemId::RustyKey));
        inv.add(ItemId::RustyKey);
        assert!(inv.remove(ItemId::RustyKey));
        assert!(inv.is_empty());
    }
}

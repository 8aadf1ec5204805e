//! Quick budget: an in-memory shopping list with a running total.

use thiserror::Error;
use uuid::Uuid;

/// Reasons an item cannot be added.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BudgetError {
    #[error("item name is empty")]
    EmptyName,

    #[error("amount is empty")]
    EmptyAmount,

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
}

/// One line of the budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetItem {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
}

/// Ordered list of budget items.
#[derive(Debug, Clone, Default)]
pub struct BudgetList {
    items: Vec<BudgetItem>,
}

impl BudgetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item. The amount must be a non-negative decimal.
    pub fn add(&mut self, name: &str, amount: &str) -> Result<&BudgetItem, BudgetError> {
        let name = name.trim();
        let amount = amount.trim();
        if name.is_empty() {
            return Err(BudgetError::EmptyName);
        }
        if amount.is_empty() {
            return Err(BudgetError::EmptyAmount);
        }

        let value = amount
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| BudgetError::InvalidAmount(amount.to_string()))?;

        self.items.push(BudgetItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            amount: value,
        });
        Ok(&self.items[self.items.len() - 1])
    }

    /// Removes the item with `id`. Returns the removed item, if it existed.
    pub fn remove(&mut self, id: Uuid) -> Option<BudgetItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    pub fn items(&self) -> &[BudgetItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_total() {
        let mut list = BudgetList::new();
        list.add("Coffee", "3.50").unwrap();
        list.add("Bread", "2.25").unwrap();

        assert_eq!(list.len(), 2);
        assert!((list.total() - 5.75).abs() < 1e-9);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = BudgetList::new();
        let first = list.add("A", "1").unwrap().id;
        let second = list.add("A", "1").unwrap().id;

        assert_ne!(first, second);
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut list = BudgetList::new();

        assert_eq!(list.add("  ", "1").unwrap_err(), BudgetError::EmptyName);
        assert_eq!(list.add("Milk", "").unwrap_err(), BudgetError::EmptyAmount);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_rejects_bad_amounts() {
        let mut list = BudgetList::new();

        assert!(matches!(list.add("Milk", "abc"), Err(BudgetError::InvalidAmount(_))));
        assert!(matches!(list.add("Milk", "-2"), Err(BudgetError::InvalidAmount(_))));
        assert!(matches!(list.add("Milk", "inf"), Err(BudgetError::InvalidAmount(_))));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = BudgetList::new();
        let keep = list.add("Keep", "1").unwrap().id;
        let drop = list.add("Drop", "2").unwrap().id;

        let removed = list.remove(drop).unwrap();

        assert_eq!(removed.name, "Drop");
        assert_eq!(list.items()[0].id, keep);
        assert!(list.remove(drop).is_none());
    }

    #[test]
    fn test_clear() {
        let mut list = BudgetList::new();
        list.add("A", "1").unwrap();
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.total(), 0.0);
    }
}

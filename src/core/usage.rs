//! Client-side draft of an inventory usage report.
//!
//! Every line satisfies `0 < quantity_used <= current_stock` after each
//! mutation; a rejected mutation leaves the draft untouched.

use crate::errors::{AppError, AppResult};
use crate::models::inventory::{InventoryItem, UsageEntry, UsageLineItem, UsageReport};
use crate::models::user::UserId;

/// Parse a quantity typed by the user. Only positive integers are accepted.
pub fn parse_quantity(raw: &str) -> AppResult<u32> {
    let trimmed = raw.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidQuantity(format!("'{}' is not a whole number", trimmed)))?;

    if n <= 0 {
        return Err(AppError::InvalidQuantity(format!(
            "quantity must be greater than zero (got {})",
            n
        )));
    }

    u32::try_from(n).map_err(|_| AppError::InvalidQuantity(format!("{} is too large", n)))
}

#[derive(Debug, Clone, Default)]
pub struct UsageDraft {
    lines: Vec<UsageLineItem>,
    task_id: Option<i64>,
}

impl UsageDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[UsageLineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn task_id(&self) -> Option<i64> {
        self.task_id
    }

    pub fn select_task(&mut self, task_id: i64) {
        self.task_id = Some(task_id);
    }

    /// Add `quantity` of `item`, merging into an existing line for the same item.
    pub fn add(&mut self, item: &InventoryItem, quantity: i64) -> AppResult<()> {
        if quantity <= 0 {
            return Err(AppError::InvalidQuantity(
                "Please enter a valid quantity.".to_string(),
            ));
        }

        let quantity = u32::try_from(quantity)
            .map_err(|_| AppError::InvalidQuantity(format!("{} is too large", quantity)))?;

        if quantity > item.current_stock {
            return Err(AppError::InsufficientStock(format!(
                "Available: {} {}",
                item.current_stock, item.unit
            )));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            let total = line.quantity_used.saturating_add(quantity);
            if total > item.current_stock {
                return Err(AppError::InsufficientStock(format!(
                    "Total quantity exceeds available stock. Available: {} {}",
                    item.current_stock, item.unit
                )));
            }
            line.quantity_used = total;
            line.current_stock = item.current_stock;
            return Ok(());
        }

        self.lines.push(UsageLineItem {
            item_id: item.id,
            item_name: item.name.clone(),
            unit: item.unit.clone(),
            quantity_used: quantity,
            current_stock: item.current_stock,
        });
        Ok(())
    }

    /// Parse `raw` and add it; the form-input variant of [`UsageDraft::add`].
    pub fn add_raw(&mut self, item: &InventoryItem, raw: &str) -> AppResult<()> {
        let quantity = parse_quantity(raw)?;
        self.add(item, quantity as i64)
    }

    /// Replace the quantity of an existing line (no summing).
    pub fn set_quantity(&mut self, item_id: i64, quantity: i64) -> AppResult<()> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.item_id == item_id)
            .ok_or_else(|| AppError::Validation(format!("Item {} is not in the report.", item_id)))?;

        if quantity <= 0 {
            return Err(AppError::InvalidQuantity(
                "Please enter a valid quantity.".to_string(),
            ));
        }

        if quantity > line.current_stock as i64 {
            return Err(AppError::InsufficientStock(format!(
                "Quantity exceeds available stock. Available: {} {}",
                line.current_stock, line.unit
            )));
        }

        line.quantity_used = quantity as u32;
        Ok(())
    }

    /// Drop the line for `item_id`; true when a line was removed.
    pub fn remove(&mut self, item_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.item_id != item_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.task_id = None;
    }

    /// Build the submission body. Requires a selected task and at least one line.
    pub fn to_report(&self, used_by: &UserId) -> AppResult<UsageReport> {
        let task_id = self
            .task_id
            .ok_or_else(|| AppError::Validation("Please select a task.".to_string()))?;

        if self.lines.is_empty() {
            return Err(AppError::Validation(
                "Please add at least one item to report usage.".to_string(),
            ));
        }

        Ok(UsageReport {
            task_id,
            items: self
                .lines
                .iter()
                .map(|l| UsageEntry {
                    item_id: l.item_id,
                    quantity_used: l.quantity_used,
                })
                .collect(),
            used_by: used_by.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, stock: u32) -> InventoryItem {
        InventoryItem {
            id,
            name: format!("item {id}"),
            category: "tools".into(),
            unit: "pcs".into(),
            current_stock: stock,
        }
    }

    #[test]
    fn second_add_over_stock_is_rejected_without_mutation() {
        let cement = item(1, 10);
        let mut draft = UsageDraft::new();

        draft.add(&cement, 6).unwrap();
        let err = draft.add(&cement, 6).unwrap_err();

        assert!(matches!(err, AppError::InsufficientStock(_)));
        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.lines()[0].quantity_used, 6);
    }

    #[test]
    fn adds_for_same_item_are_summed() {
        let cement = item(1, 10);
        let mut draft = UsageDraft::new();

        draft.add(&cement, 4).unwrap();
        draft.add(&cement, 4).unwrap();

        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.lines()[0].quantity_used, 8);
    }

    #[test]
    fn invalid_quantities_are_rejected() {
        let mut draft = UsageDraft::new();
        let it = item(1, 5);

        assert!(matches!(draft.add(&it, 0), Err(AppError::InvalidQuantity(_))));
        assert!(matches!(draft.add(&it, -3), Err(AppError::InvalidQuantity(_))));
        assert!(matches!(draft.add(&it, 6), Err(AppError::InsufficientStock(_))));
        assert!(matches!(draft.add_raw(&it, "abc"), Err(AppError::InvalidQuantity(_))));
        assert!(matches!(draft.add_raw(&it, "2.5"), Err(AppError::InvalidQuantity(_))));
        assert!(draft.is_empty());

        draft.add_raw(&it, " 5 ").unwrap();
        assert_eq!(draft.lines()[0].quantity_used, 5);
    }

    #[test]
    fn different_items_get_their_own_lines_in_order() {
        let mut draft = UsageDraft::new();
        draft.add(&item(2, 3), 1).unwrap();
        draft.add(&item(1, 3), 2).unwrap();
        let ids: Vec<_> = draft.lines().iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn set_quantity_replaces_within_stock() {
        let mut draft = UsageDraft::new();
        draft.add(&item(1, 10), 4).unwrap();

        draft.set_quantity(1, 9).unwrap();
        assert_eq!(draft.lines()[0].quantity_used, 9);

        assert!(draft.set_quantity(1, 11).is_err());
        assert!(draft.set_quantity(1, 0).is_err());
        assert!(draft.set_quantity(2, 1).is_err());
        assert_eq!(draft.lines()[0].quantity_used, 9);
    }

    #[test]
    fn remove_and_report() {
        let mut draft = UsageDraft::new();
        draft.add(&item(1, 10), 2).unwrap();
        draft.add(&item(2, 10), 3).unwrap();
        assert!(draft.remove(1));
        assert!(!draft.remove(1));

        let user = UserId::new("42");
        assert!(draft.to_report(&user).is_err());

        draft.select_task(7);
        let report = draft.to_report(&user).unwrap();
        assert_eq!(report.task_id, 7);
        assert_eq!(report.used_by, "42");
        assert_eq!(
            report.items,
            vec![UsageEntry {
                item_id: 2,
                quantity_used: 3
            }]
        );
    }

    #[test]
    fn empty_draft_cannot_be_reported() {
        let mut draft = UsageDraft::new();
        draft.select_task(1);
        assert!(matches!(
            draft.to_report(&UserId::new("1")),
            Err(AppError::Validation(_))
        ));
    }
}

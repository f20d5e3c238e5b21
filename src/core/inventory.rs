//! Inventory catalogue as shown when picking items for a usage report.

use crate::models::inventory::InventoryItem;

pub const ALL_CATEGORIES: &str = "all";

/// `all` first, then the server categories in their order, without duplicates.
pub fn category_choices(server: &[String]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for c in server {
        if !out.iter().any(|existing| existing == c) {
            out.push(c.clone());
        }
    }
    out
}

/// Category filter (`all` disables it), case-insensitive name search, then
/// items with no stock left are hidden.
pub fn filter_items(items: &[InventoryItem], category: &str, search: &str) -> Vec<InventoryItem> {
    let needle = search.trim().to_lowercase();

    items
        .iter()
        .filter(|i| category == ALL_CATEGORIES || i.category == category)
        .filter(|i| needle.is_empty() || i.name.to_lowercase().contains(&needle))
        .filter(|i| i.current_stock > 0)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct InventoryCatalog {
    items: Vec<InventoryItem>,
    categories: Vec<String>,
}

impl InventoryCatalog {
    pub fn new(items: Vec<InventoryItem>, categories: Vec<String>) -> Self {
        Self {
            items,
            categories: category_choices(&categories),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn find(&self, id: i64) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn visible(&self, category: &str, search: &str) -> Vec<InventoryItem> {
        filter_items(&self.items, category, search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, category: &str, stock: u32) -> InventoryItem {
        InventoryItem {
            id,
            name: name.into(),
            category: category.into(),
            unit: "pcs".into(),
            current_stock: stock,
        }
    }

    #[test]
    fn category_search_and_stock_filters_compose() {
        let items = vec![
            item(1, "Copper Pipe", "plumbing", 5),
            item(2, "PVC pipe", "plumbing", 0),
            item(3, "Pipe wrench", "tools", 2),
            item(4, "Drill", "tools", 1),
        ];

        let ids = |v: Vec<InventoryItem>| v.into_iter().map(|i| i.id).collect::<Vec<_>>();

        assert_eq!(ids(filter_items(&items, "all", "")), vec![1, 3, 4]);
        assert_eq!(ids(filter_items(&items, "all", "PIPE")), vec![1, 3]);
        assert_eq!(ids(filter_items(&items, "plumbing", "pipe")), vec![1]);
        assert_eq!(ids(filter_items(&items, "electrical", "")), Vec::<i64>::new());
    }

    #[test]
    fn all_is_prepended_once() {
        let cats = category_choices(&["tools".into(), "all".into(), "tools".into()]);
        assert_eq!(cats, vec!["all".to_string(), "tools".to_string()]);
    }
}

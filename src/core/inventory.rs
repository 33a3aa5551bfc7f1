use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::attachment::Attachment;

/// The fixed category table. `item_count` is a display value only; it is
/// never reconciled with any item collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub item_count: u32,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "1", name: "Household", icon: "user-home-symbolic", item_count: 6 },
    Category { id: "2", name: "Cleaning", icon: "edit-clear-all-symbolic", item_count: 4 },
    Category { id: "3", name: "Food", icon: "emoji-food-symbolic", item_count: 5 },
    Category { id: "4", name: "Bathroom", icon: "emoji-body-symbolic", item_count: 3 },
    Category { id: "5", name: "Electronics", icon: "computer-symbolic", item_count: 2 },
    Category { id: "6", name: "Kitchen", icon: "emoji-objects-symbolic", item_count: 4 },
];

impl Category {
    /// Look a category up by its path id. Anything outside the fixed set is
    /// unknown and must render the error view, not an empty list.
    pub fn find(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }
}

/// Labels for the overview filter selector: the "All" sentinel plus every
/// category name.
pub fn filter_labels() -> Vec<String> {
    let mut labels = vec!["All".to_string()];
    labels.extend(CATEGORIES.iter().map(|c| c.name.to_string()));
    labels
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub location: String,
    pub notes: String,
    pub last_updated: NaiveDate,
    pub expires: Option<NaiveDate>,
    /// Mirrors the owning collection's category name.
    pub category: String,
    /// Loaded instruction-manual files; held only for the lifetime of the
    /// session and released when the item (or its draft) is dropped.
    #[serde(skip)]
    pub manuals: Vec<Attachment>,
}

/// Search + category conjunction: case-insensitive substring containment on
/// the name, and category equality unless the "All" sentinel is selected.
/// An empty search term matches everything.
pub fn matches(item: &InventoryItem, search: &str, category: &str) -> bool {
    let matches_search = item.name.to_lowercase().contains(&search.to_lowercase());
    let matches_category = category == "All" || item.category == category;
    matches_search && matches_category
}

/// Append an item. Name and location are both required (after trimming), and
/// the quantity must be at least one; a failed draft leaves the collection
/// untouched. On success the manuals move out of the draft into the item.
pub fn add_item(
    items: &mut Vec<InventoryItem>,
    category: &str,
    name: &str,
    quantity: u32,
    location: &str,
    notes: &str,
    expires: Option<NaiveDate>,
    manuals: &mut Vec<Attachment>,
    today: NaiveDate,
) -> bool {
    let name = name.trim();
    let location = location.trim();
    if name.is_empty() || location.is_empty() || quantity == 0 {
        return false;
    }

    items.push(InventoryItem {
        id: (items.len() + 1).to_string(),
        name: name.to_string(),
        quantity,
        location: location.to_string(),
        notes: notes.trim().to_string(),
        last_updated: today,
        expires,
        category: category.to_string(),
        manuals: std::mem::take(manuals),
    });
    true
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn stock_item(
    id: u32,
    name: &str,
    category: &str,
    quantity: u32,
    location: &str,
    last_updated: NaiveDate,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.into(),
        quantity,
        location: location.into(),
        notes: String::new(),
        last_updated,
        expires: None,
        category: category.into(),
        manuals: Vec::new(),
    }
}

pub fn sample_stock() -> Vec<InventoryItem> {
    vec![
        stock_item(1, "Paper Towels", "Household", 4, "Kitchen", date(2023, 10, 15)),
        stock_item(2, "Laundry Detergent", "Cleaning", 1, "Laundry Room", date(2023, 10, 10)),
        stock_item(3, "Cereal", "Food", 2, "Pantry", date(2023, 10, 12)),
        stock_item(4, "Toothpaste", "Bathroom", 3, "Bathroom", date(2023, 10, 5)),
        stock_item(5, "Batteries", "Electronics", 8, "Drawer", date(2023, 9, 28)),
        stock_item(6, "Light Bulbs", "Household", 6, "Storage", date(2023, 9, 15)),
    ]
}

/// The starter items every category detail view is seeded with on first
/// visit.
pub fn sample_category_items(category: &str) -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "1".into(),
            name: "Sample Item 1".into(),
            quantity: 2,
            location: "Cabinet A".into(),
            notes: "Good condition".into(),
            last_updated: date(2024, 3, 20),
            expires: None,
            category: category.into(),
            manuals: Vec::new(),
        },
        InventoryItem {
            id: "2".into(),
            name: "Sample Item 2".into(),
            quantity: 1,
            location: "Shelf B".into(),
            notes: "Needs replacement".into(),
            last_updated: date(2024, 3, 19),
            expires: None,
            category: category.into(),
            manuals: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_a_conjunction_of_search_and_category() {
        let stock = sample_stock();

        let hits: Vec<&str> = stock
            .iter()
            .filter(|i| matches(i, "to", "All"))
            .map(|i| i.name.as_str())
            .collect();
        // "Paper Towels" and "Toothpaste" both contain "to" case-insensitively.
        assert_eq!(hits, vec!["Paper Towels", "Toothpaste"]);

        let hits: Vec<&str> = stock
            .iter()
            .filter(|i| matches(i, "to", "Bathroom"))
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(hits, vec!["Toothpaste"]);
    }

    #[test]
    fn empty_search_matches_everything_in_category() {
        let stock = sample_stock();
        let household = stock.iter().filter(|i| matches(i, "", "Household")).count();
        assert_eq!(household, 2);
        let all = stock.iter().filter(|i| matches(i, "", "All")).count();
        assert_eq!(all, stock.len());
    }

    #[test]
    fn add_item_rejects_missing_name() {
        let mut items = sample_category_items("Household");
        let mut manuals = Vec::new();
        let before = items.len();

        let added = add_item(
            &mut items, "Household", "", 1, "Pantry", "", None, &mut manuals,
            date(2024, 3, 21),
        );
        assert!(!added);
        assert_eq!(items.len(), before);
    }

    #[test]
    fn add_item_rejects_missing_location_and_zero_quantity() {
        let mut items = Vec::new();
        let mut manuals = Vec::new();
        assert!(!add_item(&mut items, "Food", "Rice", 1, "  ", "", None, &mut manuals, date(2024, 3, 21)));
        assert!(!add_item(&mut items, "Food", "Rice", 0, "Pantry", "", None, &mut manuals, date(2024, 3, 21)));
        assert!(items.is_empty());
    }

    #[test]
    fn add_item_stamps_id_and_last_updated() {
        let mut items = sample_category_items("Food");
        let mut manuals = Vec::new();
        let today = date(2024, 3, 21);

        assert!(add_item(&mut items, "Food", "Rice", 3, "Pantry", "Long grain", None, &mut manuals, today));
        let added = items.last().unwrap();
        assert_eq!(added.id, "3");
        assert_eq!(added.last_updated, today);
        assert_eq!(added.category, "Food");
    }

    #[test]
    fn add_item_moves_manuals_out_of_the_draft() {
        use crate::core::attachment::Attachment;

        let mut items = Vec::new();
        let mut manuals = vec![Attachment::from_bytes("manual.pdf", vec![1, 2, 3])];

        assert!(add_item(&mut items, "Electronics", "Blender", 1, "Counter", "", None, &mut manuals, date(2024, 3, 21)));
        assert!(manuals.is_empty());
        assert_eq!(items[0].manuals.len(), 1);
        assert_eq!(items[0].manuals[0].file_name, "manual.pdf");
    }

    #[test]
    fn unknown_category_ids_are_rejected() {
        for id in ["1", "2", "3", "4", "5", "6"] {
            assert!(Category::find(id).is_some());
        }
        assert!(Category::find("7").is_none());
        assert!(Category::find("0").is_none());
        assert!(Category::find("electronics").is_none());
        assert!(Category::find("").is_none());
    }
}

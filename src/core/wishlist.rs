use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WishPriority {
    Low,
    Medium,
    High,
}

impl WishPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub const ALL: &'static [WishPriority] =
        &[WishPriority::Low, WishPriority::Medium, WishPriority::High];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub priority: WishPriority,
}

/// Append a wishlist entry. A blank title rejects the whole draft; an empty
/// link is stored as absent.
pub fn add_item(
    list: &mut Vec<WishlistItem>,
    title: &str,
    description: &str,
    link: &str,
    priority: WishPriority,
) -> bool {
    let title = title.trim();
    if title.is_empty() {
        return false;
    }

    let link = link.trim();
    list.push(WishlistItem {
        id: list.len() as u32 + 1,
        title: title.to_string(),
        description: description.trim().to_string(),
        link: (!link.is_empty()).then(|| link.to_string()),
        priority,
    });
    true
}

pub fn remove_item(list: &mut Vec<WishlistItem>, id: u32) {
    list.retain(|item| item.id != id);
}

pub fn sample_wishlist() -> Vec<WishlistItem> {
    vec![
        WishlistItem {
            id: 1,
            title: "Wireless Headphones".into(),
            description: "Noise-cancelling wireless headphones in black".into(),
            link: Some("https://example.com/headphones".into()),
            priority: WishPriority::High,
        },
        WishlistItem {
            id: 2,
            title: "Hiking Boots".into(),
            description: "Waterproof hiking boots, size 10".into(),
            link: Some("https://example.com/boots".into()),
            priority: WishPriority::Medium,
        },
        WishlistItem {
            id: 3,
            title: "Cookbook".into(),
            description: "Italian cooking recipes".into(),
            link: Some("https://example.com/cookbook".into()),
            priority: WishPriority::Low,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_blank_title() {
        let mut list = sample_wishlist();
        assert!(!add_item(&mut list, "", "whatever", "", WishPriority::High));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn add_stores_empty_link_as_none() {
        let mut list = Vec::new();
        assert!(add_item(&mut list, "Lego set", "Space shuttle", "  ", WishPriority::Medium));
        assert_eq!(list[0].id, 1);
        assert!(list[0].link.is_none());
    }

    #[test]
    fn remove_filters_out_exactly_one() {
        let mut list = sample_wishlist();
        remove_item(&mut list, 2);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|i| i.id != 2));
        // Unknown ids are a no-op.
        remove_item(&mut list, 42);
        assert_eq!(list.len(), 2);
    }
}

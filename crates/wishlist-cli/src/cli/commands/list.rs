//! `wishlist list` – show all wishes, newest first.

use wishlist_core::item::WishItem;

use crate::cli::App;

pub fn run_list(app: &App) {
    print!("{}", format_list(app.store.items()));
}

/// Table of items, or a hint when the list is empty.
pub fn format_list(items: &[WishItem]) -> String {
    if items.is_empty() {
        return "Wishlist is empty. Add a link with `wishlist add <URL>`.\n".to_string();
    }
    let mut out = format!("{} wishes\n", items.len());
    out.push_str(&format!(
        "{:<14} {:<16} {:<18} {}\n",
        "ID", "TITLE", "PRICE", "URL"
    ));
    for item in items {
        out.push_str(&format!(
            "{:<14} {:<16} {:<18} {}\n",
            item.id, item.title, item.price, item.url
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_shows_hint() {
        assert!(format_list(&[]).starts_with("Wishlist is empty."));
    }

    #[test]
    fn rows_follow_item_order() {
        let items = vec![
            WishItem {
                id: 2,
                title: "Желание #2".to_string(),
                price: "Цена не указана".to_string(),
                image: String::new(),
                url: "https://b.test".to_string(),
                reserved: false,
            },
            WishItem {
                id: 1,
                title: "Желание #1".to_string(),
                price: "Цена не указана".to_string(),
                image: String::new(),
                url: "https://a.test".to_string(),
                reserved: false,
            },
        ];
        let out = format_list(&items);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "2 wishes");
        assert!(lines[1].starts_with("ID"));
        assert!(lines[2].starts_with("2 ") && lines[2].ends_with("https://b.test"));
        assert!(lines[3].starts_with("1 ") && lines[3].ends_with("https://a.test"));
    }
}

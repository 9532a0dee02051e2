//! Plain-text rendering of a selection for the contact email.

use crate::domain::selection::{SelectableItem, SelectionSet};

/// One line per item, `title` or `title | price`, in selection order.
pub fn summarize(set: &SelectionSet) -> String {
    set.iter().map(summary_line).collect::<Vec<_>>().join("\n")
}

fn summary_line(item: &SelectableItem) -> String {
    match &item.price {
        Some(price) => format!("{} | {}", item.title, price),
        None => item.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_summarizes_to_empty_string() {
        assert_eq!(summarize(&SelectionSet::new()), "");
    }

    #[test]
    fn lines_follow_selection_order_with_optional_price() {
        let mut set = SelectionSet::new();
        set.add(
            SelectableItem::tier("tier-plus", "Plus Website")
                .unwrap()
                .with_price("₩1,900,000")
                .unwrap(),
        );
        set.add(SelectableItem::interest("seo-audit", "SEO Audit").unwrap());

        assert_eq!(summarize(&set), "Plus Website | ₩1,900,000\nSEO Audit");
    }
}

//! HTML fragments for the console's result areas.

use std::fmt::Write;

use crate::domain::shopcart::model::{Item, ShopcartSummary};

pub const NO_ITEMS_ROW: &str = r#"<tr><td colspan="5">No items found in this shopcart.</td></tr>"#;
pub const NO_SHOPCARTS_ROW: &str = r#"<tr><td colspan="2">No shopcarts found</td></tr>"#;
pub const UNEXPECTED_FORMAT: &str = "<p>Could not display items. Unexpected response format.</p>";

const ITEM_TABLE_HEAD: &str = concat!(
    r#"<table class="table table-striped table-hover">"#,
    "<thead><tr>",
    r#"<th class="col-md-1">Item ID</th>"#,
    r#"<th class="col-md-2">Name</th>"#,
    r#"<th class="col-md-1">Quantity</th>"#,
    r#"<th class="col-md-1">Price</th>"#,
    r#"<th class="col-md-7">Description</th>"#,
    "</tr></thead><tbody>",
);

/// Renders the item results table of a shopcart.
pub fn item_table(items: &[Item]) -> String {
    let mut html = String::from(ITEM_TABLE_HEAD);

    if items.is_empty() {
        html.push_str(NO_ITEMS_ROW);
    }
    for (index, item) in items.iter().enumerate() {
        let _ = write!(
            html,
            r#"<tr id="row_{index}"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            escape(&item.id.as_ref().map(ToString::to_string).unwrap_or_default()),
            escape(item.name.as_deref().unwrap_or_default()),
            item.quantity.map(|q| q.to_string()).unwrap_or_default(),
            item.price.map(|p| p.to_string()).unwrap_or_default(),
            escape(item.description.as_deref().unwrap_or_default()),
        );
    }

    html.push_str("</tbody></table>");
    html
}

/// Renders the body rows of the shopcart listing.
pub fn shopcart_rows(shopcarts: &[ShopcartSummary]) -> String {
    if shopcarts.is_empty() {
        return NO_SHOPCARTS_ROW.to_string();
    }

    shopcarts.iter().fold(String::new(), |mut html, shopcart| {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(&shopcart.id.as_ref().map(ToString::to_string).unwrap_or_default()),
            escape(
                &shopcart
                    .customer_id
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            ),
        );
        html
    })
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ResourceId;
    use proptest::prelude::*;

    fn milk() -> Item {
        Item {
            id: Some(ResourceId::new("1")),
            name: Some("Milk".to_string()),
            quantity: Some(2),
            price: Some(3.5),
            description: Some("Whole milk".to_string()),
            ..Item::default()
        }
    }

    #[test]
    fn should_render_one_row_per_item() {
        let html = item_table(&[milk(), Item::default()]);

        assert!(html.contains(
            r#"<tr id="row_0"><td>1</td><td>Milk</td><td>2</td><td>3.5</td><td>Whole milk</td></tr>"#
        ));
        assert!(html.contains(
            r#"<tr id="row_1"><td></td><td></td><td></td><td></td><td></td></tr>"#
        ));
        assert!(!html.contains(NO_ITEMS_ROW));
    }

    #[test]
    fn should_render_placeholder_for_empty_shopcart() {
        let html = item_table(&[]);

        assert!(html.starts_with(r#"<table class="table table-striped table-hover">"#));
        assert!(html.contains(NO_ITEMS_ROW));
        assert!(html.ends_with("</tbody></table>"));
    }

    #[test]
    fn should_render_exactly_one_placeholder_row_for_no_shopcarts() {
        let html = shopcart_rows(&[]);

        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("No shopcarts found"));
    }

    #[test]
    fn should_render_shopcart_rows() {
        let html = shopcart_rows(&[
            ShopcartSummary {
                id: Some(ResourceId::new("7")),
                customer_id: Some(ResourceId::new("42")),
            },
            ShopcartSummary {
                id: Some(ResourceId::new("8")),
                customer_id: None,
            },
        ]);

        assert_eq!(
            html,
            "<tr><td>7</td><td>42</td></tr><tr><td>8</td><td></td></tr>"
        );
    }

    #[test]
    fn should_escape_markup_in_values() {
        let item = Item {
            name: Some("<b>Milk & Co</b>".to_string()),
            ..Item::default()
        };

        let html = item_table(&[item]);

        assert!(html.contains("&lt;b&gt;Milk &amp; Co&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    proptest! {
        #[test]
        fn should_render_identically_for_identical_items(
            names in proptest::collection::vec("[a-zA-Z<>&]{0,12}", 0..6)
        ) {
            let items: Vec<Item> = names
                .into_iter()
                .map(|name| Item { name: Some(name), ..Item::default() })
                .collect();

            prop_assert_eq!(item_table(&items), item_table(&items.clone()));
        }
    }
}

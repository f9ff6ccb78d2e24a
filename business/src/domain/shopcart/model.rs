use crate::domain::shared::value_objects::ResourceId;

/// A shopcart as returned when one is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Shopcart {
    pub id: ResourceId,
    pub customer_id: Option<ResourceId>,
    pub items: Vec<Item>,
}

/// One entry of the shopcart collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShopcartSummary {
    pub id: Option<ResourceId>,
    pub customer_id: Option<ResourceId>,
}

/// A single shopcart as returned by a lookup.
///
/// The console does not trust the server to send a complete document, so
/// every part is optional and callers check the shape they need.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShopcartDetails {
    pub id: Option<ResourceId>,
    /// Outer `None` when the field is absent, `Some(None)` when it is null.
    pub customer_id: Option<Option<ResourceId>>,
    pub items: Option<Vec<Item>>,
}

/// An item as reflected from the server. Missing values render as blanks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub id: Option<ResourceId>,
    pub shopcart_id: Option<ResourceId>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// Payload for creating a shopcart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShopcart {
    pub id: Option<ResourceId>,
    pub customer_id: ResourceId,
}

/// Payload for changing the owner of a shopcart.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopcartUpdate {
    pub customer_id: ResourceId,
}

/// Filter for the shopcart collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShopcartQuery {
    pub customer_id: Option<ResourceId>,
    /// Matches shopcarts holding an item with this exact name.
    pub item_name: Option<String>,
}

impl ShopcartQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_customer(customer_id: ResourceId) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Self::default()
        }
    }

    pub fn by_item_name(name: impl Into<String>) -> Self {
        Self {
            item_name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Filter for the items of one shopcart. Unset parts do not filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemQuery {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}

/// Item payload sent on add and update.
///
/// `quantity` and `price` are `None` when the typed text was not a number;
/// they travel as `null` rather than being rejected client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub id: ResourceId,
    pub name: String,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub description: String,
}

impl ItemDraft {
    pub fn new(id: ResourceId, name: &str, quantity: &str, price: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            quantity: parse_quantity(quantity),
            price: parse_price(price),
            description: description.to_string(),
        }
    }
}

/// Integer coercion for the quantity field.
///
/// Reads the leading integer and ignores the rest, so `"2.5"` and `"2 pcs"`
/// both give 2. No bounds checking beyond what fits an `i64`.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let end = signed_digits_end(raw, 0)?;
    raw[..end].parse::<i64>().ok()
}

/// Decimal coercion for the price field.
///
/// Reads the leading decimal number (`"3.5 EUR"` gives 3.5). Non-finite
/// values are not numbers.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let bytes = raw.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_end = digits_end(bytes, sign);
    let mut end = int_end;
    if bytes.get(end) == Some(&b'.') {
        end = digits_end(bytes, end + 1);
    }
    // At least one digit on either side of the point.
    if int_end == sign && end <= int_end + 1 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        if let Some(exp_end) = signed_digits_end(raw, end + 1) {
            end = exp_end;
        }
    }

    raw[..end].parse::<f64>().ok().filter(|p| p.is_finite())
}

/// End of an optionally signed digit run starting at `start`, if it has digits.
fn signed_digits_end(raw: &str, start: usize) -> Option<usize> {
    let bytes = raw.as_bytes();
    let sign = usize::from(matches!(bytes.get(start), Some(b'+' | b'-')));
    let end = digits_end(bytes, start + sign);
    (end > start + sign).then_some(end)
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        + start
}

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use business::domain::shared::value_objects::ResourceId;
use business::domain::shopcart::model::{
    Item, ItemDraft, NewShopcart, ShopcartDetails, ShopcartSummary, ShopcartUpdate,
    parse_price, parse_quantity,
};

/// Identifiers arrive either as JSON numbers or strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Integer(i64),
    Text(String),
}

impl From<WireId> for ResourceId {
    fn from(value: WireId) -> Self {
        match value {
            WireId::Integer(id) => ResourceId::from(id),
            WireId::Text(id) => ResourceId::from(id),
        }
    }
}

/// Item numbers as the server happens to send them. Anything that is not a
/// number or numeric text reads as missing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireNumber {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl WireNumber {
    pub fn as_quantity(&self) -> Option<i64> {
        match self {
            WireNumber::Integer(n) => Some(*n),
            WireNumber::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            WireNumber::Text(text) => parse_quantity(text),
            _ => None,
        }
    }

    pub fn as_price(&self) -> Option<f64> {
        match self {
            WireNumber::Integer(n) => Some(*n as f64),
            WireNumber::Float(f) if f.is_finite() => Some(*f),
            WireNumber::Text(text) => parse_price(text),
            _ => None,
        }
    }
}

/// Keeps a present-but-null field apart from an absent one.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct ShopcartResponse {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default, deserialize_with = "present")]
    pub customer_id: Option<Option<WireId>>,
    #[serde(default)]
    pub items: Option<Vec<ItemResponse>>,
}

impl From<ShopcartResponse> for ShopcartDetails {
    fn from(value: ShopcartResponse) -> Self {
        ShopcartDetails {
            id: value.id.map(Into::into),
            customer_id: value.customer_id.map(|id| id.map(Into::into)),
            items: value
                .items
                .map(|items| items.into_iter().map(Into::into).collect()),
        }
    }
}

/// Listing entries; anything beyond the two ids is ignored.
#[derive(Debug, Deserialize)]
pub struct ShopcartSummaryResponse {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default)]
    pub customer_id: Option<WireId>,
}

impl From<ShopcartSummaryResponse> for ShopcartSummary {
    fn from(value: ShopcartSummaryResponse) -> Self {
        ShopcartSummary {
            id: value.id.map(Into::into),
            customer_id: value.customer_id.map(Into::into),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemResponse {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default)]
    pub shopcart_id: Option<WireId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<WireNumber>,
    #[serde(default)]
    pub price: Option<WireNumber>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<ItemResponse> for Item {
    fn from(value: ItemResponse) -> Self {
        Item {
            id: value.id.map(Into::into),
            shopcart_id: value.shopcart_id.map(Into::into),
            name: value.name,
            quantity: value.quantity.as_ref().and_then(WireNumber::as_quantity),
            price: value.price.as_ref().and_then(WireNumber::as_price),
            description: value.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewShopcartRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    pub customer_id: &'a str,
}

impl<'a> From<&'a NewShopcart> for NewShopcartRequest<'a> {
    fn from(value: &'a NewShopcart) -> Self {
        Self {
            id: value.id.as_ref().map(ResourceId::as_str),
            customer_id: value.customer_id.as_str(),
        }
    }
}

/// Body for moving a shopcart to another customer.
#[derive(Debug, Serialize)]
pub struct ShopcartUpdateRequest<'a> {
    pub id: &'a str,
    pub customer_id: &'a str,
}

impl<'a> ShopcartUpdateRequest<'a> {
    pub fn new(id: &'a ResourceId, update: &'a ShopcartUpdate) -> Self {
        Self {
            id: id.as_str(),
            customer_id: update.customer_id.as_str(),
        }
    }
}

/// Item body for add and update. Unparseable numbers go out as `null`.
#[derive(Debug, Serialize)]
pub struct ItemRequest<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub description: &'a str,
}

impl<'a> From<&'a ItemDraft> for ItemRequest<'a> {
    fn from(value: &'a ItemDraft) -> Self {
        Self {
            id: value.id.as_str(),
            name: &value.name,
            quantity: value.quantity,
            price: value.price,
            description: &value.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

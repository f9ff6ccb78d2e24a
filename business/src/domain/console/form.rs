use crate::domain::shared::value_objects::ResourceId;
use crate::domain::shopcart::model::Item;

/// Text fields of the console form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub shopcart_id: String,
    pub customer_id: String,
    pub item_id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
}

/// Values submitted with an action. Only fields that are `Some` overwrite
/// the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub shopcart_id: Option<String>,
    pub customer_id: Option<String>,
    pub item_id: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
}

/// Snapshot of the item part of the form, used to restore it after a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemFields {
    pub item_id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
}

impl FormFields {
    pub fn apply(&mut self, input: FormInput) {
        let FormInput {
            shopcart_id,
            customer_id,
            item_id,
            name,
            quantity,
            price,
            description,
        } = input;

        overwrite(&mut self.shopcart_id, shopcart_id);
        overwrite(&mut self.customer_id, customer_id);
        overwrite(&mut self.item_id, item_id);
        overwrite(&mut self.name, name);
        overwrite(&mut self.quantity, quantity);
        overwrite(&mut self.price, price);
        overwrite(&mut self.description, description);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn clear_item(&mut self) {
        self.restore_item(ItemFields::default());
    }

    /// Writes the server's view of an item into the item fields.
    pub fn fill_item(&mut self, item: &Item) {
        self.restore_item(ItemFields::from(item));
    }

    pub fn item_snapshot(&self) -> ItemFields {
        ItemFields {
            item_id: self.item_id.clone(),
            name: self.name.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }

    pub fn restore_item(&mut self, fields: ItemFields) {
        self.item_id = fields.item_id;
        self.name = fields.name;
        self.quantity = fields.quantity;
        self.price = fields.price;
        self.description = fields.description;
    }

    pub fn shopcart_id(&self) -> Option<ResourceId> {
        ResourceId::from_input(&self.shopcart_id)
    }

    pub fn customer_id(&self) -> Option<ResourceId> {
        ResourceId::from_input(&self.customer_id)
    }

    pub fn item_id(&self) -> Option<ResourceId> {
        ResourceId::from_input(&self.item_id)
    }

    /// True when name, quantity and price are all filled in.
    pub fn has_item_details(&self) -> bool {
        !is_blank(&self.name) && !is_blank(&self.quantity) && !is_blank(&self.price)
    }
}

impl From<&Item> for ItemFields {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            name: item.name.clone().unwrap_or_default(),
            quantity: item.quantity.map(|q| q.to_string()).unwrap_or_default(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
        }
    }
}

fn overwrite(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

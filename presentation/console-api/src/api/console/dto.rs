use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::console::form::{FormFields, FormInput};
use business::domain::console_session::model::ConsoleSession;

/// Field values typed into the console before pressing a button.
/// Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Object)]
pub struct ConsoleActionRequest {
    #[oai(skip_serializing_if_is_none)]
    pub shopcart_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub customer_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub item_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<ConsoleActionRequest> for FormInput {
    fn from(request: ConsoleActionRequest) -> Self {
        FormInput {
            shopcart_id: request.shopcart_id,
            customer_id: request.customer_id,
            item_id: request.item_id,
            name: request.name,
            quantity: request.quantity,
            price: request.price,
            description: request.description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ConsoleFormResponse {
    pub shopcart_id: String,
    pub customer_id: String,
    pub item_id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
}

impl From<FormFields> for ConsoleFormResponse {
    fn from(form: FormFields) -> Self {
        Self {
            shopcart_id: form.shopcart_id,
            customer_id: form.customer_id,
            item_id: form.item_id,
            name: form.name,
            quantity: form.quantity,
            price: form.price,
            description: form.description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ConsoleStateResponse {
    /// Console session identifier
    pub session_id: String,
    /// Current form field values
    pub form: ConsoleFormResponse,
    /// Status text shown to the operator
    pub flash: String,
    /// Last shopcart id copied
    #[oai(skip_serializing_if_is_none)]
    pub clipboard: Option<String>,
    /// HTML for the item results area
    pub item_results: String,
    /// HTML rows for the shopcart listing
    pub shopcart_rows: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ConsoleSession> for ConsoleStateResponse {
    fn from(session: ConsoleSession) -> Self {
        let state = session.state;
        Self {
            session_id: session.id.to_string(),
            clipboard: state.clipboard.value().map(ToString::to_string),
            flash: state.flash.as_str().to_string(),
            form: state.form.into(),
            item_results: state.item_results,
            shopcart_rows: state.shopcart_rows,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

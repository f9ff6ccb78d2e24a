use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use business::domain::errors::GatewayError;
use business::domain::shared::value_objects::ResourceId;
use business::domain::shopcart::gateway::ShopcartGateway;
use business::domain::shopcart::model::{
    Item, ItemDraft, ItemQuery, NewShopcart, Shopcart, ShopcartDetails, ShopcartQuery,
    ShopcartSummary, ShopcartUpdate,
};

use crate::client::ShopcartApiClient;
use crate::dto::{
    ErrorResponse, ItemRequest, ItemResponse, NewShopcartRequest, ShopcartResponse,
    ShopcartSummaryResponse, ShopcartUpdateRequest,
};

pub struct ShopcartGatewayHttp {
    client: ShopcartApiClient,
}

impl ShopcartGatewayHttp {
    pub fn new(client: ShopcartApiClient) -> Self {
        Self { client }
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "Sending shopcart API request");
        self.client
            .client
            .request(method, url)
            .header("Content-Type", "application/json")
    }

    /// Sends the request and turns transport failures and non-2xx answers
    /// into gateway errors.
    async fn send(request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request.send().await.map_err(|err| {
            tracing::warn!(error = %err, "Shopcart API unreachable");
            GatewayError::unavailable()
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = rejection_message(&body);
        tracing::warn!(status = status.as_u16(), ?message, "Shopcart API rejected request");
        Err(GatewayError::rejected(status.as_u16(), message))
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, GatewayError> {
        let response = Self::send(request).await?;
        let body = response
            .bytes()
            .await
            .map_err(|_| GatewayError::unavailable())?;
        decode(&body)
    }
}

/// Extracts the `message` field of an error body, if the body has one.
pub fn rejection_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|error| error.message)
}

/// A created or updated shopcart must name itself.
fn into_shopcart(response: ShopcartResponse) -> Result<Shopcart, GatewayError> {
    let details = ShopcartDetails::from(response);
    let id = details.id.ok_or_else(GatewayError::unexpected_response)?;
    Ok(Shopcart {
        id,
        customer_id: details.customer_id.flatten(),
        items: details.items.unwrap_or_default(),
    })
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::warn!(error = %err, "Shopcart API response did not match expected shape");
        GatewayError::unexpected_response()
    })
}

#[async_trait]
impl ShopcartGateway for ShopcartGatewayHttp {
    async fn create_shopcart(&self, shopcart: &NewShopcart) -> Result<Shopcart, GatewayError> {
        let request = self
            .request(Method::POST, self.client.shopcarts_url())
            .json(&NewShopcartRequest::from(shopcart));
        let created: ShopcartResponse = Self::fetch(request).await?;
        into_shopcart(created)
    }

    async fn update_shopcart(
        &self,
        id: &ResourceId,
        shopcart: &ShopcartUpdate,
    ) -> Result<Shopcart, GatewayError> {
        let request = self
            .request(Method::PUT, self.client.shopcart_url(id.as_str()))
            .json(&ShopcartUpdateRequest::new(id, shopcart));
        let updated: ShopcartResponse = Self::fetch(request).await?;
        into_shopcart(updated)
    }

    async fn list_shopcarts(
        &self,
        query: &ShopcartQuery,
    ) -> Result<Vec<ShopcartSummary>, GatewayError> {
        let mut request = self.request(Method::GET, self.client.shopcarts_url());
        if let Some(customer_id) = &query.customer_id {
            request = request.query(&[("customer_id", customer_id.as_str())]);
        }
        if let Some(item_name) = &query.item_name {
            request = request.query(&[("item_name", item_name.as_str())]);
        }
        let shopcarts: Vec<ShopcartSummaryResponse> = Self::fetch(request).await?;
        Ok(shopcarts.into_iter().map(Into::into).collect())
    }

    async fn get_shopcart(&self, id: &ResourceId) -> Result<ShopcartDetails, GatewayError> {
        let request = self.request(Method::GET, self.client.shopcart_url(id.as_str()));
        let shopcart: ShopcartResponse = Self::fetch(request).await?;
        Ok(shopcart.into())
    }

    async fn delete_shopcart(&self, id: &ResourceId) -> Result<(), GatewayError> {
        let request = self.request(Method::DELETE, self.client.shopcart_url(id.as_str()));
        Self::send(request).await.map(|_| ())
    }

    async fn list_items(
        &self,
        shopcart_id: &ResourceId,
        query: &ItemQuery,
    ) -> Result<Vec<Item>, GatewayError> {
        let mut request = self.request(Method::GET, self.client.items_url(shopcart_id.as_str()));
        if let Some(name) = &query.name {
            request = request.query(&[("name", name.as_str())]);
        }
        if let Some(quantity) = query.quantity {
            request = request.query(&[("quantity", quantity)]);
        }
        let items: Vec<ItemResponse> = Self::fetch(request).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    async fn add_item(
        &self,
        shopcart_id: &ResourceId,
        item: &ItemDraft,
    ) -> Result<Item, GatewayError> {
        let request = self
            .request(Method::POST, self.client.items_url(shopcart_id.as_str()))
            .json(&ItemRequest::from(item));
        let created: ItemResponse = Self::fetch(request).await?;
        Ok(created.into())
    }

    async fn get_item(
        &self,
        shopcart_id: &ResourceId,
        item_id: &ResourceId,
    ) -> Result<Item, GatewayError> {
        let url = self
            .client
            .item_url(shopcart_id.as_str(), item_id.as_str());
        let item: ItemResponse = Self::fetch(self.request(Method::GET, url)).await?;
        Ok(item.into())
    }

    async fn update_item(
        &self,
        shopcart_id: &ResourceId,
        item_id: &ResourceId,
        item: &ItemDraft,
    ) -> Result<Item, GatewayError> {
        let url = self
            .client
            .item_url(shopcart_id.as_str(), item_id.as_str());
        let request = self.request(Method::PUT, url).json(&ItemRequest::from(item));
        let updated: ItemResponse = Self::fetch(request).await?;
        Ok(updated.into())
    }

    async fn delete_item(
        &self,
        shopcart_id: &ResourceId,
        item_id: &ResourceId,
    ) -> Result<(), GatewayError> {
        let url = self
            .client
            .item_url(shopcart_id.as_str(), item_id.as_str());
        Self::send(self.request(Method::DELETE, url)).await.map(|_| ())
    }

    async fn clear_items(&self, shopcart_id: &ResourceId) -> Result<(), GatewayError> {
        let url = self.client.items_url(shopcart_id.as_str());
        Self::send(self.request(Method::DELETE, url)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_extract_message_from_error_body() {
        let body = br#"{"status": 404, "error": "Not Found", "message": "Shopcart with id '9' was not found."}"#;

        assert_eq!(
            rejection_message(body),
            Some("Shopcart with id '9' was not found.".to_string())
        );
    }

    #[test]
    fn should_have_no_message_for_plain_text_body() {
        assert_eq!(rejection_message(b"<html>502 Bad Gateway</html>"), None);
        assert_eq!(rejection_message(b""), None);
    }

    #[test]
    fn should_reject_listing_that_is_not_an_array() {
        let result = decode::<Vec<ShopcartSummaryResponse>>(br#"{"id": 7}"#);

        assert_eq!(result.unwrap_err(), GatewayError::UnexpectedResponse);
    }

    #[test]
    fn should_reject_items_that_are_not_a_list() {
        let result = decode::<ShopcartResponse>(br#"{"customer_id": 42, "items": "none"}"#);

        assert_eq!(result.unwrap_err(), GatewayError::UnexpectedResponse);
    }

    #[test]
    fn should_require_id_in_updated_shopcart() {
        let response = decode::<ShopcartResponse>(br#"{"customer_id": 1234567}"#).unwrap();

        assert_eq!(
            into_shopcart(response).unwrap_err(),
            GatewayError::UnexpectedResponse
        );
    }

    #[test]
    fn should_map_updated_shopcart() {
        let response =
            decode::<ShopcartResponse>(br#"{"id": 7, "customer_id": 1234567, "items": []}"#)
                .unwrap();

        let shopcart = into_shopcart(response).unwrap();

        assert_eq!(shopcart.id, ResourceId::new("7"));
        assert_eq!(shopcart.customer_id, Some(ResourceId::new("1234567")));
    }

    #[test]
    fn should_decode_item_listing() {
        let items = decode::<Vec<ItemResponse>>(
            br#"[{"id": 1, "name": "Milk", "quantity": 7, "price": 3.5}]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(Item::from(items.into_iter().next().unwrap()).quantity, Some(7));
    }

    #[tokio::test]
    async fn should_report_unreachable_server_as_unavailable() {
        let client = ShopcartApiClient::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            Some(std::time::Duration::from_secs(2)),
        )
        .unwrap();
        let gateway = ShopcartGatewayHttp::new(client);

        let result = gateway.list_shopcarts(&ShopcartQuery::all()).await;

        assert_eq!(result.unwrap_err(), GatewayError::Unavailable);
    }
}

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::ResourceId;

use super::model::{
    Item, ItemDraft, ItemQuery, NewShopcart, Shopcart, ShopcartDetails, ShopcartQuery,
    ShopcartSummary, ShopcartUpdate,
};

/// Port to the remote shopcart REST API.
#[async_trait]
pub trait ShopcartGateway: Send + Sync {
    async fn create_shopcart(&self, shopcart: &NewShopcart) -> Result<Shopcart, GatewayError>;
    async fn list_shopcarts(
        &self,
        query: &ShopcartQuery,
    ) -> Result<Vec<ShopcartSummary>, GatewayError>;
    async fn get_shopcart(&self, id: &ResourceId) -> Result<ShopcartDetails, GatewayError>;
    async fn update_shopcart(
        &self,
        id: &ResourceId,
        shopcart: &ShopcartUpdate,
    ) -> Result<Shopcart, GatewayError>;
    async fn delete_shopcart(&self, id: &ResourceId) -> Result<(), GatewayError>;
    async fn list_items(
        &self,
        shopcart_id: &ResourceId,
        query: &ItemQuery,
    ) -> Result<Vec<Item>, GatewayError>;
    async fn add_item(
        &self,
        shopcart_id: &ResourceId,
        item: &ItemDraft,
    ) -> Result<Item, GatewayError>;
    async fn get_item(
        &self,
        shopcart_id: &ResourceId,
        item_id: &ResourceId,
    ) -> Result<Item, GatewayError>;
    async fn update_item(
        &self,
        shopcart_id: &ResourceId,
        item_id: &ResourceId,
        item: &ItemDraft,
    ) -> Result<Item, GatewayError>;
    async fn delete_item(
        &self,
        shopcart_id: &ResourceId,
        item_id: &ResourceId,
    ) -> Result<(), GatewayError>;
    async fn clear_items(&self, shopcart_id: &ResourceId) -> Result<(), GatewayError>;
}

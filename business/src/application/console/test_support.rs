use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::application::console::add_item::AddItemUseCaseImpl;
use crate::application::console::clear_form::ClearFormUseCaseImpl;
use crate::application::console::clear_items::ClearItemsUseCaseImpl;
use crate::application::console::controller::ConsoleController;
use crate::application::console::copy_id::CopyShopcartIdUseCaseImpl;
use crate::application::console::create_shopcart::CreateShopcartUseCaseImpl;
use crate::application::console::delete_item::DeleteItemUseCaseImpl;
use crate::application::console::delete_shopcart::DeleteShopcartUseCaseImpl;
use crate::application::console::find_by_customer::FindShopcartsByCustomerUseCaseImpl;
use crate::application::console::find_by_item::FindShopcartsByItemUseCaseImpl;
use crate::application::console::list_items::ListItemsUseCaseImpl;
use crate::application::console::list_shopcarts::ListShopcartsUseCaseImpl;
use crate::application::console::paste_id::PasteShopcartIdUseCaseImpl;
use crate::application::console::retrieve_item::RetrieveItemUseCaseImpl;
use crate::application::console::search_shopcart::SearchShopcartUseCaseImpl;
use crate::application::console::update_item::UpdateItemUseCaseImpl;
use crate::application::console::update_shopcart::UpdateShopcartUseCaseImpl;
use crate::domain::console::state::ConsoleState;
use crate::domain::console_session::model::ConsoleSession;
use crate::domain::console_session::repository::ConsoleSessionRepository;
use crate::domain::errors::{GatewayError, RepositoryError};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ResourceId;
use crate::domain::shopcart::gateway::ShopcartGateway;
use crate::domain::shopcart::model::{
    Item, ItemDraft, ItemQuery, NewShopcart, Shopcart, ShopcartDetails, ShopcartQuery,
    ShopcartSummary, ShopcartUpdate,
};

mock! {
    pub Gateway {}

    #[async_trait]
    impl ShopcartGateway for Gateway {
        async fn create_shopcart(&self, shopcart: &NewShopcart) -> Result<Shopcart, GatewayError>;
        async fn list_shopcarts(&self, query: &ShopcartQuery) -> Result<Vec<ShopcartSummary>, GatewayError>;
        async fn get_shopcart(&self, id: &ResourceId) -> Result<ShopcartDetails, GatewayError>;
        async fn update_shopcart(&self, id: &ResourceId, shopcart: &ShopcartUpdate) -> Result<Shopcart, GatewayError>;
        async fn delete_shopcart(&self, id: &ResourceId) -> Result<(), GatewayError>;
        async fn list_items(&self, shopcart_id: &ResourceId, query: &ItemQuery) -> Result<Vec<Item>, GatewayError>;
        async fn add_item(&self, shopcart_id: &ResourceId, item: &ItemDraft) -> Result<Item, GatewayError>;
        async fn get_item(&self, shopcart_id: &ResourceId, item_id: &ResourceId) -> Result<Item, GatewayError>;
        async fn update_item(&self, shopcart_id: &ResourceId, item_id: &ResourceId, item: &ItemDraft) -> Result<Item, GatewayError>;
        async fn delete_item(&self, shopcart_id: &ResourceId, item_id: &ResourceId) -> Result<(), GatewayError>;
        async fn clear_items(&self, shopcart_id: &ResourceId) -> Result<(), GatewayError>;
    }
}

mock! {
    pub SessionRepo {}

    #[async_trait]
    impl ConsoleSessionRepository for SessionRepo {
        async fn get_by_id(&self, id: Uuid) -> Result<ConsoleSession, RepositoryError>;
        async fn save(&self, session: &ConsoleSession) -> Result<(), RepositoryError>;
        async fn update(&self, session: &ConsoleSession) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn item(id: &str, name: &str, quantity: i64, price: f64) -> Item {
    Item {
        id: Some(ResourceId::new(id)),
        shopcart_id: None,
        name: Some(name.to_string()),
        quantity: Some(quantity),
        price: Some(price),
        description: Some(format!("{name} description")),
    }
}

pub fn shopcart_with(customer_id: &str, items: Vec<Item>) -> ShopcartDetails {
    ShopcartDetails {
        id: None,
        customer_id: Some(Some(ResourceId::new(customer_id))),
        items: Some(items),
    }
}

/// State with every item field filled in for shopcart 7.
pub fn item_form_state() -> ConsoleState {
    let mut state = ConsoleState::new();
    state.form.shopcart_id = "7".to_string();
    state.form.item_id = "1".to_string();
    state.form.name = "Milk".to_string();
    state.form.quantity = "2".to_string();
    state.form.price = "3.5".to_string();
    state.form.description = "Whole".to_string();
    state
}

/// Controller wired with real use cases over one mocked gateway.
pub fn console_controller(gateway: MockGateway) -> ConsoleController {
    let gateway: Arc<dyn ShopcartGateway> = Arc::new(gateway);
    let logger = mock_logger();
    let search = Arc::new(SearchShopcartUseCaseImpl {
        gateway: gateway.clone(),
        logger: logger.clone(),
    });
    let list = Arc::new(ListShopcartsUseCaseImpl {
        gateway: gateway.clone(),
        logger: logger.clone(),
    });

    ConsoleController {
        copy_id: Arc::new(CopyShopcartIdUseCaseImpl {
            logger: logger.clone(),
        }),
        paste_id: Arc::new(PasteShopcartIdUseCaseImpl {
            logger: logger.clone(),
        }),
        clear_form: Arc::new(ClearFormUseCaseImpl {
            logger: logger.clone(),
        }),
        create_shopcart: Arc::new(CreateShopcartUseCaseImpl {
            gateway: gateway.clone(),
            list: list.clone(),
            logger: logger.clone(),
        }),
        update_shopcart: Arc::new(UpdateShopcartUseCaseImpl {
            gateway: gateway.clone(),
            list: list.clone(),
            logger: logger.clone(),
        }),
        delete_shopcart: Arc::new(DeleteShopcartUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        add_item: Arc::new(AddItemUseCaseImpl {
            gateway: gateway.clone(),
            search: search.clone(),
            logger: logger.clone(),
        }),
        update_item: Arc::new(UpdateItemUseCaseImpl {
            gateway: gateway.clone(),
            search: search.clone(),
            logger: logger.clone(),
        }),
        search: search.clone(),
        list,
        find_by_customer: Arc::new(FindShopcartsByCustomerUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        retrieve_item: Arc::new(RetrieveItemUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        delete_item: Arc::new(DeleteItemUseCaseImpl {
            gateway: gateway.clone(),
            search: search.clone(),
            logger: logger.clone(),
        }),
        clear_items: Arc::new(ClearItemsUseCaseImpl {
            gateway: gateway.clone(),
            search,
            logger: logger.clone(),
        }),
        list_items: Arc::new(ListItemsUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        find_by_item: Arc::new(FindShopcartsByItemUseCaseImpl {
            gateway,
            logger: logger.clone(),
        }),
        logger,
    }
}

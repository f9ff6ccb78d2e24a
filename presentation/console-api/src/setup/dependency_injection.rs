use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;
use session_store::console_session::repository::ConsoleSessionRepositoryInMemory;
use shopcart_api::client::ShopcartApiClient;
use shopcart_api::gateway::ShopcartGatewayHttp;

use business::application::console::add_item::AddItemUseCaseImpl;
use business::application::console::clear_form::ClearFormUseCaseImpl;
use business::application::console::clear_items::ClearItemsUseCaseImpl;
use business::application::console::controller::ConsoleController;
use business::application::console::copy_id::CopyShopcartIdUseCaseImpl;
use business::application::console::create_shopcart::CreateShopcartUseCaseImpl;
use business::application::console::delete_item::DeleteItemUseCaseImpl;
use business::application::console::delete_shopcart::DeleteShopcartUseCaseImpl;
use business::application::console::find_by_customer::FindShopcartsByCustomerUseCaseImpl;
use business::application::console::find_by_item::FindShopcartsByItemUseCaseImpl;
use business::application::console::list_items::ListItemsUseCaseImpl;
use business::application::console::list_shopcarts::ListShopcartsUseCaseImpl;
use business::application::console::paste_id::PasteShopcartIdUseCaseImpl;
use business::application::console::retrieve_item::RetrieveItemUseCaseImpl;
use business::application::console::search_shopcart::SearchShopcartUseCaseImpl;
use business::application::console::update_item::UpdateItemUseCaseImpl;
use business::application::console::update_shopcart::UpdateShopcartUseCaseImpl;
use business::application::console_session::close::CloseConsoleSessionUseCaseImpl;
use business::application::console_session::get_by_id::GetConsoleSessionUseCaseImpl;
use business::application::console_session::open::OpenConsoleSessionUseCaseImpl;
use business::application::console_session::run_action::RunConsoleActionUseCaseImpl;
use business::domain::console_session::repository::ConsoleSessionRepository;
use business::domain::logger::Logger;
use business::domain::shopcart::gateway::ShopcartGateway;

use crate::api::console::routes::ConsoleApi;
use crate::config::session_config::SessionConfig;
use crate::config::shopcart_api_config::ShopcartApiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub console_api: ConsoleApi,
}

impl DependencyContainer {
    /// # Errors
    /// Returns error if the shopcart API client cannot be built
    pub fn new(
        shopcart_api: &ShopcartApiConfig,
        session: &SessionConfig,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let client = ShopcartApiClient::new(shopcart_api.base_url.clone(), shopcart_api.timeout)
            .context("failed to build the shopcart API client")?;
        let gateway = Arc::new(ShopcartGatewayHttp::new(client));
        let repository = Arc::new(match session.idle_ttl {
            Some(ttl) => ConsoleSessionRepositoryInMemory::with_idle_ttl(ttl),
            None => ConsoleSessionRepositoryInMemory::new(),
        });

        Ok(Self {
            health_api,
            console_api: console_api(gateway, repository, logger),
        })
    }
}

/// Wires every console button to its use case.
pub fn console_controller(
    gateway: Arc<dyn ShopcartGateway>,
    logger: Arc<dyn Logger>,
) -> ConsoleController {
    // Refresh use cases shared by the mutating actions
    let search = Arc::new(SearchShopcartUseCaseImpl {
        gateway: gateway.clone(),
        logger: logger.clone(),
    });
    let list = Arc::new(ListShopcartsUseCaseImpl {
        gateway: gateway.clone(),
        logger: logger.clone(),
    });

    // Local actions
    let copy_id = Arc::new(CopyShopcartIdUseCaseImpl {
        logger: logger.clone(),
    });
    let paste_id = Arc::new(PasteShopcartIdUseCaseImpl {
        logger: logger.clone(),
    });
    let clear_form = Arc::new(ClearFormUseCaseImpl {
        logger: logger.clone(),
    });

    // Shopcart use cases
    let create_shopcart = Arc::new(CreateShopcartUseCaseImpl {
        gateway: gateway.clone(),
        list: list.clone(),
        logger: logger.clone(),
    });
    let update_shopcart = Arc::new(UpdateShopcartUseCaseImpl {
        gateway: gateway.clone(),
        list: list.clone(),
        logger: logger.clone(),
    });
    let delete_shopcart = Arc::new(DeleteShopcartUseCaseImpl {
        gateway: gateway.clone(),
        logger: logger.clone(),
    });
    let find_by_customer = Arc::new(FindShopcartsByCustomerUseCaseImpl {
        gateway: gateway.clone(),
        logger: logger.clone(),
    });
    let find_by_item = Arc::new(FindShopcartsByItemUseCaseImpl {
        gateway: gateway.clone(),
        logger: logger.clone(),
    });

    // Item use cases
    let add_item = Arc::new(AddItemUseCaseImpl {
        gateway: gateway.clone(),
        search: search.clone(),
        logger: logger.clone(),
    });
    let update_item = Arc::new(UpdateItemUseCaseImpl {
        gateway: gateway.clone(),
        search: search.clone(),
        logger: logger.clone(),
    });
    let retrieve_item = Arc::new(RetrieveItemUseCaseImpl {
        gateway: gateway.clone(),
        logger: logger.clone(),
    });
    let delete_item = Arc::new(DeleteItemUseCaseImpl {
        gateway: gateway.clone(),
        search: search.clone(),
        logger: logger.clone(),
    });
    let clear_items = Arc::new(ClearItemsUseCaseImpl {
        gateway: gateway.clone(),
        search: search.clone(),
        logger: logger.clone(),
    });
    let list_items = Arc::new(ListItemsUseCaseImpl {
        gateway,
        logger: logger.clone(),
    });

    ConsoleController {
        copy_id,
        paste_id,
        clear_form,
        create_shopcart,
        update_shopcart,
        delete_shopcart,
        add_item,
        update_item,
        search,
        list,
        find_by_customer,
        retrieve_item,
        delete_item,
        clear_items,
        list_items,
        find_by_item,
        logger,
    }
}

pub fn console_api(
    gateway: Arc<dyn ShopcartGateway>,
    repository: Arc<dyn ConsoleSessionRepository>,
    logger: Arc<dyn Logger>,
) -> ConsoleApi {
    let controller = Arc::new(console_controller(gateway, logger.clone()));

    let open_use_case = Arc::new(OpenConsoleSessionUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let get_use_case = Arc::new(GetConsoleSessionUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let close_use_case = Arc::new(CloseConsoleSessionUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let run_action_use_case = Arc::new(RunConsoleActionUseCaseImpl {
        repository,
        controller,
        logger,
    });

    ConsoleApi::new(
        open_use_case,
        get_use_case,
        close_use_case,
        run_action_use_case,
    )
}

use std::sync::Arc;

use crate::domain::console::action::ConsoleAction;
use crate::domain::console::state::ConsoleState;
use crate::domain::console::use_cases::add_item::AddItemUseCase;
use crate::domain::console::use_cases::clear_form::ClearFormUseCase;
use crate::domain::console::use_cases::clear_items::ClearItemsUseCase;
use crate::domain::console::use_cases::copy_id::CopyShopcartIdUseCase;
use crate::domain::console::use_cases::create_shopcart::CreateShopcartUseCase;
use crate::domain::console::use_cases::delete_item::DeleteItemUseCase;
use crate::domain::console::use_cases::delete_shopcart::DeleteShopcartUseCase;
use crate::domain::console::use_cases::find_by_customer::FindShopcartsByCustomerUseCase;
use crate::domain::console::use_cases::find_by_item::FindShopcartsByItemUseCase;
use crate::domain::console::use_cases::list_items::ListItemsUseCase;
use crate::domain::console::use_cases::list_shopcarts::ListShopcartsUseCase;
use crate::domain::console::use_cases::paste_id::PasteShopcartIdUseCase;
use crate::domain::console::use_cases::retrieve_item::RetrieveItemUseCase;
use crate::domain::console::use_cases::search_shopcart::SearchShopcartUseCase;
use crate::domain::console::use_cases::update_item::UpdateItemUseCase;
use crate::domain::console::use_cases::update_shopcart::UpdateShopcartUseCase;
use crate::domain::logger::Logger;

/// Routes console actions to their use cases and turns failures into flash
/// text.
pub struct ConsoleController {
    pub copy_id: Arc<dyn CopyShopcartIdUseCase>,
    pub paste_id: Arc<dyn PasteShopcartIdUseCase>,
    pub clear_form: Arc<dyn ClearFormUseCase>,
    pub create_shopcart: Arc<dyn CreateShopcartUseCase>,
    pub update_shopcart: Arc<dyn UpdateShopcartUseCase>,
    pub delete_shopcart: Arc<dyn DeleteShopcartUseCase>,
    pub add_item: Arc<dyn AddItemUseCase>,
    pub update_item: Arc<dyn UpdateItemUseCase>,
    pub search: Arc<dyn SearchShopcartUseCase>,
    pub list: Arc<dyn ListShopcartsUseCase>,
    pub find_by_customer: Arc<dyn FindShopcartsByCustomerUseCase>,
    pub retrieve_item: Arc<dyn RetrieveItemUseCase>,
    pub delete_item: Arc<dyn DeleteItemUseCase>,
    pub clear_items: Arc<dyn ClearItemsUseCase>,
    pub list_items: Arc<dyn ListItemsUseCase>,
    pub find_by_item: Arc<dyn FindShopcartsByItemUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl ConsoleController {
    pub async fn dispatch(&self, action: ConsoleAction, state: &mut ConsoleState) {
        self.logger.debug(&format!("Running console action: {}", action));

        let result = match action {
            ConsoleAction::CopyId => self.copy_id.execute(state).await,
            ConsoleAction::PasteId => self.paste_id.execute(state).await,
            ConsoleAction::Clear => self.clear_form.execute(state).await,
            ConsoleAction::CreateShopcart => self.create_shopcart.execute(state).await,
            ConsoleAction::UpdateShopcart => self.update_shopcart.execute(state).await,
            ConsoleAction::DeleteShopcart => self.delete_shopcart.execute(state).await,
            ConsoleAction::CreateItem => self.add_item.execute(state).await,
            ConsoleAction::UpdateItem => self.update_item.execute(state).await,
            ConsoleAction::Search => self.search.execute(state).await,
            ConsoleAction::List => self.list.execute(state).await,
            ConsoleAction::FindByCustomer => self.find_by_customer.execute(state).await,
            ConsoleAction::RetrieveItem => self.retrieve_item.execute(state).await,
            ConsoleAction::DeleteItem => self.delete_item.execute(state).await,
            ConsoleAction::ClearItems => self.clear_items.execute(state).await,
            ConsoleAction::ListItems => self.list_items.execute(state).await,
            ConsoleAction::FindByItem => self.find_by_item.execute(state).await,
        };

        if let Err(err) = result {
            let message = err.flash_message();
            self.logger
                .warn(&format!("Console action {} failed ({}): {}", action, err, message));
            state.flash.show(message);
        }
    }
}

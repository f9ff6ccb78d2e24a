/// Buttons of the console. Names match the button ids without `-btn`;
/// the bare `create`, `delete` and `update` button ids are aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleAction {
    CopyId,
    PasteId,
    Clear,
    CreateShopcart,
    UpdateShopcart,
    DeleteShopcart,
    CreateItem,
    UpdateItem,
    Search,
    List,
    FindByCustomer,
    RetrieveItem,
    DeleteItem,
    ClearItems,
    ListItems,
    FindByItem,
}

impl ConsoleAction {
    pub const ALL: [ConsoleAction; 16] = [
        ConsoleAction::CopyId,
        ConsoleAction::PasteId,
        ConsoleAction::Clear,
        ConsoleAction::CreateShopcart,
        ConsoleAction::UpdateShopcart,
        ConsoleAction::DeleteShopcart,
        ConsoleAction::CreateItem,
        ConsoleAction::UpdateItem,
        ConsoleAction::Search,
        ConsoleAction::List,
        ConsoleAction::FindByCustomer,
        ConsoleAction::RetrieveItem,
        ConsoleAction::DeleteItem,
        ConsoleAction::ClearItems,
        ConsoleAction::ListItems,
        ConsoleAction::FindByItem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleAction::CopyId => "copy-id",
            ConsoleAction::PasteId => "paste-id",
            ConsoleAction::Clear => "clear",
            ConsoleAction::CreateShopcart => "create-shopcart",
            ConsoleAction::UpdateShopcart => "update-shopcart",
            ConsoleAction::DeleteShopcart => "delete-shopcart",
            ConsoleAction::CreateItem => "create-item",
            ConsoleAction::UpdateItem => "update-item",
            ConsoleAction::Search => "search",
            ConsoleAction::List => "list",
            ConsoleAction::FindByCustomer => "find-by-customer",
            ConsoleAction::RetrieveItem => "retrieve-item",
            ConsoleAction::DeleteItem => "delete-item",
            ConsoleAction::ClearItems => "clear-items",
            ConsoleAction::ListItems => "list-items",
            ConsoleAction::FindByItem => "find-by-item",
        }
    }
}

impl std::fmt::Display for ConsoleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ConsoleAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        let name = name.strip_suffix("-btn").unwrap_or(&name);
        match name {
            "create" => Ok(ConsoleAction::CreateShopcart),
            "delete" => Ok(ConsoleAction::DeleteShopcart),
            "add-item" => Ok(ConsoleAction::CreateItem),
            "update" => Ok(ConsoleAction::UpdateItem),
            other => ConsoleAction::ALL
                .into_iter()
                .find(|action| action.as_str() == other)
                .ok_or_else(|| format!("Invalid console action: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_action_from_its_name() {
        for action in ConsoleAction::ALL {
            assert_eq!(action.as_str().parse::<ConsoleAction>(), Ok(action));
        }
    }

    #[test]
    fn should_accept_button_ids_and_aliases() {
        assert_eq!("search-btn".parse::<ConsoleAction>(), Ok(ConsoleAction::Search));
        assert_eq!("create".parse::<ConsoleAction>(), Ok(ConsoleAction::CreateShopcart));
        assert_eq!("add-item".parse::<ConsoleAction>(), Ok(ConsoleAction::CreateItem));
        assert_eq!("List".parse::<ConsoleAction>(), Ok(ConsoleAction::List));
        assert_eq!("delete-btn".parse::<ConsoleAction>(), Ok(ConsoleAction::DeleteShopcart));
        assert_eq!("update-btn".parse::<ConsoleAction>(), Ok(ConsoleAction::UpdateItem));
    }

    #[test]
    fn should_reject_unknown_action() {
        assert!("launch".parse::<ConsoleAction>().is_err());
    }
}

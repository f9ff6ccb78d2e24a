pub mod application {
    pub mod console {
        pub mod add_item;
        pub mod clear_form;
        pub mod clear_items;
        pub mod controller;
        pub mod copy_id;
        pub mod create_shopcart;
        pub mod delete_item;
        pub mod delete_shopcart;
        pub mod find_by_customer;
        pub mod find_by_item;
        pub mod list_items;
        pub mod list_shopcarts;
        pub mod paste_id;
        pub mod retrieve_item;
        pub mod search_shopcart;
        pub mod update_item;
        pub mod update_shopcart;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
    pub mod console_session {
        pub mod close;
        pub mod get_by_id;
        pub mod open;
        pub mod run_action;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod console {
        pub mod action;
        pub mod errors;
        pub mod form;
        pub mod render;
        pub mod state;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear_form;
            pub mod clear_items;
            pub mod copy_id;
            pub mod create_shopcart;
            pub mod delete_item;
            pub mod delete_shopcart;
            pub mod find_by_customer;
            pub mod find_by_item;
            pub mod list_items;
            pub mod list_shopcarts;
            pub mod paste_id;
            pub mod retrieve_item;
            pub mod search_shopcart;
            pub mod update_item;
            pub mod update_shopcart;
        }
    }
    pub mod console_session {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod close;
            pub mod get_by_id;
            pub mod open;
            pub mod run_action;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod shopcart {
        pub mod gateway;
        pub mod model;
    }
}

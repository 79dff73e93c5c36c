pub mod application {
    pub mod cart {
        pub mod add_catalog_product;
        pub mod add_item;
        pub mod client;
        pub mod get_checkout_url;
        pub mod remove_item;
        pub mod resolve;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_slug;
        pub mod get_featured;
        pub mod get_storefront_product;
        pub mod list_storefront_products;
    }
    #[cfg(test)]
    pub(crate) mod mocks;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod state;
        pub mod use_cases {
            pub mod add_catalog_product;
            pub mod add_item;
            pub mod get_checkout_url;
            pub mod remove_item;
            pub mod resolve;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_slug;
            pub mod get_featured;
            pub mod get_storefront_product;
            pub mod list_storefront_products;
        }
    }
}

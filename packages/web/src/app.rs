//! Root application component

use dioxus::prelude::*;
use tinyhouse_client::{ClientConfig, GraphQLClient};

use crate::components::Listings;

/// Client config for the API served from the page's own origin
fn same_origin_config() -> ClientConfig {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map(|origin| ClientConfig::for_origin(&origin))
        .unwrap_or_default()
}

/// Root application component
#[component]
pub fn App() -> Element {
    // One client for the whole tree; hooks pick it up from context
    use_context_provider(|| GraphQLClient::new(same_origin_config()));

    rsx! {
        main {
            class: "max-w-3xl mx-auto p-8",
            Listings { title: "TinyHouse Listings" }
        }
    }
}

//! Listing view

use dioxus::prelude::*;
use tinyhouse_client::{
    DeleteListingData, DeleteListingVariables, Listing, ListingsData, DELETE_LISTING, LISTINGS,
};

use super::LoadingMessage;
use crate::hooks::{use_mutation, use_query};

/// All listings with a delete control per row.
///
/// The list is refetched after a delete only when the delete succeeded.
#[component]
pub fn Listings(title: String) -> Element {
    let listings = use_query::<ListingsData>(LISTINGS);
    let delete = use_mutation::<DeleteListingData, DeleteListingVariables>(DELETE_LISTING);

    let handle_delete = {
        let listings = listings.clone();
        let delete = delete.clone();
        move |id: String| {
            let listings = listings.clone();
            let delete = delete.clone();
            spawn(async move {
                if delete.execute(Some(DeleteListingVariables { id })).await.is_ok() {
                    listings.refetch();
                }
            });
        }
    };

    let state = listings.state();
    if state.loading {
        return rsx! { LoadingMessage {} };
    }
    if state.error {
        return rsx! {
            h2 {
                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                "Uh oh! Something went wrong - please try again later."
            }
        };
    }

    let deletion = delete.state();

    rsx! {
        div {
            h2 { class: "text-2xl font-bold text-gray-900 mb-6", "{title}" }

            if let Some(data) = state.data {
                ul {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                    for listing in data.listings {
                        ListingRow {
                            key: "{listing.id}",
                            listing: listing.clone(),
                            on_delete: handle_delete.clone()
                        }
                    }
                }
            }

            if deletion.loading {
                h4 { class: "text-sm text-gray-500 mt-4", "Deletion in progress..." }
            }
            if deletion.error {
                h4 { class: "text-sm text-red-700 mt-4", "Deletion error please try again." }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ListingRowProps {
    listing: Listing,
    on_delete: EventHandler<String>,
}

#[component]
fn ListingRow(props: ListingRowProps) -> Element {
    let listing = &props.listing;

    rsx! {
        li {
            class: "p-4 flex items-center justify-between hover:bg-gray-50",
            div {
                class: "flex-1 min-w-0",
                h3 { class: "text-sm font-medium text-gray-900 truncate", "{listing.title}" }
                p { class: "text-sm text-gray-500", "{listing.address}" }
            }
            button {
                class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                onclick: {
                    let id = listing.id.clone();
                    move |_| props.on_delete.call(id.clone())
                },
                "Delete"
            }
        }
    }
}

//! Loading indicator

use dioxus::prelude::*;

/// Placeholder shown while the listings query is pending
#[component]
pub fn LoadingMessage() -> Element {
    rsx! {
        div {
            class: "flex items-center gap-2 text-gray-500",
            div {
                class: "flex space-x-1",
                div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce" }
                div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            }
            h2 { class: "text-lg", "loading..." }
        }
    }
}

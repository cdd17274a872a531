//! TinyHouse - Dioxus web frontend
//!
//! Renders the listings view against the GraphQL API mounted at `/api`
//! on the serving origin.
//!
//! ## Running
//!
//! ```bash
//! dx serve --platform web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod hooks;

fn main() {
    // Initialize logging
    dioxus::logger::initialize_default();

    dioxus::launch(app::App);
}

//! Listing view rendering.
//!
//! Rendering is a pure function of the two hook states, so it can be
//! tested without a terminal. Colour is applied only when printing.

use colored::Colorize;
use tinyhouse_client::{DeleteListingData, ListingsData, RequestState, Viewer};

pub const TITLE: &str = "TinyHouse Listings";
pub const LOADING: &str = "loading...";
pub const QUERY_ERROR: &str = "Uh oh! Something went wrong - please try again later.";
pub const DELETE_PENDING: &str = "Deletion in progress...";
pub const DELETE_ERROR: &str = "Deletion error please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Plain,
    Muted,
    Warning,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// Lines for the listings screen.
///
/// A pending or failed query replaces the whole screen; otherwise the title,
/// one row per listing, and the delete status follow each other.
pub fn listings(
    title: &str,
    query: &RequestState<ListingsData>,
    delete: &RequestState<DeleteListingData>,
) -> Vec<Line> {
    if query.loading {
        return vec![Line::new(Tone::Muted, LOADING)];
    }
    if query.error {
        return vec![Line::new(Tone::Failure, QUERY_ERROR)];
    }

    let mut lines = vec![Line::new(Tone::Heading, title)];
    if let Some(data) = query.data() {
        lines.extend(data.listings.iter().map(|listing| {
            Line::new(
                Tone::Plain,
                format!(
                    "{}  {}  ({} guests, ${}/night, rating {:.1})",
                    listing.id,
                    listing.title,
                    listing.num_of_guests,
                    listing.price / 100,
                    listing.rating
                ),
            )
        }));
    }
    if delete.loading {
        lines.push(Line::new(Tone::Warning, DELETE_PENDING));
    }
    if delete.error {
        lines.push(Line::new(Tone::Failure, DELETE_ERROR));
    }
    lines
}

pub fn viewer(viewer: &Viewer) -> Vec<Line> {
    if !viewer.is_signed_in() {
        return vec![Line::new(Tone::Muted, "Signed out")];
    }

    let mut lines = vec![Line::new(
        Tone::Heading,
        format!("Signed in as {}", viewer.id.as_deref().unwrap_or_default()),
    )];
    if let Some(avatar) = &viewer.avatar {
        lines.push(Line::new(Tone::Plain, format!("avatar: {}", avatar)));
    }
    if let Some(has_wallet) = viewer.has_wallet {
        lines.push(Line::new(Tone::Plain, format!("wallet connected: {}", has_wallet)));
    }
    lines
}

pub fn print(lines: &[Line]) {
    for line in lines {
        let text = line.text.as_str();
        match line.tone {
            Tone::Heading => println!("{}", text.bold()),
            Tone::Plain => println!("  {}", text),
            Tone::Muted => println!("{}", text.dimmed()),
            Tone::Warning => println!("{}", text.yellow()),
            Tone::Failure => println!("{}", text.red().bold()),
        }
    }
}

//! UI components

mod listings;
mod loading;

pub use listings::*;
pub use loading::*;

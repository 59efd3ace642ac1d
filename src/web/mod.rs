//! Web module - page rendering and serving

mod page;
mod server;

pub use page::{overview_message, render_page, PageError, BAR_ID, MAP_ID, PAGE_TITLE};
pub use server::{router, serve, ServerError};

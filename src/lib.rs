/// Tab Corral - close or group browser tabs related to the current one
/// Built with Rust + WASM

mod bridge;
mod browser;
mod error;
mod operations;
mod tab_data;
mod url_parser;

pub use bridge::ChromeTabs;
pub use browser::BrowserTabs;
pub use error::{ActionError, ProviderError};
pub use operations::TabActions;
pub use tab_data::{ActionResponse, ActionType, Message, TabRef};
pub use url_parser::{
    ParsedUrl, extract_domain, extract_first_path_segment, extract_subdomain, matches_domain,
    matches_subdomain, matches_subdirectory, parse_url,
};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the domain lookup for JavaScript access (the popup shows the
// current tab's domain next to the action buttons)
#[wasm_bindgen]
pub fn domain_of_url(url: &str) -> String {
    url_parser::parse_url(url)
        .map(|parsed| parsed.domain)
        .unwrap_or_default()
}

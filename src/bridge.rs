/// WASM boundary: bindings to the extension's JS bridge over
/// `chrome.tabs` / `chrome.tabGroups`, plus the entry point the background
/// script calls with an action message.
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::browser::BrowserTabs;
use crate::error::ProviderError;
use crate::operations::TabActions;
use crate::tab_data::{ActionResponse, Message, TabRef};

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryCurrentWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTabs(tab_ids: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn groupTabs(tab_ids: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTabGroup(group_id: i32, title: &str, collapsed: bool) -> Result<(), JsValue>;
}

/// [`BrowserTabs`] backed by the live browser.
pub struct ChromeTabs;

impl BrowserTabs for ChromeTabs {
    async fn query_current_window(&self) -> Result<Vec<TabRef>, ProviderError> {
        let tabs_js = queryCurrentWindowTabs().await.map_err(provider_error)?;
        serde_wasm_bindgen::from_value(tabs_js)
            .map_err(|err| ProviderError::new(format!("Failed to parse tabs: {err}")))
    }

    async fn remove_tabs(&self, tab_ids: Vec<i32>) -> Result<(), ProviderError> {
        let ids_js = serde_wasm_bindgen::to_value(&tab_ids)
            .map_err(|err| ProviderError::new(format!("Failed to serialize tab ids: {err}")))?;
        removeTabs(ids_js).await.map_err(provider_error)
    }

    async fn group_tabs(&self, tab_ids: Vec<i32>) -> Result<i32, ProviderError> {
        let ids_js = serde_wasm_bindgen::to_value(&tab_ids)
            .map_err(|err| ProviderError::new(format!("Failed to serialize tab ids: {err}")))?;
        let group_js = groupTabs(ids_js).await.map_err(provider_error)?;
        serde_wasm_bindgen::from_value(group_js)
            .map_err(|err| ProviderError::new(format!("Failed to parse group id: {err}")))
    }

    async fn update_group(
        &self,
        group_id: i32,
        title: &str,
        collapsed: bool,
    ) -> Result<(), ProviderError> {
        updateTabGroup(group_id, title, collapsed)
            .await
            .map_err(provider_error)
    }
}

/// Pull the message out of a rejected promise, verbatim when it carries a
/// JS `Error`.
fn provider_error(err: JsValue) -> ProviderError {
    match err.dyn_into::<js_sys::Error>() {
        Ok(error) => ProviderError::new(String::from(error.message())),
        Err(other) => ProviderError::new(format!("{other:?}")),
    }
}

/// Handle an action message from the extension shell and report the
/// outcome. Errors come back as a failure response, never as a thrown
/// exception.
#[wasm_bindgen]
pub async fn handle_action(message: JsValue) -> JsValue {
    let message: Message = match serde_wasm_bindgen::from_value(message) {
        Ok(message) => message,
        Err(err) => return respond(&ActionResponse::failed(format!("Invalid message: {err}"))),
    };

    let actions = TabActions::new(ChromeTabs);
    let response = actions.execute(message.action, &message.tab).await;
    respond(&response)
}

fn respond(response: &ActionResponse) -> JsValue {
    serde_wasm_bindgen::to_value(response).unwrap_or(JsValue::NULL)
}

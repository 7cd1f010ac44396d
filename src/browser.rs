/// Capability interface over the browser's tab APIs.
///
/// Operations receive an implementation of this trait instead of reaching
/// for the ambient `chrome.*` globals, so tests can substitute a
/// deterministic in-memory browser. The production implementation lives in
/// [`crate::bridge`].
use crate::error::ProviderError;
use crate::tab_data::TabRef;

pub trait BrowserTabs {
    /// Enumerate the tabs of the current window. Tabs may legitimately
    /// lack an id or a URL.
    async fn query_current_window(&self) -> Result<Vec<TabRef>, ProviderError>;

    /// Close the given tabs in one bulk call.
    async fn remove_tabs(&self, tab_ids: Vec<i32>) -> Result<(), ProviderError>;

    /// Put the given tabs into a new tab group and return its handle.
    async fn group_tabs(&self, tab_ids: Vec<i32>) -> Result<i32, ProviderError>;

    /// Set a group's title and collapsed state.
    async fn update_group(
        &self,
        group_id: i32,
        title: &str,
        collapsed: bool,
    ) -> Result<(), ProviderError>;
}

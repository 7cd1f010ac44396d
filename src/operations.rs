/// Tab operations: closing and grouping tabs related to the current one.
use log::{debug, info};

use crate::browser::BrowserTabs;
use crate::error::ActionError;
use crate::tab_data::{ActionResponse, ActionType, TabRef};
use crate::url_parser::{matches_domain, matches_subdomain, matches_subdirectory, parse_url};

/// The four tab actions, bound to an injected browser capability.
///
/// Each operation is a sequential pipeline: query the current window's
/// tabs, select by URL predicate, then one or two bulk mutation calls. The
/// tab list can change between query and mutation; that race belongs to the
/// browser API and is not compensated for here.
pub struct TabActions<B: BrowserTabs> {
    browser: B,
}

impl<B: BrowserTabs> TabActions<B> {
    pub fn new(browser: B) -> TabActions<B> {
        TabActions { browser }
    }

    /// Close all tabs sharing the current tab's registrable domain.
    /// Returns the number of matched tabs.
    pub async fn close_same_domain(&self, current_tab: &TabRef) -> Result<usize, ActionError> {
        self.close_matching(current_tab, matches_domain).await
    }

    /// Close all tabs sharing the current tab's full hostname.
    pub async fn close_same_subdomain(&self, current_tab: &TabRef) -> Result<usize, ActionError> {
        self.close_matching(current_tab, matches_subdomain).await
    }

    /// Close all tabs sharing the current tab's hostname and first path
    /// segment.
    pub async fn close_same_subdirectory(
        &self,
        current_tab: &TabRef,
    ) -> Result<usize, ActionError> {
        self.close_matching(current_tab, matches_subdirectory).await
    }

    /// Group all tabs sharing the current tab's registrable domain into a
    /// new tab group titled with that domain, left expanded. Returns the
    /// group handle.
    ///
    /// Unlike the close operations this fails on an empty selection: a
    /// group needs a first member. If titling fails after the group was
    /// created, the group is left as the browser made it and the error is
    /// still reported.
    pub async fn group_by_domain(&self, current_tab: &TabRef) -> Result<i32, ActionError> {
        let (current_url, _current_id) = required_fields(current_tab)?;
        let parsed = parse_url(current_url).ok_or(ActionError::UnparsableUrl)?;

        let all_tabs = self.browser.query_current_window().await?;
        let tab_ids: Vec<i32> = all_tabs
            .iter()
            .filter(|tab| {
                tab.url
                    .as_deref()
                    .is_some_and(|url| matches_domain(current_url, url))
            })
            .filter_map(|tab| tab.id)
            .collect();

        if tab_ids.is_empty() {
            return Err(ActionError::NothingToGroup);
        }

        debug!("grouping {} tabs under {}", tab_ids.len(), parsed.domain);
        let group_id = self.browser.group_tabs(tab_ids).await?;
        self.browser
            .update_group(group_id, &parsed.domain, false)
            .await?;

        info!("created group {group_id} titled {}", parsed.domain);
        Ok(group_id)
    }

    /// Run one of the named actions and fold the outcome into the status
    /// shape the extension shell consumes.
    pub async fn execute(&self, action: ActionType, current_tab: &TabRef) -> ActionResponse {
        let result = match action {
            ActionType::CloseSameDomain => self
                .close_same_domain(current_tab)
                .await
                .map(ActionResponse::closed),
            ActionType::CloseSameSubdomain => self
                .close_same_subdomain(current_tab)
                .await
                .map(ActionResponse::closed),
            ActionType::CloseSameSubdirectory => self
                .close_same_subdirectory(current_tab)
                .await
                .map(ActionResponse::closed),
            ActionType::GroupByDomain => self
                .group_by_domain(current_tab)
                .await
                .map(ActionResponse::grouped),
        };

        result.unwrap_or_else(|err| ActionResponse::failed(err))
    }

    /// Shared close pipeline, parameterized by URL predicate.
    ///
    /// The current tab is matched by URL like any other tab, so it counts
    /// toward (and is closed with) its own match set. The count reflects
    /// matched tabs, including any that carry no id and therefore cannot be
    /// passed to the remove call.
    async fn close_matching(
        &self,
        current_tab: &TabRef,
        matches: fn(&str, &str) -> bool,
    ) -> Result<usize, ActionError> {
        let (current_url, _current_id) = required_fields(current_tab)?;

        let all_tabs = self.browser.query_current_window().await?;
        let tabs_to_close: Vec<&TabRef> = all_tabs
            .iter()
            .filter(|tab| {
                tab.url
                    .as_deref()
                    .is_some_and(|url| matches(current_url, url))
            })
            .collect();

        debug!("{} of {} tabs match", tabs_to_close.len(), all_tabs.len());

        if !tabs_to_close.is_empty() {
            let tab_ids: Vec<i32> = tabs_to_close.iter().filter_map(|tab| tab.id).collect();
            self.browser.remove_tabs(tab_ids).await?;
        }

        Ok(tabs_to_close.len())
    }
}

/// Both the URL and the id must be present before an action can run.
fn required_fields(tab: &TabRef) -> Result<(&str, i32), ActionError> {
    match (tab.url.as_deref(), tab.id) {
        (Some(url), Some(id)) => Ok((url, id)),
        _ => Err(ActionError::MissingUrlOrId),
    }
}

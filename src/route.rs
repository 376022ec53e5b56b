use crate::constants::{DETAIL_ID_PREFIX, MAIN_PAGE_STATE};

/// The view currently shown: the main page or one named detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Main,
    Detail(String),
}

impl Route {
    /// Value stored as `{page: ...}` in the history entry.
    pub fn page_state(&self) -> &str {
        match self {
            Route::Main => MAIN_PAGE_STATE,
            Route::Detail(id) => id,
        }
    }

    /// URL pushed for this route. `path` is the document's bare pathname.
    pub fn history_url(&self, path: &str) -> String {
        match self {
            Route::Main => path.to_string(),
            Route::Detail(id) => format!("#{id}"),
        }
    }
}

/// History entry to push after a successful route change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryPush {
    pub page: String,
    pub url: String,
}

/// Strip the leading `#`; an empty fragment means "no hash".
#[inline]
pub fn detail_id_from_hash(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash).trim();
    (!id.is_empty()).then_some(id)
}

#[inline]
pub fn detail_element_id(detail_id: &str) -> String {
    format!("{DETAIL_ID_PREFIX}{detail_id}")
}

/// Inverse of [`detail_element_id`].
#[inline]
pub fn detail_id_from_element_id(element_id: &str) -> Option<&str> {
    element_id
        .strip_prefix(DETAIL_ID_PREFIX)
        .filter(|id| !id.is_empty())
}

/// Visibility model of the main view and the detail pages.
///
/// `active == None` means the main view is shown. At most one page is ever
/// active, and the main view is hidden exactly when one is.
#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    pages: Vec<String>,
    active: Option<usize>,
}

impl ViewModel {
    pub fn new<I, S>(page_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pages: Vec<String> = Vec::new();
        for id in page_ids {
            let id = id.into();
            if !id.is_empty() && !pages.contains(&id) {
                pages.push(id);
            }
        }
        Self {
            pages,
            active: None,
        }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn knows(&self, detail_id: &str) -> bool {
        self.pages.iter().any(|p| p == detail_id)
    }

    pub fn route(&self) -> Route {
        match self.active {
            Some(i) => Route::Detail(self.pages[i].clone()),
            None => Route::Main,
        }
    }

    pub fn main_visible(&self) -> bool {
        self.active.is_none()
    }

    pub fn is_visible(&self, detail_id: &str) -> bool {
        self.active
            .map(|i| self.pages[i] == detail_id)
            .unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        usize::from(self.active.is_some())
    }

    /// Show `detail_id`. Unknown ids leave the view untouched and return `None`.
    pub fn navigate(&mut self, detail_id: &str) -> Option<Route> {
        let idx = self.pages.iter().position(|p| p == detail_id)?;
        self.active = Some(idx);
        Some(self.route())
    }

    pub fn navigate_to_main(&mut self) -> Route {
        self.active = None;
        Route::Main
    }

    /// Resolve a history traversal: a recognised hash shows its page, anything
    /// else falls back to the main view.
    pub fn follow_hash(&mut self, hash: &str) -> Route {
        match detail_id_from_hash(hash) {
            Some(id) if self.knows(id) => {
                self.active = self.pages.iter().position(|p| p == id);
                self.route()
            }
            _ => self.navigate_to_main(),
        }
    }
}

#[inline]
pub fn history_push(route: &Route, path: &str) -> HistoryPush {
    HistoryPush {
        page: route.page_state().to_string(),
        url: route.history_url(path),
    }
}

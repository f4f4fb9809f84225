//! URLs of the web front end, shared by the renderer and the router.

use catalogue_core::{CatalogueId, ListQuery};

pub const HOME: &str = "/";
pub const CREATE: &str = "/create";
pub const LIST: &str = "/catalogues";
pub const VIEW_BY_ID: &str = "/view";
pub const HEALTH: &str = "/health";

pub const DETAIL_PATTERN: &str = "/catalogues/{id}";
pub const EDIT_PATTERN: &str = "/catalogues/{id}/edit";
pub const DELETE_PATTERN: &str = "/catalogues/{id}/delete";

pub fn detail(id: CatalogueId) -> String {
    format!("{LIST}/{id}")
}

pub fn edit(id: CatalogueId) -> String {
    format!("{LIST}/{id}/edit")
}

pub fn delete(id: CatalogueId) -> String {
    format!("{LIST}/{id}/delete")
}

/// List URL that fetches the collection again before rendering.
pub fn refresh() -> String {
    format!("{LIST}?refresh=1")
}

/// List URL for `page` under the controls of `query`.
pub fn list_page(query: &ListQuery, page: usize) -> String {
    let mut url = format!(
        "{LIST}?status={}&sort={}&page={page}",
        query.status.as_str(),
        query.sort.as_str()
    );
    let search = query.search.trim();
    if !search.is_empty() {
        url.push_str("&search=");
        url.push_str(&urlencoding::encode(search));
    }
    url
}

//! Request/query types (Deserialize)

use catalogue_core::{ListQuery, SortOrder, StatusFilter};
use serde::Deserialize;

/// Query string of the list page.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub sort: SortOrder,
    pub page: Option<usize>,
    pub refresh: Option<String>,
}

impl ListParams {
    pub fn query(&self) -> ListQuery {
        ListQuery {
            search: self.search.clone(),
            status: self.status,
            sort: self.sort,
            page: self.page.unwrap_or(1),
        }
    }

    pub fn refresh(&self) -> bool {
        matches!(self.refresh.as_deref(), Some("1" | "true" | "yes"))
    }
}

#[derive(Debug, Deserialize)]
pub struct ViewParams {
    pub id: Option<String>,
}

/// Body of the delete form; the browser confirmation sets `confirm=yes`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirm: String,
}

impl DeleteForm {
    pub fn confirmed(&self) -> bool {
        self.confirm.eq_ignore_ascii_case("yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_default_to_first_page() {
        let params = ListParams { search: "spring".to_owned(), ..ListParams::default() };
        let query = params.query();
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "spring");
        assert!(!params.refresh());
    }

    #[test]
    fn test_refresh_flag() {
        let params = ListParams { refresh: Some("1".to_owned()), ..ListParams::default() };
        assert!(params.refresh());
    }

    #[test]
    fn test_delete_needs_explicit_yes() {
        assert!(DeleteForm { confirm: "yes".to_owned() }.confirmed());
        assert!(!DeleteForm::default().confirmed());
        assert!(!DeleteForm { confirm: "no".to_owned() }.confirmed());
    }
}

//! Client-side list pipeline.
//!
//! Holds the records of the last list fetch and derives the visible page from
//! the current controls. The steps always run in the same order:
//! status filter, search, sort by id, paginate.

use serde::{Deserialize, Serialize};

use crate::{Catalogue, CoreError, PAGE_SIZE};

/// Status filter control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    fn keeps(self, record: &Catalogue) -> bool {
        match self {
            Self::All => true,
            Self::Active => record.is_cat_active,
            Self::Inactive => !record.is_cat_active,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(CoreError::InvalidInput(format!("unknown status filter: {other}"))),
        }
    }
}

/// Sort control; records are always ordered by `catalogue_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL: [Self; 2] = [Self::Asc, Self::Desc];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Asc => "ID ascending",
            Self::Desc => "ID descending",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::InvalidInput(format!("unknown sort order: {other}"))),
        }
    }
}

/// Current values of the list controls. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default = "first_page")]
    pub page: usize,
}

const fn first_page() -> usize {
    1
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::default(),
            sort: SortOrder::default(),
            page: first_page(),
        }
    }
}

impl ListQuery {
    /// Whether both queries select the same filtered and sorted set.
    pub fn same_selection(&self, other: &Self) -> bool {
        self.search.trim() == other.search.trim()
            && self.status == other.status
            && self.sort == other.sort
    }

    fn matches(&self, record: &Catalogue) -> bool {
        if !self.status.keeps(record) {
            return false;
        }
        let needle = self.search.trim();
        if needle.is_empty() {
            return true;
        }
        record.catalogue_name.to_lowercase().contains(&needle.to_lowercase())
            || record.catalogue_id.to_string().contains(needle)
    }
}

/// One rendered page of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub records: Vec<Catalogue>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub query: ListQuery,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn prev_disabled(&self) -> bool {
        self.page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// `max(1, ceil(count / PAGE_SIZE))`.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Filter and sort `records` per `query`, leaving the input untouched.
pub fn select(records: &[Catalogue], query: &ListQuery) -> Vec<Catalogue> {
    let mut selected: Vec<Catalogue> =
        records.iter().filter(|record| query.matches(record)).cloned().collect();
    match query.sort {
        SortOrder::Asc => selected.sort_by_key(|record| record.catalogue_id),
        SortOrder::Desc => {
            selected.sort_by(|a, b| b.catalogue_id.cmp(&a.catalogue_id));
        },
    }
    selected
}

/// Slice out page `page` (1-based, clamped) of an already selected set.
pub fn paginate(selected: &[Catalogue], page: usize) -> (usize, &[Catalogue]) {
    let page = page.clamp(1, total_pages(selected.len()));
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(selected.len());
    (page, selected.get(start..end).unwrap_or_default())
}

/// Record cache plus list controls.
#[derive(Debug, Clone, Default)]
pub struct ListPipeline {
    cache: Vec<Catalogue>,
    query: ListQuery,
}

impl ListPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in the result of a fresh fetch. The page is kept and clamped on
    /// the next render.
    pub fn replace(&mut self, records: Vec<Catalogue>) {
        self.cache = records;
    }

    pub fn records(&self) -> &[Catalogue] {
        &self.cache
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn contains(&self, id: crate::CatalogueId) -> bool {
        self.cache.iter().any(|record| record.catalogue_id == id)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.query.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.query.status = status;
        self.query.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
        self.query.page = 1;
    }

    /// Set every control at once. A changed selection restarts at page 1,
    /// otherwise the requested page is used.
    pub fn apply_query(&mut self, query: ListQuery) {
        let page = if query.same_selection(&self.query) { query.page } else { 1 };
        self.query = ListQuery { page, ..query };
        self.query.page = self.clamped_page();
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.query.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.query.page.saturating_sub(1));
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.query.page = page;
        self.query.page = self.clamped_page();
    }

    fn clamped_page(&self) -> usize {
        let count = self.cache.iter().filter(|record| self.query.matches(record)).count();
        self.query.page.clamp(1, total_pages(count))
    }

    /// Filtered and sorted working set for the current controls.
    pub fn selected(&self) -> Vec<Catalogue> {
        select(&self.cache, &self.query)
    }

    pub fn page(&self) -> PageView {
        let selected = self.selected();
        let (page, slice) = paginate(&selected, self.query.page);
        PageView {
            records: slice.to_vec(),
            page,
            total_pages: total_pages(selected.len()),
            filtered_count: selected.len(),
            total_count: self.cache.len(),
            query: ListQuery { page, ..self.query.clone() },
        }
    }
}

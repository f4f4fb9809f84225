use std::time::Duration;

use catalogue_core::{Catalogue, CatalogueForm, PageView, STATUS_CLEAR_AFTER, StatusMessage};

/// The panel currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    /// Create form with the values to show (empty after a successful create).
    Create(CatalogueForm),
    List(PageView),
    Detail(Catalogue),
    Edit(Catalogue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Home,
    Create,
    List,
    Detail,
    Edit,
}

impl View {
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Home => ViewMode::Home,
            Self::Create(_) => ViewMode::Create,
            Self::List(_) => ViewMode::List,
            Self::Detail(_) => ViewMode::Detail,
            Self::Edit(_) => ViewMode::Edit,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Home => "Catalogue Manager".to_owned(),
            Self::Create(_) => "Add New Catalogue".to_owned(),
            Self::List(_) => "All Catalogues".to_owned(),
            Self::Detail(record) => format!("Catalogue {}", record.catalogue_id),
            Self::Edit(record) => format!("Edit Catalogue {}", record.catalogue_id),
        }
    }
}

/// Everything the renderer needs for one page.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    pub view: &'a View,
    pub status: Option<&'a StatusMessage>,
    /// Time left before the status message clears itself.
    pub status_clear_after: Duration,
}

impl<'a> Screen<'a> {
    pub fn new(view: &'a View) -> Self {
        Self { view, status: None, status_clear_after: STATUS_CLEAR_AFTER }
    }

    #[must_use]
    pub fn with_status(mut self, status: Option<&'a StatusMessage>, clear_after: Duration) -> Self {
        self.status = status;
        self.status_clear_after = clear_after;
        self
    }

    /// The Home link is shown everywhere except on Home itself.
    pub fn show_home_link(&self) -> bool {
        self.view.mode() != ViewMode::Home
    }
}

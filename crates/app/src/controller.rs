//! Navigation controller: owns the gateway, the list cache and the current
//! screen, and turns user actions into remote calls and view changes.

use std::time::Instant;

use catalogue_core::{
    CatalogueForm, CatalogueId, CoreError, DELETE_CONFIRMATION, ID_PROMPT, INVALID_ID_MESSAGE,
    ListPipeline, ListQuery, SortOrder, StatusFilter, StatusMessage,
};
use catalogue_gateway::{CatalogueApi, GatewayError};
use catalogue_view::{Screen, View, render, render_text};
use tracing::{debug, error, info, warn};

use crate::Prompter;

pub struct Controller<A> {
    api: A,
    pipeline: ListPipeline,
    view: View,
    status: Option<StatusMessage>,
    /// Whether the cache holds a fetch that no write has outdated yet.
    loaded: bool,
    /// Outcome of the last action that set a status, kept past the status
    /// message's own expiry.
    last_failed: bool,
}

impl<A: CatalogueApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            pipeline: ListPipeline::new(),
            view: View::Home,
            status: None,
            loaded: false,
            last_failed: false,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn pipeline(&self) -> &ListPipeline {
        &self.pipeline
    }

    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// The status message, unless it has already cleared itself.
    pub fn status_at(&self, now: Instant) -> Option<&StatusMessage> {
        self.status.as_ref().filter(|status| !status.is_expired_at(now))
    }

    /// Whether the most recent reported outcome was an error, however long
    /// ago its message was shown.
    pub fn last_action_failed(&self) -> bool {
        self.last_failed
    }

    /// Show an alert raised outside the controller in the status area.
    pub fn flash_error(&mut self, message: impl Into<String>) {
        self.show_status(StatusMessage::error(message));
    }

    pub fn screen_at(&self, now: Instant) -> Screen<'_> {
        let status = self.status_at(now);
        let clear_after = status.map(|s| s.remaining_at(now)).unwrap_or_default();
        Screen::new(&self.view).with_status(status, clear_after)
    }

    pub fn render(&self) -> String {
        render(&self.screen_at(Instant::now()))
    }

    pub fn render_text(&self) -> String {
        render_text(&self.screen_at(Instant::now()))
    }

    pub fn show_home(&mut self) {
        self.view = View::Home;
    }

    pub fn show_create(&mut self) {
        self.view = View::Create(CatalogueForm::default());
    }

    /// Fetch every record into the cache and show the list.
    ///
    /// On failure the current view stays and the status carries the reason.
    pub async fn load_all(&mut self) -> bool {
        match self.api.list_all().await {
            Ok(records) => {
                info!(count = records.len(), "catalogues loaded");
                self.pipeline.replace(records);
                self.loaded = true;
                self.show_page();
                true
            },
            Err(e) => {
                self.report_failure("list", &e);
                false
            },
        }
    }

    /// Show the list for `query`, fetching first when the cache is stale or
    /// `refresh` is set.
    pub async fn show_list(&mut self, query: ListQuery, refresh: bool) {
        if (refresh || !self.loaded) && !self.load_all().await {
            return;
        }
        self.pipeline.apply_query(query);
        self.show_page();
    }

    /// Ask for an id and show that record. Cancel or a blank answer does
    /// nothing.
    pub async fn prompt_view_by_id<P: Prompter + ?Sized>(&mut self, prompter: &mut P) {
        let Some(answer) = prompter.prompt(ID_PROMPT) else {
            return;
        };
        let answer = answer.trim();
        if answer.is_empty() {
            return;
        }
        match answer.parse::<CatalogueId>() {
            Ok(id) => self.view_by_id(id).await,
            Err(_) => prompter.alert(INVALID_ID_MESSAGE),
        }
    }

    pub async fn view_by_id(&mut self, id: CatalogueId) {
        match self.api.get_one(id).await {
            Ok(record) => self.view = View::Detail(record),
            Err(e) => {
                self.report_failure("get", &e);
            },
        }
    }

    pub async fn edit(&mut self, id: CatalogueId) {
        match self.api.get_one(id).await {
            Ok(record) => self.view = View::Edit(record),
            Err(e) => {
                self.report_failure("get", &e);
            },
        }
    }

    /// Send the create form. Success clears the form; failure keeps the
    /// values so they can be corrected.
    pub async fn submit_create(&mut self, form: CatalogueForm) {
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.show_status(StatusMessage::error(input_message(e)));
                self.view = View::Create(form);
                return;
            },
        };
        match self.api.create(&draft).await {
            Ok(message) => {
                info!(id = ?draft.catalogue_id, "catalogue created");
                self.loaded = false;
                self.show_status(StatusMessage::success(message));
                self.view = View::Create(CatalogueForm::default());
            },
            Err(e) => {
                self.report_failure("create", &e);
                self.view = View::Create(form);
            },
        }
    }

    /// Send the edit form for `id`. The shown record takes the submitted
    /// values whatever the outcome; the cache is left alone.
    pub async fn submit_update(&mut self, id: CatalogueId, form: CatalogueForm) {
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.show_status(StatusMessage::error(input_message(e)));
                return;
            },
        };
        match self.api.update(id, &draft).await {
            Ok(message) => {
                info!(id, "catalogue updated");
                self.loaded = false;
                self.show_status(StatusMessage::success(message));
            },
            Err(e) => {
                self.report_failure("update", &e);
            },
        }
        if let View::Edit(record) = &mut self.view {
            if record.catalogue_id == id {
                record.apply(&draft);
            }
        }
    }

    /// Confirm, delete, alert the outcome, then rebuild the list from a
    /// fresh fetch. Nothing is sent when the confirmation is declined, and
    /// the cache is never edited locally.
    pub async fn delete<P: Prompter + ?Sized>(&mut self, id: CatalogueId, prompter: &mut P) {
        if !prompter.confirm(DELETE_CONFIRMATION) {
            debug!(id, "delete cancelled");
            return;
        }
        if !self.pipeline.contains(id) {
            debug!(id, "deleting a catalogue missing from the cache");
        }
        match self.api.remove(id).await {
            Ok(message) => {
                info!(id, "catalogue deleted");
                prompter.alert(&message);
                self.show_status(StatusMessage::success(message.clone()));
                if !self.load_all().await {
                    let reason = self.status.as_ref().map(|s| s.text.clone()).unwrap_or_default();
                    self.show_status(StatusMessage::error(format!(
                        "{message} (list refresh failed: {reason})"
                    )));
                }
            },
            Err(e) if e.is_rejection() => {
                let message = self.report_failure("delete", &e);
                prompter.alert(&message);
                self.load_all().await;
            },
            Err(e) => {
                let message = self.report_failure("delete", &e);
                prompter.alert(&message);
            },
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.pipeline.set_search(search);
        self.show_page();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.pipeline.set_status(status);
        self.show_page();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.pipeline.set_sort(sort);
        self.show_page();
    }

    pub fn next_page(&mut self) {
        self.pipeline.next_page();
        self.show_page();
    }

    pub fn prev_page(&mut self) {
        self.pipeline.prev_page();
        self.show_page();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pipeline.go_to_page(page);
        self.show_page();
    }

    fn show_page(&mut self) {
        self.view = View::List(self.pipeline.page());
    }

    /// Log `err` at the level its family calls for and put the user-facing
    /// text in the status area.
    fn report_failure(&mut self, action: &'static str, err: &GatewayError) -> String {
        if err.is_transport() {
            error!(action, error = %err, "catalogue request failed");
        } else {
            warn!(action, error = %err, "catalogue request refused");
        }
        let message = err.user_message();
        self.show_status(StatusMessage::error(message.clone()));
        message
    }

    fn show_status(&mut self, status: StatusMessage) {
        self.last_failed = status.is_error();
        self.status = Some(status);
    }
}

fn input_message(err: CoreError) -> String {
    match err {
        CoreError::InvalidInput(message) => message,
        other => other.to_string(),
    }
}

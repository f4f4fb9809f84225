//! One-shot terminal commands. Each runs a single controller action and
//! prints the resulting screen.

use std::process::ExitCode;

use anyhow::Result;
use catalogue_app::Controller;
use catalogue_core::{CatalogueForm, CatalogueId, ListQuery};
use catalogue_gateway::{CatalogueClient, ClientConfig};
use catalogue_view::View;
use clap::Args;

use crate::terminal::TerminalPrompter;

/// Record fields shared by `create` and `update`. Omitted fields are left
/// for the backend to judge.
#[derive(Debug, Args)]
pub(crate) struct RecordArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    version: Option<String>,
    /// 1 (active) or 0 (inactive)
    #[arg(long)]
    active: Option<String>,
    /// Start date, YYYY-MM-DD
    #[arg(long)]
    start: Option<String>,
    /// End date, YYYY-MM-DD
    #[arg(long)]
    end: Option<String>,
}

impl RecordArgs {
    fn into_form(self, id: Option<CatalogueId>) -> CatalogueForm {
        CatalogueForm {
            catalogue_id: id.map(|id| id.to_string()).unwrap_or_default(),
            catalogue_name: self.name.unwrap_or_default(),
            catalogue_version: self.version.unwrap_or_default(),
            is_cat_active: self.active.unwrap_or_default(),
            catalogue_start: self.start.unwrap_or_default(),
            catalogue_end: self.end.unwrap_or_default(),
        }
    }
}

/// A controller plus whether a backend session was opened for it.
pub(crate) struct Session {
    controller: Controller<CatalogueClient>,
    logged_in: bool,
}

impl Session {
    pub(crate) async fn open(config: ClientConfig) -> Result<Self> {
        let client = CatalogueClient::new(config)?;
        let logged_in = client.authenticate().await?;
        Ok(Self { controller: Controller::new(client), logged_in })
    }

    /// Print the screen and close the backend session. Fails the process
    /// when the action ended with an error, however long logout takes.
    async fn finish(self) -> ExitCode {
        let failed = self.controller.last_action_failed();
        print!("{}", self.controller.render_text());
        if self.logged_in {
            if let Err(e) = self.controller.api().logout().await {
                tracing::warn!(error = %e, "logout failed");
            }
        }
        if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
    }
}

/// Fetch and show one page. The requested page survives the control changes,
/// which would otherwise restart at page 1.
pub(crate) async fn list(mut session: Session, query: ListQuery) -> ExitCode {
    let page = query.page;
    session.controller.show_list(query, true).await;
    if session.controller.has_loaded() {
        session.controller.go_to_page(page);
    }
    session.finish().await
}

/// Show one record; without an id the user is asked for one.
pub(crate) async fn get(mut session: Session, id: Option<CatalogueId>) -> ExitCode {
    match id {
        Some(id) => session.controller.view_by_id(id).await,
        None => {
            let mut prompter = TerminalPrompter::new(false);
            session.controller.prompt_view_by_id(&mut prompter).await;
        },
    }
    session.finish().await
}

pub(crate) async fn create(
    mut session: Session,
    id: Option<CatalogueId>,
    fields: RecordArgs,
) -> ExitCode {
    session.controller.show_create();
    session.controller.submit_create(fields.into_form(id)).await;
    session.finish().await
}

/// Load the record first so only existing catalogues are updated and the
/// result shows the merged values.
pub(crate) async fn update(mut session: Session, id: CatalogueId, fields: RecordArgs) -> ExitCode {
    session.controller.edit(id).await;
    if matches!(session.controller.view(), View::Edit(_)) {
        session.controller.submit_update(id, fields.into_form(Some(id))).await;
    }
    session.finish().await
}

pub(crate) async fn delete(mut session: Session, id: CatalogueId, assume_yes: bool) -> ExitCode {
    let mut prompter = TerminalPrompter::new(assume_yes);
    session.controller.delete(id, &mut prompter).await;
    session.finish().await
}

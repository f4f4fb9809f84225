//! Plain-text rendering for terminals.

use catalogue_core::{Catalogue, CatalogueForm, NO_RECORDS_MESSAGE, PageView, StatusKind};

use crate::{Screen, View};

const HOME_TEXT: &str = "Catalogue Manager\n\
\n\
  catalogue list     list catalogues (--search, --status, --sort, --page)\n\
  catalogue get ID   show one catalogue\n\
  catalogue create   add a catalogue\n\
  catalogue update   change a catalogue\n\
  catalogue delete   remove a catalogue (asks for confirmation)\n\
  catalogue serve    open the web interface\n";

/// Render `screen` for a terminal.
pub fn render_text(screen: &Screen<'_>) -> String {
    let mut out = String::new();
    if let Some(status) = screen.status {
        let prefix = match status.kind {
            StatusKind::Success => "OK",
            StatusKind::Error => "ERROR",
        };
        out.push_str(&format!("[{prefix}] {}\n\n", status.text));
    }
    match screen.view {
        View::Home => out.push_str(HOME_TEXT),
        View::Create(form) => out.push_str(&form_text("New catalogue", form)),
        View::List(page) => out.push_str(&list_text(page)),
        View::Detail(record) => out.push_str(&detail_text(record)),
        View::Edit(record) => {
            out.push_str(&form_text(
                &format!("Editing catalogue {}", record.catalogue_id),
                &CatalogueForm::from_record(record),
            ));
        },
    }
    out
}

fn date_text(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "-".to_owned(), |d| d.to_string())
}

fn detail_text(record: &Catalogue) -> String {
    format!(
        "ID:       {}\nName:     {}\nVersion:  {}\nActive:   {}\nStart:    {}\nEnd:      {}\n",
        record.catalogue_id,
        record.catalogue_name,
        record.catalogue_version,
        if record.is_cat_active { "Yes" } else { "No" },
        date_text(record.catalogue_start),
        date_text(record.catalogue_end),
    )
}

fn form_text(heading: &str, form: &CatalogueForm) -> String {
    format!(
        "{heading}\n  catalogue_id:      {}\n  catalogue_name:    {}\n  catalogue_version: {}\n  is_cat_active:     {}\n  catalogue_start:   {}\n  catalogue_end:     {}\n",
        form.catalogue_id,
        form.catalogue_name,
        form.catalogue_version,
        form.is_cat_active,
        form.catalogue_start,
        form.catalogue_end,
    )
}

fn list_text(page: &PageView) -> String {
    if page.is_empty() {
        return format!("{NO_RECORDS_MESSAGE}\n");
    }
    let name_width = page
        .records
        .iter()
        .map(|r| r.catalogue_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let mut out = format!(
        "{:>6}  {:<name_width$}  {:<10}  {:<6}  {:<10}  {:<10}\n",
        "ID", "NAME", "VERSION", "ACTIVE", "START", "END"
    );
    for record in &page.records {
        out.push_str(&format!(
            "{:>6}  {:<name_width$}  {:<10}  {:<6}  {:<10}  {:<10}\n",
            record.catalogue_id,
            record.catalogue_name,
            record.catalogue_version,
            if record.is_cat_active { "Yes" } else { "No" },
            date_text(record.catalogue_start),
            date_text(record.catalogue_end),
        ));
    }
    out.push_str(&format!(
        "\nPage {} of {} ({} matching, {} total)",
        page.page, page.total_pages, page.filtered_count, page.total_count
    ));
    if !page.prev_disabled() {
        out.push_str(&format!("  prev: --page {}", page.page - 1));
    }
    if !page.next_disabled() {
        out.push_str(&format!("  next: --page {}", page.page + 1));
    }
    out.push('\n');
    out
}

//! HTML rendering of screens.

use catalogue_core::{
    ActiveFlag, Catalogue, CatalogueForm, DELETE_CONFIRMATION, NO_RECORDS_MESSAGE, PageView,
    SortOrder, StatusFilter, StatusMessage,
};
use chrono::NaiveDate;

use crate::escape::escape_html;
use crate::{Screen, View, routes};

/// Page skeleton; `{{title}}`, `{{nav}}`, `{{status}}` and `{{content}}` are
/// substituted in that order.
const LAYOUT_HTML: &str = include_str!("layout.html");

/// Disables the submit control once the form is sent, so a double click
/// cannot issue the same write twice.
const DISABLE_ON_SUBMIT: &str =
    "this.querySelectorAll('[type=submit]').forEach(function (b) { b.disabled = true; })";

const HOME_TEXT: &str = r#"<h2>Welcome</h2>
<p>Manage product catalogues stored on the Catalogue Manager backend.</p>
<ul>
  <li><strong>Add Catalogue</strong> opens an empty form; every field is required.</li>
  <li><strong>All Catalogues</strong> loads the full list. Search by name or ID, filter by status,
      sort by ID and page through five catalogues at a time.</li>
  <li><strong>View by ID</strong> opens a single catalogue read-only.</li>
  <li>From the list you can view, edit or delete any catalogue. Deleting asks for confirmation.</li>
</ul>"#;

/// Render a full HTML page for `screen`.
pub fn render(screen: &Screen<'_>) -> String {
    let title = escape_html(&screen.view.title());
    let nav = render_nav(screen.show_home_link());
    let status = render_status(screen.status, screen.status_clear_after.as_millis());
    let content = match screen.view {
        View::Home => HOME_TEXT.to_owned(),
        View::Create(form) => render_create(form),
        View::List(page) => render_list(page),
        View::Detail(record) => render_detail(record),
        View::Edit(record) => render_edit(record),
    };
    // Single pass, so marker text inside record fields is never substituted.
    let mut page = String::with_capacity(LAYOUT_HTML.len() + content.len() + nav.len());
    let mut rest = LAYOUT_HTML;
    for (marker, value) in
        [("{{title}}", &title), ("{{nav}}", &nav), ("{{status}}", &status), ("{{content}}", &content)]
    {
        if let Some((before, after)) = rest.split_once(marker) {
            page.push_str(before);
            page.push_str(value);
            rest = after;
        }
    }
    page.push_str(rest);
    page
}

fn render_nav(show_home: bool) -> String {
    let mut nav = String::from("  <nav class=\"controls\">\n");
    if show_home {
        nav.push_str(&format!("    <a class=\"btn\" id=\"home-link\" href=\"{}\">Home</a>\n", routes::HOME));
    }
    nav.push_str(&format!(
        "    <a class=\"btn\" href=\"{}\">Add Catalogue</a>\n    <a class=\"btn\" href=\"{}\">All Catalogues</a>\n",
        routes::CREATE,
        escape_html(&routes::refresh()),
    ));
    nav.push_str(&format!(
        "    <form class=\"inline\" method=\"get\" action=\"{}\">\
<input type=\"number\" name=\"id\" placeholder=\"Catalogue ID\" required> \
<button class=\"btn\" type=\"submit\">View by ID</button></form>\n",
        routes::VIEW_BY_ID
    ));
    nav.push_str("  </nav>");
    nav
}

fn render_status(status: Option<&StatusMessage>, clear_after_ms: u128) -> String {
    match status {
        Some(message) => format!(
            "<div id=\"status\" class=\"status status-{}\" role=\"status\" data-clear-after-ms=\"{clear_after_ms}\">{}</div>",
            message.kind.as_str(),
            escape_html(&message.text),
        ),
        None => "<div id=\"status\" class=\"status\" role=\"status\"></div>".to_owned(),
    }
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

fn yes_no(active: bool) -> &'static str {
    if active { "Yes" } else { "No" }
}

fn render_create(form: &CatalogueForm) -> String {
    let mut html = String::from("<h2>Add New Catalogue</h2>\n");
    html.push_str(&format!(
        "<form id=\"catalogueForm\" method=\"post\" action=\"{}\" onsubmit=\"{DISABLE_ON_SUBMIT}\">\n",
        routes::CREATE
    ));
    html.push_str(&format!(
        "<div class=\"field\"><label for=\"catalogue_id\">Catalogue ID</label>\
<input type=\"number\" id=\"catalogue_id\" name=\"catalogue_id\" value=\"{}\" required></div>\n",
        escape_html(&form.catalogue_id)
    ));
    html.push_str(&form_fields(form));
    html.push_str("<button class=\"btn btn-info\" type=\"submit\">Create</button>\n</form>");
    html
}

fn render_edit(record: &Catalogue) -> String {
    let form = CatalogueForm::from_record(record);
    let mut html = format!("<h2>Edit Catalogue {}</h2>\n", record.catalogue_id);
    html.push_str(&format!(
        "<form id=\"catalogueForm\" method=\"post\" action=\"{}\" onsubmit=\"{DISABLE_ON_SUBMIT}\">\n",
        routes::edit(record.catalogue_id)
    ));
    html.push_str(&format!(
        "<div class=\"field\"><label for=\"catalogue_id\">Catalogue ID</label>\
<input type=\"number\" id=\"catalogue_id\" name=\"catalogue_id\" value=\"{}\" readonly></div>\n",
        record.catalogue_id
    ));
    html.push_str(&form_fields(&form));
    html.push_str("<button class=\"btn btn-warning\" type=\"submit\">Update</button>\n</form>");
    html
}

/// Controls shared by the create and edit forms.
fn form_fields(form: &CatalogueForm) -> String {
    let active = form.is_cat_active.parse::<ActiveFlag>().unwrap_or_default();
    let option = |flag: ActiveFlag, label: &str| {
        let selected = if flag == active { " selected" } else { "" };
        format!("<option value=\"{}\"{selected}>{label}</option>", flag.as_str())
    };
    format!(
        "<div class=\"field\"><label for=\"catalogue_name\">Name</label>\
<input type=\"text\" id=\"catalogue_name\" name=\"catalogue_name\" value=\"{name}\" required></div>\n\
<div class=\"field\"><label for=\"catalogue_version\">Version</label>\
<input type=\"text\" id=\"catalogue_version\" name=\"catalogue_version\" value=\"{version}\" required></div>\n\
<div class=\"field\"><label for=\"is_cat_active\">Active</label>\
<select id=\"is_cat_active\" name=\"is_cat_active\" required>{yes}{no}</select></div>\n\
<div class=\"field\"><label for=\"catalogue_start\">Start date</label>\
<input type=\"date\" id=\"catalogue_start\" name=\"catalogue_start\" value=\"{start}\" required></div>\n\
<div class=\"field\"><label for=\"catalogue_end\">End date</label>\
<input type=\"date\" id=\"catalogue_end\" name=\"catalogue_end\" value=\"{end}\" required></div>\n",
        name = escape_html(&form.catalogue_name),
        version = escape_html(&form.catalogue_version),
        yes = option(ActiveFlag::Active, "Yes"),
        no = option(ActiveFlag::Inactive, "No"),
        start = escape_html(&form.catalogue_start),
        end = escape_html(&form.catalogue_end),
    )
}

fn delete_form(record: &Catalogue) -> String {
    format!(
        "<form class=\"inline\" method=\"post\" action=\"{}\" \
onsubmit=\"if (!confirm('{DELETE_CONFIRMATION}')) return false; {DISABLE_ON_SUBMIT}\">\
<input type=\"hidden\" name=\"confirm\" value=\"yes\">\
<button class=\"btn btn-danger\" type=\"submit\">Delete</button></form>",
        routes::delete(record.catalogue_id)
    )
}

fn render_detail(record: &Catalogue) -> String {
    format!(
        "<h2>Catalogue {id}</h2>\n<dl>\n\
<dt>ID</dt><dd>{id}</dd>\n\
<dt>Name</dt><dd>{name}</dd>\n\
<dt>Version</dt><dd>{version}</dd>\n\
<dt>Active</dt><dd>{active}</dd>\n\
<dt>Start date</dt><dd>{start}</dd>\n\
<dt>End date</dt><dd>{end}</dd>\n</dl>\n\
<p class=\"controls\"><a class=\"btn btn-warning\" href=\"{edit}\">Edit</a> {delete}</p>",
        id = record.catalogue_id,
        name = escape_html(&record.catalogue_name),
        version = escape_html(&record.catalogue_version),
        active = yes_no(record.is_cat_active),
        start = date_value(record.catalogue_start),
        end = date_value(record.catalogue_end),
        edit = routes::edit(record.catalogue_id),
        delete = delete_form(record),
    )
}

fn list_controls(page: &PageView) -> String {
    let query = &page.query;
    let status_options: String = StatusFilter::ALL
        .iter()
        .map(|s| {
            let selected = if *s == query.status { " selected" } else { "" };
            format!("<option value=\"{}\"{selected}>{}</option>", s.as_str(), s.label())
        })
        .collect();
    let sort_options: String = SortOrder::ALL
        .iter()
        .map(|s| {
            let selected = if *s == query.sort { " selected" } else { "" };
            format!("<option value=\"{}\"{selected}>{}</option>", s.as_str(), s.label())
        })
        .collect();
    format!(
        "<form id=\"listControls\" class=\"controls\" method=\"get\" action=\"{action}\">\
<input type=\"search\" id=\"search\" name=\"search\" placeholder=\"Search by name or ID\" value=\"{search}\">\
<select id=\"statusFilter\" name=\"status\" onchange=\"this.form.submit()\">{status_options}</select>\
<select id=\"sortOrder\" name=\"sort\" onchange=\"this.form.submit()\">{sort_options}</select>\
<button class=\"btn\" type=\"submit\">Apply</button></form>\n",
        action = routes::LIST,
        search = escape_html(&query.search),
    )
}

fn pagination(page: &PageView) -> String {
    let prev = if page.prev_disabled() {
        "<button class=\"btn\" id=\"prevPage\" type=\"button\" disabled>Prev</button>".to_owned()
    } else {
        format!(
            "<a class=\"btn\" id=\"prevPage\" href=\"{}\">Prev</a>",
            escape_html(&routes::list_page(&page.query, page.page - 1))
        )
    };
    let next = if page.next_disabled() {
        "<button class=\"btn\" id=\"nextPage\" type=\"button\" disabled>Next</button>".to_owned()
    } else {
        format!(
            "<a class=\"btn\" id=\"nextPage\" href=\"{}\">Next</a>",
            escape_html(&routes::list_page(&page.query, page.page + 1))
        )
    };
    format!(
        "<div class=\"pagination\">{prev}<span id=\"pageInfo\">Page {} of {}</span>{next}</div>",
        page.page, page.total_pages
    )
}

fn render_list(page: &PageView) -> String {
    let mut html = String::from("<h2>All Catalogues</h2>\n");
    html.push_str(&list_controls(page));
    if page.is_empty() {
        html.push_str(&format!("<p class=\"empty\" id=\"emptyState\">{NO_RECORDS_MESSAGE}</p>"));
        return html;
    }
    html.push_str(
        "<table id=\"catalogueList\">\n<thead><tr><th>ID</th><th>Name</th><th>Version</th>\
<th>Active</th><th>Start</th><th>End</th><th>Actions</th></tr></thead>\n<tbody>\n",
    );
    for record in &page.records {
        html.push_str(&format!(
            "<tr class=\"catalogue\"><td>{id}</td><td>{name}</td><td>{version}</td><td>{active}</td>\
<td>{start}</td><td>{end}</td><td>\
<a class=\"btn btn-info\" href=\"{detail}\">View</a> \
<a class=\"btn btn-warning\" href=\"{edit}\">Edit</a> {delete}</td></tr>\n",
            id = record.catalogue_id,
            name = escape_html(&record.catalogue_name),
            version = escape_html(&record.catalogue_version),
            active = yes_no(record.is_cat_active),
            start = date_value(record.catalogue_start),
            end = date_value(record.catalogue_end),
            detail = routes::detail(record.catalogue_id),
            edit = routes::edit(record.catalogue_id),
            delete = delete_form(record),
        ));
    }
    html.push_str("</tbody>\n</table>\n");
    html.push_str(&pagination(page));
    html
}

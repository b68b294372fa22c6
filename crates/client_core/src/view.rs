//! Panel-level view model around the rows: header, form echoes, list summary.

use std::fmt::Write as _;

use crate::{row::render_row, types::UserListState};

pub const SUBTITLE: &str = "Manage your users";
pub const EMPTY_TITLE: &str = "No users yet";
pub const EMPTY_HINT: &str = "Add one above to get started";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelHeader {
    pub title: String,
    pub subtitle: &'static str,
    pub logo_path: String,
    pub logo_alt: String,
}

impl PanelHeader {
    pub fn for_backend(backend_name: &str) -> Self {
        Self {
            title: format!("{} Backend", capitalize_first(backend_name)),
            subtitle: SUBTITLE,
            logo_path: format!("/{backend_name}logo.svg"),
            logo_alt: format!("{backend_name} Logo"),
        }
    }
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn list_summary(count: usize) -> String {
    format!("{count} total")
}

/// Plain-text rendering of the whole panel for terminals.
pub fn render_panel(backend_name: &str, state: &UserListState) -> String {
    let header = PanelHeader::for_backend(backend_name);
    let mut out = String::new();

    let _ = writeln!(out, "{}", header.title);
    let _ = writeln!(out, "{}", header.subtitle);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "ADD NEW USER     name: {:?}  email: {:?}",
        state.create_draft.name, state.create_draft.email
    );
    let _ = writeln!(
        out,
        "UPDATE USER      id: {:?}  name: {:?}  email: {:?}",
        state.update_draft.id, state.update_draft.name, state.update_draft.email
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "USERS  ({})", list_summary(state.users.len()));

    if state.users.is_empty() {
        let _ = writeln!(out, "  {EMPTY_TITLE}");
        let _ = writeln!(out, "  {EMPTY_HINT}");
    } else {
        for user in &state.users {
            let _ = writeln!(out, "  {}", render_row(user));
        }
    }

    out
}

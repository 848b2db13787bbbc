//! Plain-text rendering of catalog view models.
//!
//! The renderer is a pure function from a [`CatalogViewModel`] to a `String`;
//! the binary decides where that string goes. No ANSI styling and no cursor
//! management, so output is pipe- and test-friendly.

use std::fmt::Write as _;

use crate::ui::helpers::truncate;
use crate::ui::viewmodel::{CatalogViewModel, StatusLine};

/// Column width for the product title.
const TITLE_WIDTH: usize = 32;

/// Column width for brand and category.
const LABEL_WIDTH: usize = 16;

/// Renders a view model into a multi-line string.
///
/// Layout, top to bottom: header, optional status line, optional search echo,
/// then either the product table or a centered empty-state message.
#[must_use]
pub fn render(vm: &CatalogViewModel) -> String {
    let mut out = String::new();

    let _ = write!(out, "{}", vm.header.title);
    if let Some(refreshed) = &vm.header.refreshed {
        let _ = write!(out, "[{refreshed}]");
    }
    out.push('\n');

    match &vm.status {
        Some(StatusLine::Loading) => out.push_str("  loading...\n"),
        Some(StatusLine::Error(message)) => {
            let _ = writeln!(out, "  error: {message} (:reload to retry)");
        }
        None => {}
    }

    if let Some(search) = &vm.search {
        let _ = writeln!(out, "  search: {}", search.query);
    }

    if let Some(empty) = &vm.empty_state {
        let _ = writeln!(out, "\n  {}", empty.message);
        return out;
    }

    let _ = writeln!(
        out,
        "\n  {:<tw$}  {:<lw$}  {:<lw$}  {:>9}  {:>9}  {:>5}  {:>5}",
        "TITLE",
        "BRAND",
        "CATEGORY",
        "PRICE",
        "NOW",
        "STARS",
        "STOCK",
        tw = TITLE_WIDTH,
        lw = LABEL_WIDTH,
    );

    for row in &vm.rows {
        let _ = writeln!(
            out,
            "  {:<tw$}  {:<lw$}  {:<lw$}  {:>9}  {:>9}  {:>5}  {:>5}",
            truncate(&row.title, TITLE_WIDTH),
            truncate(&row.brand, LABEL_WIDTH),
            truncate(&row.category, LABEL_WIDTH),
            row.price,
            row.discounted_price,
            row.rating,
            row.stock,
            tw = TITLE_WIDTH,
            lw = LABEL_WIDTH,
        );
    }

    out
}

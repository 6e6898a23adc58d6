//! # HTML Markup
//!
//! Renders a [`ListViewModel`] as the list page: a heading, the fetch button,
//! and an ordered list of links. Every link opens in a new browsing context
//! that gets no handle back to the page.

use crate::core::view::{ItemView, ListViewModel};

pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

/// Renders the full page fragment.
pub fn render(vm: &ListViewModel) -> String {
    let mut html = String::from("<div>\n");
    html.push_str(&format!("  <h1>{}</h1>\n", escape(vm.heading)));
    html.push_str(&format!(
        "  <button type=\"button\">{}</button>\n",
        escape(vm.fetch_label)
    ));
    html.push_str("  <ol>\n");
    for item in &vm.items {
        html.push_str(&format!("    {}\n", render_item(item)));
    }
    html.push_str("  </ol>\n</div>\n");
    html
}

/// Renders one `<li>` with its anchor.
pub fn render_item(item: &ItemView) -> String {
    format!(
        "<li data-key=\"{}\"><a href=\"{}\" target=\"{}\" rel=\"{}\">{}</a></li>",
        item.key,
        escape(&item.url),
        LINK_TARGET,
        LINK_REL,
        escape(&item.label)
    )
}

/// Escapes text for use in element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

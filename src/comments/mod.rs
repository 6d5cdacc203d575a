//! Comment strippers for JavaScript, CSS and HTML
//!
//! Python comments live in [`crate::python`], next to the rest of the
//! indentation-aware helpers.

mod javascript;
mod markup;

pub use javascript::remove_js_comments;
pub(crate) use javascript::scan_js_comments;
pub use markup::{remove_css_comments, remove_html_comments};

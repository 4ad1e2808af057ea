// HTML rendering for the console page and run results.
// Templates are askama sources with HTML auto-escaping.

pub mod page;
pub mod result;

pub use page::{render_page, ApiStatus, PageView};
pub use result::{render_result, ResultContext};

/// Terminal output: result rows and aggregate values rendered as a grid
/// table, CSV or JSON.
pub mod render;

pub use render::{render_aggregate, render_rows, OutputFormat};

use std::fmt;

use super::{CellVisual, RenderTarget};

/// A [RenderTarget] that builds the markup a browser container would end up with.
///
/// The container's inline style is kept apart from its children so a host can
/// apply them to an existing element, or use [fmt::Display] to get a whole
/// `<div>` back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlTarget {
    style: Option<String>,
    cells: Vec<String>,
}

impl HtmlTarget {
    /// the inline style set on the container, None until something was rendered
    pub fn container_style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// the markup of every cell, in drawing order
    pub fn inner_html(&self) -> String {
        self.cells.concat()
    }

    /// how many cells have been drawn since the last clear
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// the markup of a single cell
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

fn cell_markup(cell: &CellVisual) -> String {
    let mut out = format!(
        r#"<div style="top: {}px; left: {}px; width: {}px; height: {}px; background: {}" class="hexagon">"#,
        cell.top, cell.left, cell.width, cell.height, cell.background
    );
    if let Some(src) = cell.image_src() {
        out.push_str(&format!(r#"<img src="{}" alt="">"#, src));
    }
    out.push_str("</div>");
    out
}

impl RenderTarget for HtmlTarget {
    fn clear(&mut self) {
        self.cells.clear();
        self.style = None;
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.style = Some(format!("width: {}px; height: {}px;", width, height));
    }

    fn append_cell(&mut self, cell: CellVisual) {
        self.cells.push(cell_markup(&cell));
    }
}

impl fmt::Display for HtmlTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.style {
            Some(style) => write!(f, r#"<div style="{}">"#, style)?,
            None => write!(f, "<div>")?,
        }
        for cell in self.cells.iter() {
            write!(f, "{}", cell)?;
        }
        write!(f, "</div>")
    }
}

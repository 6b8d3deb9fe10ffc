//! Renders a hexagonal board onto anything that implements [RenderTarget].
//!
//! The layout is closed form: every cell's position and color follows from its
//! file and rank alone, so rendering is a single pass over the board with no
//! state kept between calls. Files are columns of hexagons that interlock by
//! overlapping horizontally, and each file is shifted down by half a cell per
//! step away from the center file.
//!
//! ```
//! # use hexchess_view::board_view::{render, HtmlTarget};
//! let board = vec![vec![0u8; 11]; 11];
//! let mut target = HtmlTarget::default();
//! render(&mut target, &board);
//! assert_eq!(121, target.cell_count());
//! ```

mod html;

use crate::types::{piece_name, Hexagon, Piece, Square, FILES};
use tracing::error;

pub use html::HtmlTarget;

/// height of a single hexagon in pixels
pub const HEX_HEIGHT: f64 = 66.0;

/// width of a single hexagon in pixels
pub const HEX_WIDTH: f64 = HEX_HEIGHT * 1.2;

/// neighbouring files overlap by this many pixels so the hexagons interlock
pub const FILE_OVERLAP: f64 = 8.0;

/// how many half cells each file is pushed down, the center file sits highest
pub const VERTICAL_FILE_OFFSETS: [u32; FILES] = [5, 4, 3, 2, 1, 0, 1, 2, 3, 4, 5];

/// per-file starting index into [COLORS], giving the tri-color tiling
pub const COLOR_OFFSETS: [usize; FILES] = [0, 1, 2, 0, 1, 2, 1, 0, 2, 1, 0];

#[allow(missing_docs)]
pub const LIGHT_COLOR: &str = "rgb(255, 207, 159)";
#[allow(missing_docs)]
pub const MEDIUM_COLOR: &str = "rgb(233, 172, 112)";
#[allow(missing_docs)]
pub const DARK_COLOR: &str = "rgb(210,140,69)";

/// the cyclic palette cells are colored from
pub const COLORS: [&str; 3] = [LIGHT_COLOR, MEDIUM_COLOR, DARK_COLOR];

/// path prefix the asset server serves piece images under
pub const PIECE_ASSET_PATH: &str = "/files/pieces/";

/// side length of the square the whole board is drawn in
pub const BOARD_SIZE: f64 = FILES as f64 * HEX_HEIGHT;

/// Everything needed to draw one hexagon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellVisual {
    /// where on the board this cell is
    pub hex: Hexagon,
    /// offset from the top of the board in pixels
    pub top: f64,
    /// offset from the left of the board in pixels
    pub left: f64,
    #[allow(missing_docs)]
    pub width: f64,
    #[allow(missing_docs)]
    pub height: f64,
    /// css background color
    pub background: &'static str,
    /// the piece drawn on top, if any
    pub piece: Option<Piece>,
    /// the raw code the cell was drawn from
    pub code: u8,
}

impl CellVisual {
    /// the image reference for this cell, None only for code 0.
    ///
    /// Codes that aren't a piece still get an image, named `empty`.
    pub fn image_src(&self) -> Option<String> {
        if self.code == 0 {
            return None;
        }
        Some(format!("{}{}", PIECE_ASSET_PATH, piece_name(self.code as i32)))
    }
}

/// Something cells can be drawn into, e.g. a browser element or a markup buffer
pub trait RenderTarget {
    /// throw away everything previously drawn
    fn clear(&mut self);

    /// fix the overall size of the drawing area
    fn set_size(&mut self, width: f64, height: f64);

    /// draw one more cell on top of what's there
    fn append_cell(&mut self, cell: CellVisual);
}

/// index into [COLORS] for the given cell, repeats every 3 ranks
pub fn color_index(file: usize, rank: usize) -> usize {
    (COLOR_OFFSETS[file] + rank) % COLORS.len()
}

/// pixel geometry and color for the cell at `hex` holding piece code `code`.
///
/// Returns None for files that have no layout, i.e. anything past the 11th.
pub fn cell_visual(hex: Hexagon, code: u8) -> Option<CellVisual> {
    let v_offset = *VERTICAL_FILE_OFFSETS.get(hex.file)?;
    Some(CellVisual {
        hex,
        top: hex.rank as f64 * HEX_HEIGHT + v_offset as f64 * HEX_HEIGHT / 2.0,
        left: hex.file as f64 * (HEX_HEIGHT - FILE_OVERLAP),
        width: HEX_WIDTH,
        height: HEX_HEIGHT,
        background: COLORS[color_index(hex.file, hex.rank)],
        piece: Square::from_code(code as i32).piece(),
        code,
    })
}

/// Clears `target` and draws `board` into it, file by file, rank by rank.
///
/// A board without exactly 11 files is reported but still drawn as far as it
/// goes; files past the 11th have no layout and are dropped. Every non-zero
/// code gets an image, unknown codes the `empty` one.
pub fn render<T: RenderTarget>(target: &mut T, board: &[Vec<u8>]) {
    target.clear();

    if board.len() != FILES {
        error!(
            files = board.len(),
            dropped_files = board.len().saturating_sub(FILES),
            "Board needs to be of length {}.",
            FILES
        );
    }

    target.set_size(BOARD_SIZE, BOARD_SIZE);

    for (file, pieces_file) in board.iter().enumerate().take(FILES) {
        for (rank, &code) in pieces_file.iter().enumerate() {
            if let Some(cell) = cell_visual(Hexagon::new(file, rank), code) {
                target.append_cell(cell);
            }
        }
    }
}

#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for showing a game of [Gliński's hexagonal chess](https://en.wikipedia.org/wiki/Hexagonal_chess)
//! in a browser.
//! There are two independent pieces in here: [board_view] lays a board of
//! piece codes out as hexagon cells (position, size, color and piece image)
//! and hands them to a [board_view::RenderTarget], and [session] reads the
//! identity record the auth service stores in the session cookies.
//! Neither one knows any chess rules, they only draw and read what they are
//! given.

use wire_representation::Board;

pub mod board_view;
pub mod session;
pub mod types;
pub mod wire_representation;

#[cfg(test)]
mod test_utils;

/// Loads a board fixture from a given string
pub fn board_fixture(board_fixture: &str) -> Board {
    let b: Result<Board, _> = serde_json::from_str(board_fixture);
    b.expect("the json literal is valid")
}

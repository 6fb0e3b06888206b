//! Per-cell render classification.

/// What a renderer should draw for one cell.
///
/// Layers, lowest first: open floor, visited cells, walls, path cells, then
/// the two endpoint markers on top. A cell walled after the solver explored
/// it shows as a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellView {
    /// Open, untouched cell.
    Empty,
    /// Impassable cell.
    Wall,
    /// Explored by the active solver.
    Visited,
    /// On the active solver's current path.
    Path,
    /// Start marker.
    Start,
    /// End marker.
    End,
}

impl CellView {
    /// Single-character glyph used by text renderers.
    pub fn glyph(self) -> char {
        match self {
            CellView::Empty => '.',
            CellView::Wall => '#',
            CellView::Visited => '+',
            CellView::Path => '*',
            CellView::Start => 'S',
            CellView::End => 'E',
        }
    }
}

//! Tile grid: storage, bounds-checked lookup and layout parsing.
use glam::Vec2;
use thiserror::Error;

/// Wall material of a cell. `0` is empty floor.
pub type TileId = u8;

pub const EMPTY: TileId = 0;

/// Offset used to nudge samples off exact grid lines.
pub const SAMPLE_EPSILON: f32 = 1e-4;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("scene layout is empty")]
    Empty,
    #[error("grid is {cols}x{rows} but {got} tiles were given")]
    SizeMismatch { cols: u32, rows: u32, got: usize },
    #[error("invalid tile {ch:?} at row {row}, column {col}")]
    InvalidTile { ch: char, row: usize, col: usize },
    #[error("start position ({x}, {y}) is outside the grid")]
    StartOutside { x: f32, y: f32 },
    #[error("start position ({x}, {y}) is inside a wall")]
    StartInWall { x: f32, y: f32 },
}

#[derive(Debug, Clone)]
pub struct SceneGrid {
    tiles: Vec<TileId>,
    cols: u32,
    rows: u32,
}

impl SceneGrid {
    /// Build a grid from row-major tiles.
    pub fn new(cols: u32, rows: u32, tiles: Vec<TileId>) -> Result<Self, SceneError> {
        if cols == 0 || rows == 0 {
            return Err(SceneError::Empty);
        }
        let expected = (cols as usize).checked_mul(rows as usize);
        if expected != Some(tiles.len()) {
            return Err(SceneError::SizeMismatch { cols, rows, got: tiles.len() });
        }
        Ok(Self { tiles, cols, rows })
    }

    /// Parse a text layout, one row per line.
    ///
    /// `.`, `0` and space are empty cells, `1`..`9` are tile ids. Indentation
    /// shared by every row is removed, blank lines are skipped and short rows
    /// are padded with empty cells.
    pub fn parse(layout: &str) -> Result<Self, SceneError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .collect();
        let indent = lines
            .iter()
            .map(|l| l.len() - l.trim_start_matches(' ').len())
            .min()
            .unwrap_or(0);

        let mut grid: Vec<Vec<TileId>> = Vec::new();
        for line in lines {
            let line = &line[indent..];
            let row_index = grid.len();
            let mut row = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let id = match ch {
                    '.' | '0' | ' ' => EMPTY,
                    '1'..='9' => ch as u8 - b'0',
                    _ => return Err(SceneError::InvalidTile { ch, row: row_index, col }),
                };
                row.push(id);
            }
            grid.push(row);
        }
        let cols = grid.iter().map(|r| r.len()).max().unwrap_or(0);
        let rows = grid.len();
        let mut tiles = Vec::with_capacity(cols * rows);
        for mut r in grid {
            r.resize(cols, EMPTY);
            tiles.extend(r);
        }
        Self::new(cols as u32, rows as u32, tiles)
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Tile at `(col, row)`.
    ///
    /// # Panics
    /// If the coordinate is outside the grid. Callers clamp beforehand, so
    /// hitting this means the projection or scene data is broken.
    #[inline]
    pub fn tile_at(&self, col: u32, row: u32) -> TileId {
        assert!(
            col < self.cols && row < self.rows,
            "tile ({col}, {row}) outside {}x{} grid",
            self.cols,
            self.rows
        );
        self.tiles[row as usize * self.cols as usize + col as usize]
    }

    /// Tile owning the cell that contains `point`, or `None` off-grid.
    pub fn tile_containing(&self, point: Vec2) -> Option<TileId> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let (col, row) = (point.x as u32, point.y as u32);
        (col < self.cols && row < self.rows).then(|| self.tile_at(col, row))
    }

    /// Wall touched by a point lying on (or near) a grid line.
    ///
    /// Points on or within [`SAMPLE_EPSILON`] of the outer border report
    /// [`EMPTY`]. Otherwise the four diagonal neighbours of the point are
    /// sampled and the first wall found wins.
    pub fn point_touching_wall(&self, point: Vec2) -> TileId {
        let (w, h) = (self.cols as f32, self.rows as f32);
        if !(point.x > SAMPLE_EPSILON
            && point.x < w - SAMPLE_EPSILON
            && point.y > SAMPLE_EPSILON
            && point.y < h - SAMPLE_EPSILON)
        {
            return EMPTY;
        }
        for sx in [1.0, -1.0] {
            for sy in [1.0, -1.0] {
                let col = (point.x + sx * SAMPLE_EPSILON) as u32;
                let row = (point.y + sy * SAMPLE_EPSILON) as u32;
                let id = self.tile_at(col, row);
                if id != EMPTY {
                    return id;
                }
            }
        }
        EMPTY
    }

    /// Check that `pos` is a legal place to stand.
    pub fn check_start(&self, pos: Vec2) -> Result<(), SceneError> {
        match self.tile_containing(pos) {
            None => Err(SceneError::StartOutside { x: pos.x, y: pos.y }),
            Some(EMPTY) => Ok(()),
            Some(_) => Err(SceneError::StartInWall { x: pos.x, y: pos.y }),
        }
    }
}

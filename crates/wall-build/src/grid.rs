use serde::{Deserialize, Serialize};
use wall_core::{BrickId, ErrorInfo, Footprint, Length, WallError, WallGeometry};

/// Identifier of a stride cell; cells are numbered row-major from the
/// bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(u32);

impl CellId {
    /// Creates an identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Returns the identifier as a vector index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// One robot work region, clipped to the wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrideCell {
    /// Raster identifier.
    pub id: CellId,
    /// Row, counted from the bottom.
    pub row: u32,
    /// Column, counted from the left.
    pub col: u32,
    /// Left edge.
    pub x: Length,
    /// Bottom edge.
    pub y: Length,
    /// Width after clipping to the wall.
    pub width: Length,
    /// Height after clipping to the wall.
    pub height: Length,
    /// Bricks assigned to the cell, in id order.
    pub bricks: Vec<BrickId>,
}

impl StrideCell {
    /// Rectangle covered by the cell.
    pub fn footprint(&self) -> Footprint {
        Footprint {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Regular tiling of the wall by stride envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrideGrid {
    rows: u32,
    cols: u32,
    stride_width: Length,
    stride_height: Length,
    wall_width: Length,
    wall_height: Length,
    cells: Vec<StrideCell>,
}

impl StrideGrid {
    /// Tiles the wall with `ceil(wall / stride)` cells per axis.
    pub fn new(geometry: &WallGeometry) -> Result<Self, WallError> {
        let dims = geometry.dimensions();
        let overflow = |code: &str, message: &str| {
            WallError::StrideOverflow(
                ErrorInfo::new(code, message)
                    .with_context("stride_width", dims.stride_width)
                    .with_context("stride_height", dims.stride_height)
                    .with_context("wall_width", dims.wall_width)
                    .with_context("wall_height", dims.wall_height),
            )
        };
        let cols = dims
            .wall_width
            .div_ceil(dims.stride_width)
            .ok_or_else(|| overflow("empty-stride", "stride width must be positive"))?;
        let rows = dims
            .wall_height
            .div_ceil(dims.stride_height)
            .ok_or_else(|| overflow("empty-stride", "stride height must be positive"))?;
        let count = rows
            .checked_mul(cols)
            .filter(|count| *count > 0)
            .ok_or_else(|| overflow("grid-size", "stride grid cannot be represented"))?;

        let mut cells = Vec::with_capacity(count as usize);
        for row in 0..rows {
            let y = dims.stride_height * row;
            let height = (dims.wall_height - y).min(dims.stride_height);
            for col in 0..cols {
                let x = dims.stride_width * col;
                let width = (dims.wall_width - x).min(dims.stride_width);
                cells.push(StrideCell {
                    id: CellId(row * cols + col),
                    row,
                    col,
                    x,
                    y,
                    width,
                    height,
                    bricks: Vec::new(),
                });
            }
        }

        Ok(Self {
            rows,
            cols,
            stride_width: dims.stride_width,
            stride_height: dims.stride_height,
            wall_width: dims.wall_width,
            wall_height: dims.wall_height,
            cells,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Never true for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in raster order.
    pub fn cells(&self) -> &[StrideCell] {
        &self.cells
    }

    /// Cell by identifier.
    pub fn cell(&self, id: CellId) -> Option<&StrideCell> {
        self.cells.get(id.index())
    }

    /// Cell by grid coordinate.
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&StrideCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get((row * self.cols + col) as usize)
    }

    /// Cell containing the centroid of `footprint`.
    ///
    /// Cells are half-open, so a centroid on an interior boundary belongs to
    /// the cell to its right or above; a centroid on the far wall edge is
    /// clamped into the last cell.
    pub fn locate(&self, footprint: &Footprint) -> Result<CellId, WallError> {
        let (cx, cy) = footprint.doubled_centroid();
        let col = axis_index(cx, self.stride_width, self.wall_width, self.cols);
        let row = axis_index(cy, self.stride_height, self.wall_height, self.rows);
        match (row, col) {
            (Some(row), Some(col)) => Ok(CellId(row * self.cols + col)),
            _ => Err(WallError::StrideOverflow(
                ErrorInfo::new("centroid-outside-wall", "brick centroid lies outside the wall")
                    .with_context("x", footprint.x)
                    .with_context("y", footprint.y)
                    .with_context("width", footprint.width)
                    .with_context("height", footprint.height),
            )),
        }
    }

    pub(crate) fn assign(&mut self, cell: CellId, brick: BrickId) {
        if let Some(cell) = self.cells.get_mut(cell.index()) {
            cell.bricks.push(brick);
        }
    }
}

/// Index along one axis of a doubled coordinate.
fn axis_index(doubled: u64, stride: Length, extent: Length, count: u32) -> Option<u32> {
    if doubled > 2 * u64::from(extent.tenths()) {
        return None;
    }
    let index = doubled / (2 * u64::from(stride.tenths()));
    Some(index.min(u64::from(count) - 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wall_core::Dimensions;

    fn footprint(x: u32, y: u32, width: u32, height: u32) -> Footprint {
        Footprint {
            x: Length::from_mm(x),
            y: Length::from_mm(y),
            width: Length::from_mm(width),
            height: Length::from_mm(height),
        }
    }

    #[test]
    fn default_grid_clips_last_cells() {
        let grid = StrideGrid::new(&WallGeometry::standard().unwrap()).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.len(), 6);
        let corner = grid.cell_at(1, 2).unwrap();
        assert_eq!(corner.id, CellId::from_raw(5));
        assert_eq!(corner.width, Length::from_mm(700));
        assert_eq!(corner.height, Length::from_mm(700));
        assert!(grid.cell_at(2, 0).is_none());
    }

    #[test]
    fn boundary_centroid_goes_right_and_up() {
        let grid = StrideGrid::new(&WallGeometry::standard().unwrap()).unwrap();
        let on_boundary = footprint(700, 1250, 200, 100);
        assert_eq!(grid.locate(&on_boundary).unwrap(), CellId::from_raw(4));
        let left = footprint(690, 0, 210, 50);
        assert_eq!(grid.locate(&left).unwrap(), CellId::from_raw(0));
    }

    #[test]
    fn far_edge_is_clamped_and_beyond_rejected() {
        let grid = StrideGrid::new(&WallGeometry::standard().unwrap()).unwrap();
        let edge = footprint(2300, 2000, 0, 0);
        assert_eq!(grid.locate(&edge).unwrap(), CellId::from_raw(5));
        let outside = footprint(2300, 0, 100, 50);
        assert!(matches!(
            grid.locate(&outside),
            Err(WallError::StrideOverflow(info)) if info.code == "centroid-outside-wall"
        ));
    }

    #[test]
    fn stride_larger_than_wall_gives_one_cell() {
        let geometry = Dimensions::default()
            .with_wall(Length::from_mm(650), Length::from_mm(500))
            .validate(true)
            .unwrap();
        let grid = StrideGrid::new(&geometry).unwrap();
        assert_eq!(grid.shape(), (1, 1));
        assert_eq!(grid.cells()[0].width, Length::from_mm(650));
    }
}

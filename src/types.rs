use crate::error::AnalyzeError;
use crate::geometry::CardRegion;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One detected card and the group it was matched into.
///
/// Two results share `group_id` iff the matcher paired them; every other
/// result carries an id of its own. Ids start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResult {
    pub region: CardRegion,
    pub group_id: u32,
}

/// Grid dimensions supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: u32,
    pub cols: u32,
}

impl GridShape {
    /// Board layouts offered by the game, smallest first.
    pub const PRESETS: [GridShape; 8] = [
        GridShape::new(2, 2),
        GridShape::new(3, 2),
        GridShape::new(4, 2),
        GridShape::new(4, 3),
        GridShape::new(4, 4),
        GridShape::new(5, 4),
        GridShape::new(6, 4),
        GridShape::new(6, 5),
    ];

    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Reject grids with a zero dimension.
    pub fn validate(&self) -> Result<(), AnalyzeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(AnalyzeError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// `rows × cols`, the upper bound on detected cards.
    pub fn expected_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Layout that follows `self` in [`Self::PRESETS`], if any.
    pub fn next_preset(&self) -> Option<GridShape> {
        let pos = Self::PRESETS.iter().position(|g| g == self)?;
        Self::PRESETS.get(pos + 1).copied()
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for GridShape {
    type Err = String;

    /// Parse `"RxC"` (also accepts `X` and `×`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(|ch: char| matches!(ch, 'x' | 'X' | '×'));
        let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("expected grid as ROWSxCOLS, got '{s}'"));
        };
        let rows: u32 = r
            .trim()
            .parse()
            .map_err(|e| format!("invalid row count '{r}': {e}"))?;
        let cols: u32 = c
            .trim()
            .parse()
            .map_err(|e| format!("invalid column count '{c}': {e}"))?;
        let grid = GridShape::new(rows, cols);
        grid.validate().map_err(|e| e.to_string())?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_by_cols() {
        assert_eq!("6x5".parse::<GridShape>().unwrap(), GridShape::new(6, 5));
        assert_eq!(" 4 X 3 ".parse::<GridShape>().unwrap(), GridShape::new(4, 3));
    }

    #[test]
    fn rejects_malformed_grids() {
        assert!("6".parse::<GridShape>().is_err());
        assert!("6x5x2".parse::<GridShape>().is_err());
        assert!("0x5".parse::<GridShape>().is_err());
        assert!("ax5".parse::<GridShape>().is_err());
    }

    #[test]
    fn presets_chain_in_order() {
        assert_eq!(GridShape::new(2, 2).next_preset(), Some(GridShape::new(3, 2)));
        assert_eq!(GridShape::new(6, 5).next_preset(), None);
        assert_eq!(GridShape::new(7, 7).next_preset(), None);
        assert_eq!(GridShape::new(6, 5).expected_count(), 30);
    }
}

/// Grid dimensions for tiling mosaic players.
///
/// Tiles fill a near-square grid: `columns = ceil(sqrt(n))`,
/// `rows = ceil(n / columns)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicGrid {
    pub columns: usize,
    pub rows: usize,
}

impl MosaicGrid {
    pub fn for_count(count: usize) -> Self {
        if count == 0 {
            return Self {
                columns: 0,
                rows: 0,
            };
        }

        let mut columns = 1;
        while columns * columns < count {
            columns += 1;
        }
        let rows = count.div_ceil(columns);
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(count: usize) -> (usize, usize) {
        let g = MosaicGrid::for_count(count);
        (g.columns, g.rows)
    }

    #[test]
    fn test_empty() {
        let g = MosaicGrid::for_count(0);
        assert!(g.is_empty());
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(grid(1), (1, 1));
        assert_eq!(grid(2), (2, 1));
        assert_eq!(grid(3), (2, 2));
        assert_eq!(grid(4), (2, 2));
        assert_eq!(grid(5), (3, 2));
        assert_eq!(grid(9), (3, 3));
        assert_eq!(grid(10), (4, 3));
    }
}

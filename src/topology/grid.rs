//! Deterministic grid placement of access points.

use crate::topology::types::Point3;

/// Centres of the grid cells used to place one AP per cell.
///
/// The map is split into `rows` x `cols` equal cells, filled row by row from
/// the origin. Only the first `num_wlans` cells are returned.
///
/// # Examples
/// ```
/// use wlangen::topology::grid_centers;
///
/// let centers = grid_centers(300.0, 300.0, 3, 3, 9);
/// assert_eq!((centers[4].x, centers[4].y), (150.0, 150.0));
/// ```
pub fn grid_centers(
    map_width: f64,
    map_height: f64,
    rows: usize,
    cols: usize,
    num_wlans: usize,
) -> Vec<Point3> {
    let cell_width = map_width / cols as f64;
    let cell_height = map_height / rows as f64;

    let mut row_counter = 0usize;
    let mut centers = Vec::with_capacity(num_wlans);

    for c in 0..num_wlans {
        let x = (c % cols) as f64 * cell_width + cell_width / 2.0;
        let y = cell_height / 2.0 + row_counter as f64 * cell_height;
        centers.push(Point3::planar(x, y));

        // Row complete
        if c % cols == cols - 1 {
            row_counter += 1;
        }
    }

    centers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_by_three_grid() {
        let centers = grid_centers(300.0, 300.0, 3, 3, 9);
        let expected = [
            (50.0, 50.0),
            (150.0, 50.0),
            (250.0, 50.0),
            (50.0, 150.0),
            (150.0, 150.0),
            (250.0, 150.0),
            (50.0, 250.0),
            (150.0, 250.0),
            (250.0, 250.0),
        ];

        assert_eq!(centers.len(), 9);
        for (center, (x, y)) in centers.iter().zip(expected) {
            assert_eq!(center.x, x);
            assert_eq!(center.y, y);
            assert_eq!(center.z, 0.0);
        }
    }

    #[test]
    fn test_rectangular_map() {
        let centers = grid_centers(90.0, 30.0, 3, 3, 9);
        assert_eq!((centers[0].x, centers[0].y), (15.0, 5.0));
        assert_eq!((centers[8].x, centers[8].y), (75.0, 25.0));
    }

    #[test]
    fn test_non_square_grid_fills_rows() {
        let centers = grid_centers(300.0, 200.0, 2, 3, 6);
        let expected = [(50.0, 50.0), (150.0, 50.0), (250.0, 50.0), (50.0, 150.0), (150.0, 150.0), (250.0, 150.0)];
        for (center, (x, y)) in centers.iter().zip(expected) {
            assert_eq!((center.x, center.y), (x, y));
        }
    }

    #[test]
    fn test_fewer_wlans_than_cells() {
        let centers = grid_centers(300.0, 300.0, 3, 3, 4);
        assert_eq!(centers.len(), 4);
        assert_eq!((centers[3].x, centers[3].y), (50.0, 150.0));
    }

    #[test]
    fn test_placement_is_deterministic() {
        assert_eq!(
            grid_centers(123.0, 456.0, 3, 3, 9),
            grid_centers(123.0, 456.0, 3, 3, 9)
        );
    }
}

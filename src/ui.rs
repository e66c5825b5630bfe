// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared view state: the pan/zoom transform between terminal cells and map
//! coordinates.
//!
//! `scale` is horizontal cells per map unit; vertical extent is corrected by
//! [`CELL_ASPECT`] because terminal cells are taller than they are wide.

use crate::model::Point2;

/// Approximate width/height ratio of a terminal cell.
pub const CELL_ASPECT: f64 = 0.5;

const MIN_SCALE: f64 = 1.0 / 4096.0;
const MAX_SCALE: f64 = 64.0;
const ZOOM_STEP: f64 = 1.25;
const FIT_MARGIN: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Point2,
    scale: f64,
}

impl Viewport {
    pub fn new(center: Point2, scale: f64) -> Self {
        Self {
            center,
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
        }
    }

    /// Frames the given map bounds inside a view of `width` x `height` cells.
    pub fn fit(min: Point2, max: Point2, width: f64, height: f64) -> Self {
        let center = Point2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
        let extent_x = (max.x - min.x).max(1.0) * FIT_MARGIN;
        let extent_y = (max.y - min.y).max(1.0) * FIT_MARGIN;

        let scale_x = width.max(1.0) / extent_x;
        let scale_y = height.max(1.0) / (extent_y * CELL_ASPECT);
        Self::new(center, scale_x.min(scale_y).max(MIN_SCALE))
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Horizontal cells per map unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan_cells(&mut self, dx: f64, dy: f64) {
        self.center.x += dx / self.scale;
        self.center.y += dy / (self.scale * CELL_ASPECT);
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Map-space x range covered by a view of `width` cells.
    pub fn x_bounds(&self, width: f64) -> [f64; 2] {
        let half = width / self.scale / 2.0;
        [self.center.x - half, self.center.x + half]
    }

    /// Map-space y range covered by a view of `height` cells.
    pub fn y_bounds(&self, height: f64) -> [f64; 2] {
        let half = height / (self.scale * CELL_ASPECT) / 2.0;
        [self.center.y - half, self.center.y + half]
    }

    /// Converts a cell position (view-relative, row 0 at the top) to map
    /// coordinates, sampling the cell center.
    pub fn cell_to_map(&self, col: f64, row: f64, width: f64, height: f64) -> Point2 {
        let x = self.center.x + (col + 0.5 - width / 2.0) / self.scale;
        let y = self.center.y + (height / 2.0 - row - 0.5) / (self.scale * CELL_ASPECT);
        Point2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use crate::model::Point2;

    #[test]
    fn fit_centers_the_bounds() {
        let viewport = Viewport::fit(
            Point2::new(0.0, 0.0),
            Point2::new(256.0, 256.0),
            80.0,
            40.0,
        );
        assert_eq!(viewport.center(), Point2::new(128.0, 128.0));

        let [x0, x1] = viewport.x_bounds(80.0);
        assert!(x0 <= 0.0 && x1 >= 256.0);
        let [y0, y1] = viewport.y_bounds(40.0);
        assert!(y0 <= 0.0 && y1 >= 256.0);
    }

    #[test]
    fn cell_to_map_hits_the_view_center() {
        let viewport = Viewport::new(Point2::new(100.0, 50.0), 0.5);
        let p = viewport.cell_to_map(39.5, 19.5, 80.0, 40.0);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn cell_rows_grow_south() {
        let viewport = Viewport::new(Point2::new(0.0, 0.0), 1.0);
        let top = viewport.cell_to_map(40.0, 0.0, 80.0, 40.0);
        let bottom = viewport.cell_to_map(40.0, 39.0, 80.0, 40.0);
        assert!(top.y > bottom.y);
    }

    #[test]
    fn pan_moves_in_map_units_scaled_by_zoom() {
        let mut viewport = Viewport::new(Point2::new(0.0, 0.0), 2.0);
        viewport.pan_cells(10.0, 0.0);
        assert_eq!(viewport.center(), Point2::new(5.0, 0.0));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut viewport = Viewport::new(Point2::new(0.0, 0.0), 1.0);
        for _ in 0..200 {
            viewport.zoom_in();
        }
        let max = viewport.scale();
        viewport.zoom_in();
        assert_eq!(viewport.scale(), max);
    }
}

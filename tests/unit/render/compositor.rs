//! Tests for weighted mask compositing

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use polymosaic::MosaicError;
    use polymosaic::grid::GridCell;
    use polymosaic::grid::sampling::sample_cells;
    use polymosaic::render::{MosaicCompositor, render};
    use polymosaic::shapes::Shape;
    use polymosaic::shapes::params::{CircleParams, RectangleParams};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn rectangles(overlap: f64) -> MosaicCompositor {
        MosaicCompositor::new(Shape::Rectangle(RectangleParams { overlap }))
    }

    fn noise_image(width: u32, height: u32, seed: u64) -> RgbImage {
        let mut rng = StdRng::seed_from_u64(seed);
        RgbImage::from_fn(width, height, |_, _| Rgb(rng.random()))
    }

    // Tests an empty cell list renders a black canvas of the requested size
    // Verified by returning an empty image
    #[test]
    fn test_empty_cells_render_black() {
        let output = rectangles(1.0).render(&[], 5, 3);
        assert_eq!(output.dimensions(), (5, 3));
        assert!(output.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    // Tests a single cell without overlap fills the canvas with its colour
    // Verified by truncating instead of rounding the blended value
    #[test]
    fn test_single_cell_fills_canvas() {
        let cells = [GridCell::new(0, 0, [200, 100, 50], 10, 10)];
        let output = rectangles(0.0).render(&cells, 10, 10);
        assert!(output.pixels().all(|p| *p == Rgb([200, 100, 50])));
    }

    // Tests pixels no mask reaches stay black
    // Verified by dividing by the raw weight without the floor
    #[test]
    fn test_uncovered_pixels_stay_black() {
        let cells = [GridCell::new(0, 0, [90, 90, 90], 5, 5)];
        let output = rectangles(0.0).render(&cells, 10, 10);

        assert_eq!(output.get_pixel(2, 2), &Rgb([90, 90, 90]));
        assert_eq!(output.get_pixel(7, 2), &Rgb([0, 0, 0]));
        assert_eq!(output.get_pixel(2, 7), &Rgb([0, 0, 0]));
        assert_eq!(output.get_pixel(9, 9), &Rgb([0, 0, 0]));
    }

    // Tests overlapping masks average their colours by coverage
    // Verified by letting the later cell paint over the earlier one
    #[test]
    fn test_overlap_averages_colours() {
        let cells = [
            GridCell::new(0, 0, [200, 0, 0], 4, 4),
            GridCell::new(0, 1, [0, 0, 100], 4, 4),
        ];
        let output = rectangles(1.0).render(&cells, 8, 4);

        for y in 0..4 {
            assert_eq!(output.get_pixel(0, y), &Rgb([200, 0, 0]));
            assert_eq!(output.get_pixel(1, y), &Rgb([200, 0, 0]));
            for x in 2..6 {
                assert_eq!(output.get_pixel(x, y), &Rgb([100, 0, 50]));
            }
            assert_eq!(output.get_pixel(6, y), &Rgb([0, 0, 100]));
            assert_eq!(output.get_pixel(7, y), &Rgb([0, 0, 100]));
        }
    }

    // Tests the output does not depend on the order of the cells
    // Verified by blending each mask over the running image
    #[test]
    fn test_render_is_order_independent() {
        let source = noise_image(24, 18, 7);
        let cells = sample_cells(&source, 4, 3).unwrap_or_default();
        assert_eq!(cells.len(), 12);

        let mut rng = StdRng::seed_from_u64(42);
        for name in ["rectangle", "triangle", "circle", "diamond", "star"] {
            let compositor = MosaicCompositor::new(Shape::from_name(name).unwrap_or_default());
            let expected = compositor.render(&cells, 24, 18);

            for _ in 0..3 {
                let mut shuffled = cells.clone();
                shuffled.shuffle(&mut rng);
                assert_eq!(
                    compositor.render(&shuffled, 24, 18),
                    expected,
                    "{name} changed with cell order"
                );
            }
        }
    }

    // Tests a uniform colour is reproduced exactly however much masks overlap
    // Verified by normalising with the cell count instead of the weight sum
    #[test]
    fn test_uniform_colour_is_not_brightened() {
        let cells: Vec<_> = (0..2)
            .flat_map(|row| (0..2).map(move |col| GridCell::new(row, col, [77, 77, 77], 5, 5)))
            .collect();
        let circles = MosaicCompositor::new(Shape::Circle(CircleParams::default()));

        for samples in [1, 4] {
            let output = circles
                .with_supersampling(samples)
                .map(|c| c.render(&cells, 10, 10))
                .unwrap_or_default();
            assert_eq!(output.dimensions(), (10, 10));
            assert!(output.pixels().all(|p| *p == Rgb([77, 77, 77])));
        }
    }

    // Tests cells clipped away by a small canvas are skipped yet still reported
    // Verified by stopping progress at the first skipped cell
    #[test]
    fn test_degenerate_cells_are_skipped() {
        let cells = [
            GridCell::new(0, 0, [200, 0, 0], 4, 4),
            GridCell::new(0, 1, [0, 0, 100], 4, 4),
        ];
        let mut reported = Vec::new();
        let output = rectangles(1.0).render_with_progress(&cells, 4, 4, |done| reported.push(done));

        assert_eq!(reported, vec![1, 2]);
        assert!(output.pixels().all(|p| *p == Rgb([200, 0, 0])));
    }

    // Tests progress is reported once per cell in order
    // Verified by reporting only after the final cell
    #[test]
    fn test_progress_counts_every_cell() {
        let source = noise_image(12, 12, 3);
        let cells = sample_cells(&source, 3, 3).unwrap_or_default();
        let mut reported = Vec::new();
        let _ = MosaicCompositor::new(Shape::default())
            .render_with_progress(&cells, 12, 12, |done| reported.push(done));
        assert_eq!(reported, (1..=9).collect::<Vec<_>>());
    }

    // Tests the named entry point matches the compositor and rejects unknown names
    // Verified by ignoring the shape name
    #[test]
    fn test_render_by_name() {
        let cells = [GridCell::new(0, 0, [10, 20, 30], 6, 6)];
        let named = render(&cells, 6, 6, "Diamond").ok();
        let direct = MosaicCompositor::new(Shape::from_name("diamond").unwrap_or_default())
            .render(&cells, 6, 6);
        assert_eq!(named, Some(direct));

        assert!(matches!(
            render(&cells, 6, 6, "hexagon"),
            Err(MosaicError::InvalidShapeType { .. })
        ));
    }

    // Tests supersampling is limited to one through eight samples per axis
    // Verified by accepting zero samples
    #[test]
    fn test_supersampling_range() {
        let compositor = MosaicCompositor::new(Shape::default());
        assert_eq!(compositor.supersampling(), 1);
        assert!(matches!(
            compositor.with_supersampling(0),
            Err(MosaicError::InvalidParameter { .. })
        ));
        assert!(compositor.with_supersampling(9).is_err());
        assert_eq!(
            compositor.with_supersampling(8).map(|c| c.supersampling()).ok(),
            Some(8)
        );
    }

    // Tests anti-aliased rendering keeps flat regions exact and stays in range
    // Verified by skipping normalisation for fractional weights
    #[test]
    fn test_supersampled_render_blends_edges() {
        let cells = [
            GridCell::new(0, 0, [255, 0, 0], 8, 8),
            GridCell::new(0, 1, [0, 0, 255], 8, 8),
        ];
        let output = MosaicCompositor::new(Shape::Circle(CircleParams::default()))
            .with_supersampling(4)
            .map(|c| c.render(&cells, 16, 8))
            .unwrap_or_default();

        assert_eq!(output.dimensions(), (16, 8));
        let middle = output.get_pixel(8, 4);
        assert!(middle[0] > 0 && middle[2] > 0);
        assert_eq!(middle[1], 0);
    }
}

//! Tests for the shape factory, record conversion and mask creation

#[cfg(test)]
mod tests {
    use polymosaic::MosaicError;
    use polymosaic::io::configuration::MAX_STAR_POINTS;
    use polymosaic::shapes::geometry::{CellPlacement, Footprint};
    use polymosaic::shapes::params::{
        CircleParams, DiamondParams, RectangleParams, StarParams, TriangleParams,
    };
    use polymosaic::shapes::raster::CanvasSize;
    use polymosaic::shapes::{SHAPE_NAMES, Shape};
    use serde_json::json;

    fn centred_cell(row: usize) -> CellPlacement {
        CellPlacement {
            center_x: 15.0,
            center_y: 15.0,
            cell_width: 10.0,
            cell_height: 10.0,
            row,
        }
    }

    fn polygon(footprint: Footprint) -> Vec<[f64; 2]> {
        match footprint {
            Footprint::Polygon(vertices) => vertices,
            Footprint::Box(_) | Footprint::Disc { .. } => Vec::new(),
        }
    }

    // Tests every listed name builds the matching default variant
    // Verified by mapping two names to the same variant
    #[test]
    fn test_from_name_covers_all_shapes() {
        for name in SHAPE_NAMES {
            let shape = Shape::from_name(name);
            assert!(shape.is_ok(), "{name} should be recognised");
            assert_eq!(shape.map(|s| s.name()).unwrap_or_default(), name);
        }
        assert_eq!(
            Shape::from_name("circle").ok(),
            Some(Shape::Circle(CircleParams::default()))
        );
    }

    // Tests names are matched case-insensitively and ignoring surrounding space
    // Verified by comparing names exactly
    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(
            Shape::from_name(" Star ").ok(),
            Some(Shape::Star(StarParams::default()))
        );
        assert_eq!("DIAMOND".parse::<Shape>().map(|s| s.name()).ok(), Some("diamond"));
    }

    // Tests unknown names are rejected with the offending name
    // Verified by falling back to rectangles for unknown names
    #[test]
    fn test_from_name_rejects_unknown() {
        let result = Shape::from_name("hexagon");
        assert!(matches!(
            result,
            Err(MosaicError::InvalidShapeType { ref name }) if name == "hexagon"
        ));
        assert!(Shape::from_name("").is_err());
    }

    // Tests the default shape is a rectangle with the default overlap
    // Verified by defaulting to a circle
    #[test]
    fn test_default_shape_is_rectangle() {
        assert_eq!(Shape::default(), Shape::Rectangle(RectangleParams::default()));
        assert_eq!(Shape::default().to_string(), "rectangle");
    }

    // Tests records carry the type tag and every parameter
    // Verified by omitting the tag during serialisation
    #[test]
    fn test_to_record_is_tagged() {
        let record = Shape::Star(StarParams {
            size_multiplier: 2.0,
            points: 7,
        })
        .to_record()
        .ok();
        assert_eq!(
            record,
            Some(json!({"type": "star", "size_multiplier": 2.0, "points": 7}))
        );
    }

    // Tests a shape survives conversion to a record and back
    // Verified by dropping parameters from the record
    #[test]
    fn test_record_round_trip() {
        let shapes = [
            Shape::Rectangle(RectangleParams { overlap: 0.25 }),
            Shape::Triangle(TriangleParams {
                size_multiplier: 2.0,
                first_row_multiplier: 3.0,
            }),
            Shape::Star(StarParams {
                size_multiplier: 1.0,
                points: 9,
            }),
        ];
        for shape in shapes {
            let restored = shape.to_record().and_then(|r| Shape::from_record(&r));
            assert_eq!(restored.ok(), Some(shape));
        }
    }

    // Tests missing parameters take defaults and the tag is case-insensitive
    // Verified by requiring every field to be present
    #[test]
    fn test_from_record_fills_defaults() {
        let shape = Shape::from_record(&json!({"type": "STAR", "points": 6, "colour": "red"}));
        assert_eq!(
            shape.ok(),
            Some(Shape::Star(StarParams {
                size_multiplier: 1.6,
                points: 6,
            }))
        );

        let circle = Shape::from_record_str(r#"{"type": "circle"}"#);
        assert_eq!(circle.ok(), Some(Shape::Circle(CircleParams::default())));
    }

    // Tests each malformed record maps to its own error kind
    // Verified by collapsing all record failures into one variant
    #[test]
    fn test_from_record_errors() {
        assert!(matches!(
            Shape::from_record(&json!({"type": "hexagon"})),
            Err(MosaicError::InvalidShapeType { .. })
        ));
        assert!(matches!(
            Shape::from_record(&json!({"type": "circle", "radius_multiplier": "big"})),
            Err(MosaicError::MalformedRecord { .. })
        ));
        assert!(matches!(
            Shape::from_record(&json!({"type": "circle", "radius_multiplier": -1.0})),
            Err(MosaicError::InvalidParameter {
                parameter: "radius_multiplier",
                ..
            })
        ));
        assert!(matches!(
            Shape::from_record(&json!({"type": "star", "points": 1})),
            Err(MosaicError::InvalidParameter {
                parameter: "points",
                ..
            })
        ));
        assert!(matches!(
            Shape::from_record(&json!({"points": 5})),
            Err(MosaicError::InvalidParameter { parameter: "type", .. })
        ));
        assert!(matches!(
            Shape::from_record(&json!([1, 2])),
            Err(MosaicError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Shape::from_record_str("{not json"),
            Err(MosaicError::MalformedRecord { .. })
        ));
    }

    // Tests oversized star tip counts from a record are rejected before rendering
    // Verified by validating only the lower bound
    #[test]
    fn test_from_record_rejects_huge_star() {
        let record = json!({"type": "star", "points": u32::MAX});
        assert!(matches!(
            Shape::from_record(&record),
            Err(MosaicError::InvalidParameter {
                parameter: "points",
                ..
            })
        ));
    }

    // Tests unvalidated stars still draw with a bounded tip count
    // Verified by passing the raw tip count to the vertex builder
    #[test]
    fn test_unvalidated_star_is_clamped() {
        let star = Shape::Star(StarParams {
            size_multiplier: 1.6,
            points: u32::MAX,
        });
        let vertices = polygon(star.footprint(&centred_cell(1)));
        assert_eq!(vertices.len(), 2 * MAX_STAR_POINTS as usize);
    }

    // Tests tip counts may be written as integral floats but not fractions
    // Verified by deserialising the count as an integer only
    #[test]
    fn test_star_points_accept_integral_floats() {
        assert_eq!(
            Shape::from_record(&json!({"type": "star", "points": 6.0})).ok(),
            Some(Shape::Star(StarParams {
                size_multiplier: 1.6,
                points: 6,
            }))
        );
        assert!(matches!(
            Shape::from_record(&json!({"type": "star", "points": 5.5})),
            Err(MosaicError::MalformedRecord { .. })
        ));
        assert!(matches!(
            Shape::from_record(&json!({"type": "star", "points": -3})),
            Err(MosaicError::MalformedRecord { .. })
        ));
    }

    // Tests triangles on the first row draw with the larger multiplier
    // Verified by ignoring the row index
    #[test]
    fn test_triangle_first_row_is_larger() {
        let shape = Shape::Triangle(TriangleParams::default());
        let canvas = CanvasSize::new(60, 60);

        let first = shape.create_mask(canvas, &centred_cell(0));
        let later = shape.create_mask(canvas, &centred_cell(1));
        assert!(first.sum() > later.sum());

        let vertices = polygon(shape.footprint(&centred_cell(1)));
        assert_eq!(vertices.len(), 3);
        // Side of 35 around a centre at 15
        assert_eq!(vertices.first().copied(), Some([15.0, -2.5]));
    }

    // Tests circle and star footprints scale with the larger cell dimension
    // Verified by scaling with the cell width only
    #[test]
    fn test_footprints_scale_with_extent() {
        let tall = CellPlacement {
            center_x: 5.0,
            center_y: 10.0,
            cell_width: 4.0,
            cell_height: 20.0,
            row: 1,
        };
        let circle = Shape::Circle(CircleParams::default()).footprint(&tall);
        assert_eq!(
            circle,
            Footprint::Disc {
                center_x: 5.0,
                center_y: 10.0,
                radius: 24.0,
            }
        );

        let star = polygon(Shape::Star(StarParams::default()).footprint(&tall));
        assert_eq!(star.len(), 10);
        let [x, y] = star.first().copied().unwrap_or_default();
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - (10.0 - 16.0)).abs() < 1e-9);
    }

    // Tests masks span the full canvas and bleed past the cell
    // Verified by clipping masks to the cell rectangle
    #[test]
    fn test_mask_bleeds_beyond_cell() {
        let canvas = CanvasSize::new(30, 30);
        let mask = Shape::Circle(CircleParams::default()).create_mask(canvas, &centred_cell(2));
        assert_eq!(mask.dim(), (30, 30));
        // Column 4 lies outside the cell's 10..20 span but within the radius of 12
        assert!((mask[[15, 4]] - 1.0).abs() < f32::EPSILON);
    }

    // Tests a rectangle without overlap covers exactly its cell
    // Verified by growing the box by the full overlap on each side
    #[test]
    fn test_rectangle_without_overlap_matches_cell() {
        let shape = Shape::Rectangle(RectangleParams { overlap: 0.0 });
        let mask = shape.create_mask(CanvasSize::new(30, 30), &centred_cell(0));
        assert!((mask.sum() - 100.0).abs() < f32::EPSILON);
        assert!((mask[[10, 10]] - 1.0).abs() < f32::EPSILON);
        assert!(mask[[9, 10]].abs() < f32::EPSILON);
    }

    // Tests supersampled masks differ from hard-edged ones only at the edges
    // Verified by supersampling interior pixels to fractional values
    #[test]
    fn test_supersampled_mask_interior_is_solid() {
        let shape = Shape::Diamond(DiamondParams::default());
        let canvas = CanvasSize::new(30, 30);
        let hard = shape.create_mask(canvas, &centred_cell(1));
        let soft = shape.create_mask_supersampled(canvas, &centred_cell(1), 4);

        assert!((hard[[15, 15]] - 1.0).abs() < f32::EPSILON);
        assert!((soft[[15, 15]] - 1.0).abs() < f32::EPSILON);
        assert!(soft.iter().any(|&v| v > 0.0 && v < 1.0));
        assert!(hard.iter().all(|&v| v == 0.0 || v == 1.0));
    }
}

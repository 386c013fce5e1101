//! Result types for hull flattening.

use hull_types::Segment2;

/// Result of flattening a mesh into a planar outline.
#[derive(Debug, Clone)]
pub struct FlattenedHull {
    /// The outline as an ordered, closed cycle of segments.
    pub segments: Vec<Segment2>,

    /// Number of faces in the input mesh.
    pub input_faces: usize,

    /// Number of triangles that survived projection.
    pub projected_triangles: usize,

    /// Number of boundary loops produced by the union stage.
    pub loop_count: usize,

    /// Number of unique boundary points the hull was built over.
    pub node_count: usize,

    /// Number of edge replacements performed while digging concavities.
    pub digs_performed: usize,
}

impl FlattenedHull {
    /// Number of segments in the outline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Check if the outline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of input faces discarded as degenerate during projection.
    #[must_use]
    pub const fn rejected_faces(&self) -> usize {
        self.input_faces - self.projected_triangles
    }

    /// Total length of the outline.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.segments.iter().map(Segment2::length).sum()
    }
}

impl std::fmt::Display for FlattenedHull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Flattened hull: {} faces → {} triangles, {} nodes, {} digs, {} segments",
            self.input_faces,
            self.projected_triangles,
            self.node_count,
            self.digs_performed,
            self.segment_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_types::Point2;

    fn sample() -> FlattenedHull {
        FlattenedHull {
            segments: vec![
                Segment2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
                Segment2::new(Point2::new(1.0, 0.0), Point2::new(0.0, 0.0)),
            ],
            input_faces: 12,
            projected_triangles: 4,
            loop_count: 1,
            node_count: 2,
            digs_performed: 0,
        }
    }

    #[test]
    fn test_counts() {
        let hull = sample();
        assert_eq!(hull.segment_count(), 2);
        assert_eq!(hull.rejected_faces(), 8);
        assert!(!hull.is_empty());
        assert!((hull.perimeter() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        let display = format!("{}", sample());
        assert!(display.contains("12 faces"));
        assert!(display.contains("4 triangles"));
        assert!(display.contains("2 segments"));
    }
}

//! Concave-hull extraction over the union's boundary points.
//!
//! The boundary loops are deduplicated into nodes, a convex hull is built
//! over them, and the hull is then tightened by "digging": an edge is
//! replaced by two edges through a nearby free node whenever the
//! replacement keeps the outline a simple cycle. All working state lives in
//! a per-call context, so concurrent extractions share nothing.

use hashbrown::HashMap;
use hull_types::{Point2, Segment2};
use kiddo::{KdTree, SquaredEuclidean};
use tracing::debug;

use crate::error::{FlattenError, FlattenResult};
use crate::params::FlattenParams;

/// A tightened boundary outline.
#[derive(Debug, Clone)]
pub struct Outline {
    /// The outline as an ordered, closed cycle of segments.
    pub segments: Vec<Segment2>,

    /// Number of unique boundary points the hull was built over.
    pub node_count: usize,

    /// Number of edge replacements performed while digging.
    pub digs_performed: usize,
}

/// Extract a single tightened outline from the union's boundary loops.
///
/// Points from all loops are deduplicated by exact coordinate equality into
/// nodes (ids assigned in first-seen order), a convex hull is constructed,
/// and concavities are dug per [`FlattenParams`]. Digging that cannot
/// consume every node is still a success; it only leaves the outline less
/// concave.
///
/// # Errors
///
/// Returns [`FlattenError::DegenerateProjection`] if fewer than 3 unique
/// points remain after deduplication.
pub fn concave_outline(
    loops: &[Vec<Point2<f64>>],
    params: &FlattenParams,
) -> FlattenResult<Outline> {
    let nodes = dedup_nodes(loops);
    if nodes.len() < 3 {
        return Err(FlattenError::DegenerateProjection {
            actual: nodes.len(),
        });
    }

    let mut ctx = DigContext::new(nodes);
    let hull_edges = ctx.edges.len();
    ctx.dig(params.neighbor_limit, params.concavity);

    debug!(
        nodes = ctx.nodes.len(),
        hull_edges,
        digs = ctx.digs,
        "extracted concave outline"
    );

    Ok(ctx.into_outline())
}

/// Deduplicate loop points by exact equality, preserving first-seen order.
fn dedup_nodes(loops: &[Vec<Point2<f64>>]) -> Vec<Point2<f64>> {
    let mut seen: HashMap<(u64, u64), usize> = HashMap::new();
    let mut nodes = Vec::new();

    for ring in loops {
        for p in ring {
            let key = (p.x.to_bits(), p.y.to_bits());
            seen.entry(key).or_insert_with(|| {
                nodes.push(*p);
                nodes.len() - 1
            });
        }
    }

    nodes
}

/// Working set of one extraction: nodes, placement flags, the ordered edge
/// cycle, and the candidate lookup tree. Dropped when the call returns.
struct DigContext {
    nodes: Vec<Point2<f64>>,
    used: Vec<bool>,
    edges: Vec<[usize; 2]>,
    tree: KdTree<f64, 2>,
    digs: usize,
}

impl DigContext {
    fn new(nodes: Vec<Point2<f64>>) -> Self {
        let hull = convex_hull(&nodes);

        let mut used = vec![false; nodes.len()];
        for &i in &hull {
            used[i] = true;
        }

        let edges = hull
            .iter()
            .enumerate()
            .map(|(k, &i)| [i, hull[(k + 1) % hull.len()]])
            .collect();

        let mut tree: KdTree<f64, 2> = KdTree::new();
        for (i, p) in nodes.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let idx = i as u64;
            tree.add(&[p.x, p.y], idx);
        }

        Self {
            nodes,
            used,
            edges,
            tree,
            digs: 0,
        }
    }

    /// Repeatedly sweep the edge cycle, replacing each edge with two edges
    /// through its best legal candidate, until a sweep changes nothing.
    fn dig(&mut self, neighbor_limit: usize, concavity: f64) {
        if neighbor_limit == 0 {
            return;
        }

        loop {
            let mut replaced = false;
            let mut i = 0;
            while i < self.edges.len() {
                if let Some(node) = self.best_candidate(i, neighbor_limit, concavity) {
                    let [a, b] = self.edges[i];
                    self.edges[i] = [a, node];
                    self.edges.insert(i + 1, [node, b]);
                    self.used[node] = true;
                    self.digs += 1;
                    replaced = true;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            if !replaced {
                break;
            }
        }
    }

    /// The best legal dig candidate for an edge, if any.
    ///
    /// Candidates are the `neighbor_limit` nearest nodes to the edge
    /// midpoint. A candidate is legal when it is unplaced, the cosine of
    /// the angle it subtends over the edge is below `concavity`, and the
    /// two replacement edges cross no other edge of the cycle. The winner
    /// has the smallest cosine (the widest angle, hence the shallowest
    /// dig); ties break on the lower node id.
    fn best_candidate(&self, edge_index: usize, neighbor_limit: usize, concavity: f64) -> Option<usize> {
        let [ia, ib] = self.edges[edge_index];
        let a = self.nodes[ia];
        let b = self.nodes[ib];
        let mid = nalgebra::center(&a, &b);

        let mut best: Option<(f64, usize)> = None;
        for neighbor in self
            .tree
            .nearest_n::<SquaredEuclidean>(&[mid.x, mid.y], neighbor_limit)
        {
            #[allow(clippy::cast_possible_truncation)]
            let i = neighbor.item as usize;
            if self.used[i] {
                continue;
            }

            let p = self.nodes[i];
            let va = a - p;
            let vb = b - p;
            let cos = va.dot(&vb) / (va.norm() * vb.norm());
            if cos >= concavity {
                continue;
            }

            if !self.insertion_keeps_simple(edge_index, p) {
                continue;
            }

            let better = best.map_or(true, |(best_cos, best_id)| {
                cos < best_cos || (cos <= best_cos && i < best_id)
            });
            if better {
                best = Some((cos, i));
            }
        }

        best.map(|(_, i)| i)
    }

    /// Check that replacing an edge with the two edges through `p` leaves
    /// the cycle simple. Edges sharing an endpoint never count as crossing;
    /// only proper crossings reject a candidate.
    fn insertion_keeps_simple(&self, edge_index: usize, p: Point2<f64>) -> bool {
        let [ia, ib] = self.edges[edge_index];
        let a = self.nodes[ia];
        let b = self.nodes[ib];

        for (j, &[ja, jb]) in self.edges.iter().enumerate() {
            if j == edge_index {
                continue;
            }
            let q1 = self.nodes[ja];
            let q2 = self.nodes[jb];
            if segments_cross(a, p, q1, q2) || segments_cross(p, b, q1, q2) {
                return false;
            }
        }

        true
    }

    fn into_outline(self) -> Outline {
        let segments = self
            .edges
            .iter()
            .map(|&[a, b]| Segment2::new(self.nodes[a], self.nodes[b]))
            .collect();

        Outline {
            segments,
            node_count: self.nodes.len(),
            digs_performed: self.digs,
        }
    }
}

/// Convex hull over the node set via Andrew's monotone chain.
///
/// Returns node indices in counter-clockwise cycle order. Collinear points
/// on the hull boundary are dropped; the input points are distinct.
fn convex_hull(points: &[Point2<f64>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        points[a]
            .x
            .total_cmp(&points[b].x)
            .then(points[a].y.total_cmp(&points[b].y))
    });

    let mut hull: Vec<usize> = Vec::with_capacity(order.len() + 1);

    // lower hull
    for &i in &order {
        while hull.len() >= 2
            && cross(
                points[hull[hull.len() - 2]],
                points[hull[hull.len() - 1]],
                points[i],
            ) <= 0.0
        {
            hull.pop();
        }
        hull.push(i);
    }

    // upper hull
    let lower_len = hull.len() + 1;
    for &i in order.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(
                points[hull[hull.len() - 2]],
                points[hull[hull.len() - 1]],
                points[i],
            ) <= 0.0
        {
            hull.pop();
        }
        hull.push(i);
    }

    // the chain ends where it started
    hull.pop();
    hull
}

/// Cross product of (a - o) and (b - o).
fn cross(o: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Strict proper intersection of segments (p1, p2) and (q1, q2). Touching
/// at an endpoint does not count.
fn segments_cross(p1: Point2<f64>, p2: Point2<f64>, q1: Point2<f64>, q2: Point2<f64>) -> bool {
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

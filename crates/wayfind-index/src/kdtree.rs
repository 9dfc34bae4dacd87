//! 2D KD-tree for nearest-neighbor queries.
//!
//! Points are inserted one by one in the order given; the tree is never
//! rebalanced, so its shape depends on insertion order. Nodes at even depth
//! split on x, nodes at odd depth split on y, each breaking ties on the
//! other axis. Left subtrees hold points that compare less than their node,
//! right subtrees hold the rest.

use std::cmp::Ordering;
use std::fmt;

use wayfind_core::{Point, distance};

/// Errors reported when building an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// No point was supplied.
    Empty,
    /// A point had a NaN or infinite coordinate.
    NonFinite(Point),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "index: cannot build from an empty point set"),
            Self::NonFinite(p) => write!(f, "index: point {p} has a non-finite coordinate"),
        }
    }
}

impl std::error::Error for IndexError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Order `a` relative to `b` on this axis, ties broken on the other.
    fn compare(self, a: Point, b: Point) -> Ordering {
        match self {
            Self::X => a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)),
            Self::Y => a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)),
        }
    }

    /// Distance from `q` to the splitting line through `p`.
    #[inline]
    fn split_distance(self, q: Point, p: Point) -> f64 {
        match self {
            Self::X => (q.x - p.x).abs(),
            Self::Y => (q.y - p.y).abs(),
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    point: Point,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(point: Point) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }

    fn insert(&mut self, point: Point, axis: Axis) {
        let slot = if axis.compare(point, self.point) == Ordering::Less {
            &mut self.left
        } else {
            &mut self.right
        };
        match slot {
            Some(child) => child.insert(point, axis.next()),
            None => *slot = Some(Box::new(Node::leaf(point))),
        }
    }

    /// Branch-and-bound descent: near side first, far side only if the
    /// splitting line is strictly closer than the best match so far.
    fn nearest(&self, query: Point, axis: Axis, best: &mut Best) {
        let d = distance(self.point, query);
        if d < best.dist {
            *best = Best {
                point: self.point,
                dist: d,
            };
        }

        let (near, far) = if axis.compare(query, self.point) == Ordering::Less {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        };

        if let Some(near) = near {
            near.nearest(query, axis.next(), best);
        }
        if axis.split_distance(query, self.point) < best.dist {
            if let Some(far) = far {
                far.nearest(query, axis.next(), best);
            }
        }
    }
}

fn check_finite(p: Point) -> Result<Point, IndexError> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(p)
    } else {
        Err(IndexError::NonFinite(p))
    }
}

#[derive(Clone, Copy)]
struct Best {
    point: Point,
    dist: f64,
}

/// A KD-tree over 2D points.
///
/// A `KdTree` always holds at least one point: [`KdTree::new`] rejects an
/// empty input and points are never removed, so [`nearest`](Self::nearest)
/// always has an answer.
#[derive(Debug, Clone)]
pub struct KdTree {
    root: Box<Node>,
    len: usize,
}

impl KdTree {
    /// Build a tree by inserting `points` in order.
    ///
    /// Fails on an empty input or on the first point with a NaN or infinite
    /// coordinate.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Result<Self, IndexError> {
        let mut points = points.into_iter();
        let first = check_finite(points.next().ok_or(IndexError::Empty)?)?;
        let mut tree = Self {
            root: Box::new(Node::leaf(first)),
            len: 1,
        };
        for p in points {
            tree.insert(p)?;
        }
        log::debug!("kdtree: indexed {} points", tree.len);
        Ok(tree)
    }

    /// Add a point as a new leaf. Non-finite points are rejected and leave
    /// the tree unchanged.
    pub fn insert(&mut self, point: Point) -> Result<(), IndexError> {
        let point = check_finite(point)?;
        self.root.insert(point, Axis::X);
        self.len += 1;
        Ok(())
    }

    /// Number of points, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; kept for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The stored point closest to `(x, y)`.
    ///
    /// Among equidistant points the first one reached by the search wins;
    /// which one that is depends on the tree shape.
    pub fn nearest(&self, x: f64, y: f64) -> Point {
        self.nearest_with_distance(x, y).0
    }

    /// Like [`nearest`](Self::nearest), also returning the distance.
    pub fn nearest_with_distance(&self, x: f64, y: f64) -> (Point, f64) {
        let query = Point::new(x, y);
        let mut best = Best {
            point: self.root.point,
            dist: distance(self.root.point, query),
        };
        self.root.nearest(query, Axis::X, &mut best);
        (best.point, best.dist)
    }
}

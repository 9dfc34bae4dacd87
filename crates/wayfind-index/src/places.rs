//! Location lookup by coordinate and by name.

use std::collections::HashMap;

use wayfind_core::{Location, Point};

use crate::kdtree::{IndexError, KdTree};
use crate::trie::Trie;

/// Normalise a location name for indexing: keep ASCII letters and spaces,
/// lowercased.
pub fn clean_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Read-only query index over a set of map locations.
///
/// Routable locations are searchable by coordinate; named locations are
/// searchable by (cleaned) name and name prefix.
#[derive(Debug, Clone)]
pub struct PlaceIndex {
    tree: KdTree,
    /// Id of the location at each indexed point. Every point in `tree` has
    /// an entry; for coincident points the last one given wins.
    ids: HashMap<Point, u64>,
    names: Trie,
    by_name: HashMap<String, Vec<Location>>,
}

impl PlaceIndex {
    /// Index `locations`.
    ///
    /// Only locations for which `routable` returns `true` take part in
    /// [`closest`](Self::closest); those with a NaN or infinite coordinate
    /// are left out of the spatial index. Fails if no routable location
    /// remains.
    pub fn new<I, F>(locations: I, routable: F) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = Location>,
        F: Fn(&Location) -> bool,
    {
        let mut points = Vec::new();
        let mut ids = HashMap::new();
        let mut names = Trie::new();
        let mut by_name: HashMap<String, Vec<Location>> = HashMap::new();

        for loc in locations {
            if routable(&loc) {
                let p = loc.point();
                if p.x.is_finite() && p.y.is_finite() {
                    points.push(p);
                    ids.insert(p, loc.id);
                } else {
                    log::warn!("places: location {} has non-finite coordinates {p}", loc.id);
                }
            }
            if let Some(name) = loc.name.as_deref() {
                let key = clean_name(name);
                names.add(&key);
                by_name.entry(key).or_default().push(loc);
            }
        }

        let tree = KdTree::new(points)?;
        log::debug!(
            "places: {} routable points, {} distinct names",
            tree.len(),
            names.len()
        );
        Ok(Self {
            tree,
            ids,
            names,
            by_name,
        })
    }

    /// Id of the routable location closest to `(lon, lat)`.
    ///
    /// `None` only if the nearest point has no recorded id, which
    /// [`new`](Self::new) rules out.
    pub fn closest(&self, lon: f64, lat: f64) -> Option<u64> {
        let p = self.tree.nearest(lon, lat);
        self.ids.get(&p).copied()
    }

    /// Original names of every location whose cleaned name starts with the
    /// cleaned `prefix`. Order is unspecified.
    pub fn names_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.names
            .keys_with_prefix(&clean_name(prefix))
            .iter()
            .filter_map(|key| self.by_name.get(key))
            .flatten()
            .filter_map(|loc| loc.name.clone())
            .collect()
    }

    /// Every location whose cleaned name equals the cleaned `name`.
    pub fn locations(&self, name: &str) -> &[Location] {
        self.by_name
            .get(&clean_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of routable points.
    pub fn routable_count(&self) -> usize {
        self.tree.len()
    }
}

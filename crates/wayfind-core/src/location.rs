use crate::geom::Point;

/// A map record as produced by the map-loading layer.
///
/// `lon`/`lat` are used as the x/y coordinates for spatial queries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: u64,
    pub lon: f64,
    pub lat: f64,
    pub name: Option<String>,
}

impl Location {
    /// Create an unnamed location.
    pub fn new(id: u64, lon: f64, lat: f64) -> Self {
        Self {
            id,
            lon,
            lat,
            name: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The location's coordinates as a [`Point`] (x = lon, y = lat).
    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_uses_lon_as_x() {
        let loc = Location::new(1, -122.5, 37.75).with_name("Top Dog");
        assert_eq!(loc.point(), Point::new(-122.5, 37.75));
        assert_eq!(loc.name.as_deref(), Some("Top Dog"));
    }
}

//! Map elements placed by the collaborator: the origin and the food sources.

use crate::error::PlacementError;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength assigned to every food source.
pub const DEFAULT_FOOD_STRENGTH: f32 = 1.0;

/// The network origin. Agents are spawned around it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourcePoint(pub Point);

impl SourcePoint {
    /// Construct a source point at `(x, y)`.
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Point::new(x, y))
    }

    /// The source position.
    pub fn position(&self) -> Point {
        self.0
    }
}

/// Free-form category label of a food source (`"house"`, `"station"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodCategory(pub String);

impl FoodCategory {
    /// The category used when the collaborator supplies none.
    pub fn food() -> Self {
        Self("food".to_string())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FoodCategory {
    fn default() -> Self {
        Self::food()
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FoodCategory {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for FoodCategory {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// A target the network should reach.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodSource {
    /// Position in world units.
    pub position: Point,
    /// Category label, carried through for the collaborator.
    pub category: FoodCategory,
    /// Attraction multiplier, [`DEFAULT_FOOD_STRENGTH`] unless set.
    pub strength: f32,
}

impl FoodSource {
    /// A food source at `(x, y)` with the default strength.
    pub fn new(x: f32, y: f32, category: impl Into<FoodCategory>) -> Self {
        Self {
            position: Point::new(x, y),
            category: category.into(),
            strength: DEFAULT_FOOD_STRENGTH,
        }
    }
}

/// A collaborator-side map: at most one source plus any number of food
/// sources.
///
/// Enforces the placement rule that a map carries a single origin. The
/// simulation controller itself accepts a source overwrite; this type is
/// what an editor builds before handing the map over.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    source: Option<SourcePoint>,
    food: Vec<FoodSource>,
}

impl MapLayout {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the origin.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::SourceAlreadyPlaced`] if the map already
    /// has a source, and [`PlacementError::NonFinite`] for NaN/infinite
    /// coordinates.
    pub fn place_source(&mut self, x: f32, y: f32) -> Result<(), PlacementError> {
        let p = Point::new(x, y);
        if !p.is_finite() {
            return Err(PlacementError::NonFinite { x, y });
        }
        if self.source.is_some() {
            return Err(PlacementError::SourceAlreadyPlaced);
        }
        self.source = Some(SourcePoint(p));
        Ok(())
    }

    /// Place a food source.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::NonFinite`] for NaN/infinite coordinates.
    pub fn place_food(
        &mut self,
        x: f32,
        y: f32,
        category: impl Into<FoodCategory>,
    ) -> Result<(), PlacementError> {
        if !Point::new(x, y).is_finite() {
            return Err(PlacementError::NonFinite { x, y });
        }
        self.food.push(FoodSource::new(x, y, category));
        Ok(())
    }

    /// The placed source, if any.
    pub fn source(&self) -> Option<SourcePoint> {
        self.source
    }

    /// The placed food sources in placement order.
    pub fn food(&self) -> &[FoodSource] {
        &self.food
    }

    /// Total number of placed elements (source included).
    pub fn len(&self) -> usize {
        self.food.len() + usize::from(self.source.is_some())
    }

    /// Whether nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the map satisfies the start precondition.
    pub fn is_runnable(&self) -> bool {
        self.source.is_some() && !self.food.is_empty()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.source = None;
        self.food.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_source_is_rejected() {
        let mut map = MapLayout::new();
        map.place_source(10.0, 10.0).unwrap();
        assert_eq!(
            map.place_source(20.0, 20.0),
            Err(PlacementError::SourceAlreadyPlaced)
        );
        assert_eq!(map.source(), Some(SourcePoint::new(10.0, 10.0)));
    }

    #[test]
    fn runnable_needs_source_and_food() {
        let mut map = MapLayout::new();
        assert!(!map.is_runnable());
        map.place_food(5.0, 5.0, "house").unwrap();
        assert!(!map.is_runnable());
        map.place_source(1.0, 1.0).unwrap();
        assert!(map.is_runnable());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn non_finite_placement_rejected() {
        let mut map = MapLayout::new();
        assert!(matches!(
            map.place_food(f32::NAN, 1.0, "park"),
            Err(PlacementError::NonFinite { .. })
        ));
        assert!(map.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut map = MapLayout::new();
        map.place_source(1.0, 1.0).unwrap();
        map.place_food(2.0, 2.0, "school").unwrap();
        map.clear();
        assert!(map.is_empty());
        assert!(map.place_source(3.0, 3.0).is_ok());
    }

    #[test]
    fn food_defaults() {
        let f = FoodSource::new(1.0, 2.0, FoodCategory::default());
        assert_eq!(f.category.as_str(), "food");
        assert_eq!(f.strength, DEFAULT_FOOD_STRENGTH);
    }

    #[test]
    fn layout_serializes_to_json() {
        let mut map = MapLayout::new();
        map.place_source(1.0, 2.0).unwrap();
        map.place_food(3.0, 4.0, "market").unwrap();
        let json = serde_json::to_string(&map).unwrap();
        let back: MapLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}

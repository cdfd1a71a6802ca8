// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pure geometric queries over the floor plan
//!
//! Everything here is a read-only computation on the apartment document:
//! areas, perimeters, the enclosing bounding box, wall-length totals, and
//! the pairwise adjacency/overlap predicates. Rooms without bounds are
//! treated as zero-sized rectangles; run validation first to reject them.

use crate::types::{Apartment, Bounds, Room, WallType};
use serde::Serialize;

/// Floor area of a single room (`width * height`)
pub fn room_area(room: &Room) -> f64 {
    let bounds = room.rect();
    bounds.width * bounds.height
}

/// Sum of all room areas; 0.0 for an empty plan
pub fn total_area(apartment: &Apartment) -> f64 {
    apartment.rooms.iter().map(room_area).sum()
}

/// Perimeter of a single room (`2 * (width + height)`)
pub fn room_perimeter(room: &Room) -> f64 {
    let bounds = room.rect();
    2.0 * (bounds.width + bounds.height)
}

/// Summed wall length per construction type
///
/// All three totals are always present; walls of type `none` are excluded.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct WallLengths {
    pub building: f64,
    pub exterior: f64,
    pub interior: f64,
}

impl WallLengths {
    /// Combined length over all three construction types
    pub fn total(&self) -> f64 {
        self.building + self.exterior + self.interior
    }
}

/// Aggregate wall lengths across the whole plan
///
/// A north/south wall contributes the room width, an east/west wall the room
/// height. Rooms without wall descriptors contribute nothing.
pub fn wall_length_by_type(apartment: &Apartment) -> WallLengths {
    let mut lengths = WallLengths::default();

    for room in &apartment.rooms {
        let bounds = room.rect();
        for wall in &room.walls {
            let length = if wall.side.is_horizontal() {
                bounds.width
            } else {
                bounds.height
            };
            match wall.wall_type {
                WallType::Building => lengths.building += length,
                WallType::Exterior => lengths.exterior += length,
                WallType::Interior => lengths.interior += length,
                WallType::None => {}
            }
        }
    }

    lengths
}

/// Axis-aligned bounding box enclosing every room of the plan
///
/// Seeded at +/- infinity, so a box built from an empty plan is invalid and
/// `width()`/`height()` are meaningless. Callers must check `is_valid()`
/// before using the extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl PlanBounds {
    /// Create new bounds initialized to the invalid empty state
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Check if at least one rectangle has been included
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Expand the box to include a rectangle
    #[inline]
    pub fn expand(&mut self, bounds: &Bounds) {
        self.min_x = self.min_x.min(bounds.x);
        self.min_y = self.min_y.min(bounds.y);
        self.max_x = self.max_x.max(bounds.right());
        self.max_y = self.max_y.max(bounds.bottom());
    }

    /// Horizontal extent (`max_x - min_x`)
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent (`max_y - min_y`)
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center of the box, or the origin when invalid
    pub fn centroid(&self) -> (f64, f64) {
        if !self.is_valid() {
            return (0.0, 0.0);
        }
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

impl Default for PlanBounds {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounding box of the whole plan; invalid when the room list is empty
pub fn plan_bounds(apartment: &Apartment) -> PlanBounds {
    let mut bounds = PlanBounds::new();
    for room in &apartment.rooms {
        bounds.expand(&room.rect());
    }
    bounds
}

/// True if the two rooms share a positive-length edge segment, with edge
/// coincidence relaxed to `|delta| <= tolerance`
///
/// `tolerance` 0.0 degrades to exact coincidence on the stored values.
pub fn are_adjacent_within(a: &Room, b: &Room, tolerance: f64) -> bool {
    let ra = a.rect();
    let rb = b.rect();

    let touches_on_x =
        (ra.right() - rb.x).abs() <= tolerance || (rb.right() - ra.x).abs() <= tolerance;
    let touches_on_y =
        (ra.bottom() - rb.y).abs() <= tolerance || (rb.bottom() - ra.y).abs() <= tolerance;

    // Shared segment must have positive length; touching corners don't count.
    let vertical_overlap = ra.bottom().min(rb.bottom()) - ra.y.max(rb.y);
    let horizontal_overlap = ra.right().min(rb.right()) - ra.x.max(rb.x);

    (touches_on_x && vertical_overlap > 0.0) || (touches_on_y && horizontal_overlap > 0.0)
}

/// True if the two rooms share a positive-length edge segment
///
/// Edge coincidence is exact equality on the stored coordinates. Plans with
/// computed coordinates may need [`are_adjacent_within`] instead.
pub fn are_adjacent(a: &Room, b: &Room) -> bool {
    are_adjacent_within(a, b, 0.0)
}

/// True if the two rooms intersect with positive area
///
/// Rooms that only touch along an edge or at a corner do not overlap.
pub fn rooms_overlap(a: &Room, b: &Room) -> bool {
    let ra = a.rect();
    let rb = b.rect();

    !(ra.right() <= rb.x || rb.right() <= ra.x || ra.bottom() <= rb.y || rb.bottom() <= ra.y)
}

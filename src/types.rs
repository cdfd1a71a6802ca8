// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for the floor plan data model

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: top-left position plus extent, in plan units
///
/// The origin is top-left by convention, so `y` grows downwards. There is no
/// sign constraint on `x`/`y`; a valid room requires `width > 0` and
/// `height > 0`, enforced by validation rather than by this type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge coordinate (`x + width`)
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge coordinate (`y + height`)
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Which edge of a room a wall sits on
///
/// North/south walls run along the room width, east/west along the height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    North,
    South,
    East,
    West,
}

impl WallSide {
    /// Parse a lowercase side name as found in host documents
    pub fn parse(value: &str) -> Option<WallSide> {
        match value {
            "north" => Some(WallSide::North),
            "south" => Some(WallSide::South),
            "east" => Some(WallSide::East),
            "west" => Some(WallSide::West),
            _ => None,
        }
    }

    /// True for walls that run along the room width (north/south)
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, WallSide::North | WallSide::South)
    }
}

/// Wall construction classification
///
/// `None` models an edge without a wall; it contributes zero length and is
/// excluded from aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WallType {
    Building,
    Exterior,
    Interior,
    None,
}

/// One wall descriptor of a room; at most one per side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wall {
    pub side: WallSide,
    #[serde(rename = "type")]
    pub wall_type: WallType,
}

impl Wall {
    pub fn new(side: WallSide, wall_type: WallType) -> Self {
        Self { side, wall_type }
    }
}

/// A door or window cut into a wall
///
/// `position` is the offset along the wall's length at which the opening
/// begins: along the room width for north/south walls, along the room height
/// for east/west. `wall` stays a free-form string so that invalid side names
/// in host documents survive deserialization and can be reported by
/// validation instead of failing the load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opening {
    pub wall: String,
    #[serde(rename = "type")]
    pub opening_type: String,
    pub position: f64,
    pub width: f64,
}

/// A rectangular room, addressed by `id` within its apartment
///
/// `id` uniqueness and presence of `bounds` are validation concerns, not
/// structural ones: a missing `id` deserializes to the empty string and a
/// missing `bounds` to `None`. Geometry and mutation treat an absent
/// `bounds` as a zero-sized rectangle at the origin, so they stay total on
/// documents that have not passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub openings: Vec<Opening>,
}

impl Room {
    pub fn new(id: String, name: String, room_type: String, bounds: Bounds) -> Self {
        Self {
            id,
            name,
            room_type,
            bounds: Some(bounds),
            walls: Vec::new(),
            openings: Vec::new(),
        }
    }

    /// Bounds of this room, or a zero-sized rectangle at the origin when absent
    #[inline]
    pub fn rect(&self) -> Bounds {
        self.bounds.unwrap_or_default()
    }
}

/// Apartment metadata; unknown extra fields are ignored on deserialization
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Meta {
    pub name: String,
}

/// The root document: metadata plus an ordered collection of rooms
///
/// Constructed externally (typically deserialized by the host) and handed to
/// every operation by reference: shared for reads, exclusive for mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Apartment {
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

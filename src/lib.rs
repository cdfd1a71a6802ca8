// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # FloorPlan-Lite
//!
//! Geometric analysis and validation engine for rectangular floor plans:
//! a set of axis-aligned rooms with walls and wall openings, analyzed
//! in place with no I/O.
//!
//! ## Overview
//!
//! - **Geometry**: areas, perimeters, plan bounding box, wall-length
//!   totals, adjacency and overlap predicates
//! - **Query**: lookup by id or type, adjacency neighborhood of a room
//! - **Validation**: accumulated structural errors and warnings
//! - **Mutation**: in-place move/resize through an exclusive borrow
//! - **Report**: Markdown summary and flattened export records
//!
//! The apartment document is owned by the host (typically deserialized
//! with serde); every operation borrows it, shared for reads and exclusive
//! for mutation. Unknown ids are silent no-ops, and validation reports
//! every finding instead of failing fast.
//!
//! ## Quick Start
//!
//! ```
//! use floorplan_lite::{generate_report, total_area, validate};
//! use floorplan_lite::{Apartment, Bounds, Meta, Room};
//!
//! let apartment = Apartment {
//!     meta: Some(Meta {
//!         name: "Studio 12".into(),
//!     }),
//!     rooms: vec![Room::new(
//!         "living".into(),
//!         "Living Room".into(),
//!         "living".into(),
//!         Bounds::new(0.0, 0.0, 5.0, 4.0),
//!     )],
//! };
//!
//! assert!(validate(&apartment).is_valid());
//! assert_eq!(total_area(&apartment), 20.0);
//! assert!(generate_report(&apartment).starts_with("# Studio 12"));
//! ```

pub mod geometry;
pub mod mutation;
pub mod query;
pub mod report;
pub mod types;
pub mod validation;

pub use geometry::{
    are_adjacent, are_adjacent_within, plan_bounds, room_area, room_perimeter, rooms_overlap,
    total_area, wall_length_by_type, PlanBounds, WallLengths,
};
pub use mutation::{move_room, resize_room};
pub use query::{adjacent_rooms, find_room, find_room_mut, rooms_by_type};
pub use report::{generate_report, to_simple_format, SimpleRoom};
pub use types::{Apartment, Bounds, Meta, Opening, Room, Wall, WallSide, WallType};
pub use validation::{validate, ValidationIssue, ValidationReport};

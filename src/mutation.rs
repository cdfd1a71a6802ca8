// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-place repositioning and resizing of rooms
//!
//! Mutations write directly into the caller-owned document through an
//! exclusive borrow and return that borrow for chaining. An unknown id is a
//! silent no-op. Nothing here validates the new geometry; a subsequent
//! validation pass reports degenerate results.

use crate::query::find_room_mut;
use crate::types::{Apartment, Bounds};

/// Translate a room by `(dx, dy)`; no-op when the id is unknown
pub fn move_room<'a>(apartment: &'a mut Apartment, id: &str, dx: f64, dy: f64) -> &'a mut Apartment {
    match find_room_mut(apartment, id) {
        Some(room) => {
            let bounds = room.bounds.get_or_insert_with(Bounds::default);
            bounds.x += dx;
            bounds.y += dy;
        }
        None => tracing::debug!(id, dx, dy, "unknown room id, move ignored"),
    }
    apartment
}

/// Overwrite a room's width/height verbatim; no-op when the id is unknown
///
/// The new extents are not checked for positivity.
pub fn resize_room<'a>(
    apartment: &'a mut Apartment,
    id: &str,
    new_width: f64,
    new_height: f64,
) -> &'a mut Apartment {
    match find_room_mut(apartment, id) {
        Some(room) => {
            let bounds = room.bounds.get_or_insert_with(Bounds::default);
            bounds.width = new_width;
            bounds.height = new_height;
        }
        None => tracing::debug!(id, new_width, new_height, "unknown room id, resize ignored"),
    }
    apartment
}

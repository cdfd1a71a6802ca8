// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lookup and filtering over the room collection
//!
//! Absence is a normal outcome here: an unknown id yields `None` or an empty
//! list, never an error. Lookups are linear scans over the apartment order.

use crate::geometry::are_adjacent;
use crate::types::{Apartment, Room};

/// Find a room by id; first match wins
pub fn find_room<'a>(apartment: &'a Apartment, id: &str) -> Option<&'a Room> {
    apartment.rooms.iter().find(|room| room.id == id)
}

/// Exclusive-borrow twin of [`find_room`], used by the mutation facet
pub fn find_room_mut<'a>(apartment: &'a mut Apartment, id: &str) -> Option<&'a mut Room> {
    apartment.rooms.iter_mut().find(|room| room.id == id)
}

/// All rooms of the given type, in apartment order
pub fn rooms_by_type<'a>(apartment: &'a Apartment, room_type: &str) -> Vec<&'a Room> {
    apartment
        .rooms
        .iter()
        .filter(|room| room.room_type == room_type)
        .collect()
}

/// All rooms sharing a positive-length edge with the given room
///
/// Empty when the id is unknown.
pub fn adjacent_rooms<'a>(apartment: &'a Apartment, id: &str) -> Vec<&'a Room> {
    let Some(target) = find_room(apartment, id) else {
        return Vec::new();
    };

    apartment
        .rooms
        .iter()
        .filter(|other| other.id != id && are_adjacent(target, other))
        .collect()
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural and semantic validation of the floor plan
//!
//! [`validate`] never panics or bails out on malformed input: every detected
//! problem is accumulated and reported. Errors mean the document cannot be
//! trusted by geometry that assumes well-formed rectangles; warnings flag
//! plausible-but-suspicious configurations the caller may accept.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::geometry::rooms_overlap;
use crate::types::{Apartment, WallSide};

/// A single validation diagnostic
///
/// The `Display` rendering is the stable diagnostic text hosts may show
/// verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("Missing meta section")]
    MissingMeta,

    #[error("No rooms defined")]
    NoRooms,

    /// One entry per duplicate occurrence: an id present three times is
    /// listed twice.
    #[error("Duplicate room ids: {0}")]
    DuplicateIds(String),

    #[error("Room at index {index} has no id")]
    MissingId { index: usize },

    #[error("Room '{id}' has no bounds")]
    MissingBounds { id: String },

    #[error("Room '{id}' has non-positive width {width}")]
    NonPositiveWidth { id: String, width: f64 },

    #[error("Room '{id}' has non-positive height {height}")]
    NonPositiveHeight { id: String, height: f64 },

    #[error("Room '{id}' has an opening on invalid wall '{wall}'")]
    InvalidOpeningWall { id: String, wall: String },

    #[error("Room '{id}' has an opening that extends beyond wall '{wall}'")]
    OpeningBeyondWall { id: String, wall: String },

    #[error("Rooms '{first}' and '{second}' overlap")]
    RoomsOverlap { first: String, second: String },
}

/// Accumulated outcome of a validation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True iff no errors were found; warnings never affect validity
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error diagnostics rendered to their display strings
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|issue| issue.to_string()).collect()
    }

    /// Warning diagnostics rendered to their display strings
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|issue| issue.to_string()).collect()
    }
}

/// Validate the whole document, accumulating every finding
pub fn validate(apartment: &Apartment) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if apartment.meta.is_none() {
        errors.push(ValidationIssue::MissingMeta);
    }

    if apartment.rooms.is_empty() {
        errors.push(ValidationIssue::NoRooms);
    }

    check_duplicate_ids(apartment, &mut errors);
    check_room_structure(apartment, &mut errors);
    check_openings(apartment, &mut errors, &mut warnings);
    check_overlaps(apartment, &mut warnings);

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "apartment validated"
    );

    ValidationReport { errors, warnings }
}

/// One error listing every duplicate occurrence, comma-joined
fn check_duplicate_ids(apartment: &Apartment, errors: &mut Vec<ValidationIssue>) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut duplicates: Vec<&str> = Vec::new();

    for room in &apartment.rooms {
        if !seen.insert(&room.id) {
            duplicates.push(&room.id);
        }
    }

    if !duplicates.is_empty() {
        errors.push(ValidationIssue::DuplicateIds(duplicates.join(", ")));
    }
}

fn check_room_structure(apartment: &Apartment, errors: &mut Vec<ValidationIssue>) {
    for (index, room) in apartment.rooms.iter().enumerate() {
        if room.id.is_empty() {
            errors.push(ValidationIssue::MissingId { index });
        }

        match &room.bounds {
            None => errors.push(ValidationIssue::MissingBounds {
                id: room.id.clone(),
            }),
            Some(bounds) => {
                if bounds.width <= 0.0 {
                    errors.push(ValidationIssue::NonPositiveWidth {
                        id: room.id.clone(),
                        width: bounds.width,
                    });
                }
                if bounds.height <= 0.0 {
                    errors.push(ValidationIssue::NonPositiveHeight {
                        id: room.id.clone(),
                        height: bounds.height,
                    });
                }
            }
        }
    }
}

fn check_openings(
    apartment: &Apartment,
    errors: &mut Vec<ValidationIssue>,
    warnings: &mut Vec<ValidationIssue>,
) {
    for room in &apartment.rooms {
        let bounds = room.rect();

        for opening in &room.openings {
            let side = WallSide::parse(&opening.wall);

            if side.is_none() {
                errors.push(ValidationIssue::InvalidOpeningWall {
                    id: room.id.clone(),
                    wall: opening.wall.clone(),
                });
            }

            // North/south openings run along the width; everything else,
            // invalid side names included, measures against the height.
            let extent = match side {
                Some(side) if side.is_horizontal() => bounds.width,
                _ => bounds.height,
            };

            if extent < opening.position + opening.width {
                warnings.push(ValidationIssue::OpeningBeyondWall {
                    id: room.id.clone(),
                    wall: opening.wall.clone(),
                });
            }
        }
    }
}

/// One warning per overlapping pair, lower apartment index first
fn check_overlaps(apartment: &Apartment, warnings: &mut Vec<ValidationIssue>) {
    for i in 0..apartment.rooms.len() {
        for j in (i + 1)..apartment.rooms.len() {
            let first = &apartment.rooms[i];
            let second = &apartment.rooms[j];

            if rooms_overlap(first, second) {
                warnings.push(ValidationIssue::RoomsOverlap {
                    first: first.id.clone(),
                    second: second.id.clone(),
                });
            }
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rendered outputs: Markdown summary and flattened export records
//!
//! Both outputs are derived entirely from the geometry facet; nothing here
//! computes independently.

use serde::Serialize;

use crate::geometry::{plan_bounds, room_area, total_area, wall_length_by_type};
use crate::types::{Apartment, Opening, Wall};

/// Render a human-readable Markdown summary of the plan
///
/// Sections: title from `meta.name`, overall dimensions, one subsection per
/// room, and the wall-length summary. Overall dimensions are 0.00 for an
/// empty plan.
pub fn generate_report(apartment: &Apartment) -> String {
    let title = apartment
        .meta
        .as_ref()
        .map(|meta| meta.name.as_str())
        .unwrap_or("Unnamed apartment");

    let bounds = plan_bounds(apartment);
    let (plan_width, plan_height) = if bounds.is_valid() {
        (bounds.width(), bounds.height())
    } else {
        (0.0, 0.0)
    };

    let mut report = String::new();
    report.push_str(&format!("# {}\n\n", title));

    report.push_str("## Overall dimensions\n\n");
    report.push_str(&format!("- Width: {:.2}\n", plan_width));
    report.push_str(&format!("- Height: {:.2}\n", plan_height));
    report.push_str(&format!("- Total area: {:.2}\n\n", total_area(apartment)));

    report.push_str("## Rooms\n\n");
    for room in &apartment.rooms {
        let rect = room.rect();

        report.push_str(&format!("### {}\n\n", room.name));
        report.push_str(&format!("- Type: {}\n", room.room_type));
        report.push_str(&format!("- Size: {} x {}\n", rect.width, rect.height));
        report.push_str(&format!("- Area: {:.2}\n", room_area(room)));
        report.push_str(&format!("- Position: ({}, {})\n", rect.x, rect.y));

        if !room.openings.is_empty() {
            let kinds: Vec<&str> = room
                .openings
                .iter()
                .map(|opening| opening.opening_type.as_str())
                .collect();
            report.push_str(&format!("- Openings: {}\n", kinds.join(", ")));
        }

        report.push('\n');
    }

    let lengths = wall_length_by_type(apartment);
    report.push_str("## Walls\n\n");
    report.push_str(&format!("- Building: {:.2}\n", lengths.building));
    report.push_str(&format!("- Exterior: {:.2}\n", lengths.exterior));
    report.push_str(&format!("- Interior: {:.2}\n", lengths.interior));

    report
}

/// One flattened room record for the export pipeline
///
/// `walls` and `openings` are borrowed straight from the document, so the
/// record set is a zero-copy view that must not outlive the apartment.
#[derive(Debug, Clone, Serialize)]
pub struct SimpleRoom<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub room_type: &'a str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area: f64,
    pub walls: &'a [Wall],
    pub openings: &'a [Opening],
}

/// Flatten the plan into one record per room, in apartment order
pub fn to_simple_format(apartment: &Apartment) -> Vec<SimpleRoom<'_>> {
    apartment
        .rooms
        .iter()
        .map(|room| {
            let rect = room.rect();
            SimpleRoom {
                name: &room.name,
                room_type: &room.room_type,
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                area: room_area(room),
                walls: &room.walls,
                openings: &room.openings,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bounds, Meta, Room, Wall, WallSide, WallType};
    use approx::assert_relative_eq;

    fn sample() -> Apartment {
        let mut living = Room::new(
            "living".into(),
            "Living Room".into(),
            "living".into(),
            Bounds::new(0.0, 0.0, 5.0, 4.0),
        );
        living.walls = vec![
            Wall::new(WallSide::North, WallType::Exterior),
            Wall::new(WallSide::West, WallType::Building),
        ];
        living.openings = vec![
            Opening {
                wall: "north".into(),
                opening_type: "window".into(),
                position: 1.0,
                width: 1.5,
            },
            Opening {
                wall: "east".into(),
                opening_type: "door".into(),
                position: 1.0,
                width: 0.9,
            },
        ];

        let kitchen = Room::new(
            "kitchen".into(),
            "Kitchen".into(),
            "kitchen".into(),
            Bounds::new(5.0, 0.0, 3.0, 4.0),
        );

        Apartment {
            meta: Some(Meta {
                name: "Flat 7".into(),
            }),
            rooms: vec![living, kitchen],
        }
    }

    #[test]
    fn test_report_sections() {
        let report = generate_report(&sample());

        assert!(report.starts_with("# Flat 7\n"));
        assert!(report.contains("## Overall dimensions"));
        assert!(report.contains("- Width: 8.00"));
        assert!(report.contains("- Height: 4.00"));
        assert!(report.contains("- Total area: 32.00"));
        assert!(report.contains("### Living Room"));
        assert!(report.contains("- Size: 5 x 4"));
        assert!(report.contains("- Area: 20.00"));
        assert!(report.contains("- Position: (0, 0)"));
        assert!(report.contains("- Openings: window, door"));
        assert!(report.contains("## Walls"));
        assert!(report.contains("- Building: 4.00"));
        assert!(report.contains("- Exterior: 5.00"));
        assert!(report.contains("- Interior: 0.00"));
    }

    #[test]
    fn test_report_omits_openings_line_when_empty() {
        let report = generate_report(&sample());
        let kitchen_section = report.split("### Kitchen").nth(1).unwrap();
        assert!(!kitchen_section.contains("- Openings:"));
    }

    #[test]
    fn test_report_missing_meta_falls_back() {
        let mut plan = sample();
        plan.meta = None;
        assert!(generate_report(&plan).starts_with("# Unnamed apartment\n"));
    }

    #[test]
    fn test_report_empty_plan_prints_zero_dimensions() {
        let plan = Apartment {
            meta: Some(Meta {
                name: "Empty".into(),
            }),
            rooms: Vec::new(),
        };

        let report = generate_report(&plan);
        assert!(report.contains("- Width: 0.00"));
        assert!(report.contains("- Height: 0.00"));
        assert!(report.contains("- Total area: 0.00"));
    }

    #[test]
    fn test_simple_format_one_record_per_room() {
        let plan = sample();
        let records = to_simple_format(&plan);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Living Room");
        assert_eq!(records[1].name, "Kitchen");
        for (record, room) in records.iter().zip(&plan.rooms) {
            assert_relative_eq!(record.area, room_area(room));
        }
    }

    #[test]
    fn test_simple_format_passes_walls_through() {
        let plan = sample();
        let records = to_simple_format(&plan);

        assert_eq!(records[0].walls.len(), 2);
        assert_eq!(records[0].openings.len(), 2);
        assert!(std::ptr::eq(
            records[0].walls.as_ptr(),
            plan.rooms[0].walls.as_ptr()
        ));
    }

    #[test]
    fn test_simple_format_serializes_flat() {
        let plan = sample();
        let records = to_simple_format(&plan);
        let json = serde_json::to_value(&records[0]).unwrap();

        assert_eq!(json["type"], "living");
        assert_eq!(json["width"], 5.0);
        assert_eq!(json["area"], 20.0);
        assert_eq!(json["walls"][0]["side"], "north");
    }
}

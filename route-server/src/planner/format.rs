//! Itinerary rendering.

use super::segment::{Segment, SegmentLabel};

/// Render segments as a human-readable itinerary.
///
/// Stations print one per line behind an arrow; a header line announces
/// each change of route, and blocks after the first are separated by a
/// blank line. A label-less segment (the trivial single-station
/// itinerary) prints its stations without a header.
pub fn format_itinerary(segments: &[Segment]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current: Option<&SegmentLabel> = None;

    for segment in segments {
        if let Some(label) = segment.label.as_ref() {
            if current != Some(label) {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(format!("--- Route {label} ---"));
                current = Some(label);
            }
        }
        for station in &segment.stations {
            lines.push(format!("→ {station}"));
        }
    }

    lines.join("\n")
}

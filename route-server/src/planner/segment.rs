//! Route segmentation for rendering.
//!
//! Collapses a hop-by-hop path into contiguous runs of stations sharing
//! one service, ready for itinerary rendering. Segments exist only for
//! rendering; they are never persisted.

use std::fmt;

use crate::domain::{Path, RouteId, RouteLabel, StationName};

/// The cleaned label a rendered segment is grouped under: the bare route
/// id, or the Underground transfer marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentLabel {
    Service(RouteId),
    Underground,
}

impl SegmentLabel {
    fn from_label(label: &RouteLabel) -> Self {
        match label {
            RouteLabel::Service { id, .. } => SegmentLabel::Service(id.clone()),
            RouteLabel::Underground => SegmentLabel::Underground,
        }
    }
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentLabel::Service(id) => write!(f, "{}", id),
            SegmentLabel::Underground => f.write_str("Underground Route"),
        }
    }
}

/// A maximal run of consecutive path stops sharing one cleaned label.
///
/// The label is `None` only for the trivial single-station path, which
/// has no hop to take a label from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub label: Option<SegmentLabel>,
    pub stations: Vec<StationName>,
}

/// Split a path into contiguous segments by cleaned route label.
///
/// The origin is attributed to the route it is about to travel on rather
/// than left unlabeled. When an Underground segment is followed by
/// another segment, the interchange station (the Underground segment's
/// last stop) is shown again at the start of the following segment, so
/// the rendered itinerary presents it as part of both legs. Only the
/// first Underground segment is stitched this way.
pub fn segment_path(path: &Path) -> Vec<Segment> {
    let stops = path.stops();
    if stops.is_empty() {
        return Vec::new();
    }

    // Clean each stop's label down to its short form; the origin takes
    // the label of the hop leaving it.
    let mut cleaned: Vec<(StationName, Option<SegmentLabel>)> = stops
        .iter()
        .map(|stop| {
            (
                stop.station.clone(),
                stop.label.as_ref().map(SegmentLabel::from_label),
            )
        })
        .collect();
    if cleaned.len() > 1 {
        cleaned[0].1 = cleaned[1].1.clone();
    }

    // Group consecutive stops sharing a label.
    let mut segments: Vec<Segment> = Vec::new();
    for (station, label) in cleaned {
        match segments.last_mut() {
            Some(segment) if segment.label == label => segment.stations.push(station),
            _ => segments.push(Segment {
                label,
                stations: vec![station],
            }),
        }
    }

    stitch_underground(&mut segments);
    segments
}

/// Duplicate the interchange station of the first Underground segment
/// onto the front of the segment that follows it. A trailing Underground
/// segment has no onward leg and is left alone.
fn stitch_underground(segments: &mut [Segment]) {
    for i in 0..segments.len() {
        if segments[i].label != Some(SegmentLabel::Underground) {
            continue;
        }
        if i + 1 >= segments.len() {
            break;
        }
        let Some(interchange) = segments[i].stations.last().cloned() else {
            break;
        };
        segments[i + 1].stations.insert(0, interchange);
        break;
    }
}

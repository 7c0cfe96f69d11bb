use std::f64::consts::PI;

/// Radius of the member circle.
const RADIUS: f64 = 3500.0;
/// Global offset applied to both axes.
const DISTANCE: f64 = 1500.0;
const MARKER_R: f64 = 300.0;
const LABEL_R: f64 = 200.0;
/// Label anchors sit down-right of the marker.
const LABEL_SHIFT: f64 = 300.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Marker and label anchor for one member.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NodePlacement {
    pub circle: LayoutPoint,
    pub label: LayoutPoint,
}

/// Place `n` members evenly on a circle, in input order.
///
/// Screen Y grows downward, so the angle runs clockwise starting from the
/// rightmost point. Pure and idempotent: the poller recomputes this on
/// every tick and must get identical coordinates for identical input.
pub fn circular_layout(n: usize) -> Vec<NodePlacement> {
    if n == 0 {
        return vec![];
    }
    let step = 2.0 * PI / n as f64;
    (0..n)
        .map(|i| {
            let rad = step * i as f64;
            let x = (1.0 + rad.cos()) * RADIUS + DISTANCE;
            let y = (1.0 - rad.sin()) * RADIUS + DISTANCE;
            NodePlacement {
                circle: LayoutPoint {
                    x,
                    y,
                    r: MARKER_R,
                },
                label: LayoutPoint {
                    x: x + LABEL_SHIFT,
                    y: y + LABEL_SHIFT,
                    r: LABEL_R,
                },
            }
        })
        .collect()
}

//! Fit-view box around arranged nodes.

use crate::measure::TextMetrics;
use crate::model::Node;

use super::types::FitView;

/// Bounding box of `nodes` (position is the top-left corner, size from
/// `metrics`), grown by `padding` times the extent, split evenly between
/// both sides. Returns None for an empty slice.
pub fn fit_view(nodes: &[Node], metrics: &TextMetrics, padding: f64) -> Option<FitView> {
    let mut iter = nodes.iter();
    let first = iter.next()?;
    let (w, h) = metrics.node_size(first);
    let mut min_x = first.position.x;
    let mut min_y = first.position.y;
    let mut max_x = min_x + w;
    let mut max_y = min_y + h;

    for node in iter {
        let (w, h) = metrics.node_size(node);
        min_x = min_x.min(node.position.x);
        min_y = min_y.min(node.position.y);
        max_x = max_x.max(node.position.x + w);
        max_y = max_y.max(node.position.y + h);
    }

    let padding = padding.max(0.0);
    let width = max_x - min_x;
    let height = max_y - min_y;
    let pad_x = width * padding / 2.0;
    let pad_y = height * padding / 2.0;

    Some(FitView {
        x: min_x - pad_x,
        y: min_y - pad_y,
        width: width + pad_x * 2.0,
        height: height + pad_y * 2.0,
    })
}

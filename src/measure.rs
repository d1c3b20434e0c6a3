use crate::model::Node;
use unicode_width::UnicodeWidthStr;

pub struct TextMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub min_node_width: f64,
    pub min_node_height: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 20.0,
            padding_x: 16.0,
            padding_y: 12.0,
            min_node_width: 150.0,
            min_node_height: 80.0,
        }
    }
}

impl TextMetrics {
    pub fn text_width(&self, text: &str) -> f64 {
        let width = UnicodeWidthStr::width(text);
        width as f64 * self.char_width
    }

    /// Box size of a node: explicit style size wins, otherwise an estimate
    /// from the label.
    pub fn node_size(&self, node: &Node) -> (f64, f64) {
        let style = node.style.as_ref();
        let width = style.and_then(|s| s.width).unwrap_or_else(|| {
            (self.text_width(node.label()) + self.padding_x * 2.0).max(self.min_node_width)
        });
        let height = style.and_then(|s| s.height).unwrap_or_else(|| {
            (self.line_height + self.padding_y * 2.0).max(self.min_node_height)
        });
        (width, height)
    }
}

//! Layer-based z-ordering for SVG output.
//!
//! A sequence diagram stacks several kinds of marks on top of each other:
//! lifelines run under everything, actor boxes sit on them, activation boxes
//! overlay lifelines, frames overlay activations, and text always reads on
//! top. Rather than making every caller interleave its `<g>` elements in the
//! right order, drawers tag each node with a [`RenderLayer`] and a
//! [`LayeredOutput`] emits them bottom-to-top.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// The rendering layers, declared bottom-to-top.
///
/// The derived `Ord` follows declaration order, which is the paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Vertical actor lifelines - render first, under everything
    Lifeline,
    /// Actor boxes and their avatar icons
    Content,
    /// Activation boxes overlaying lifelines
    Activation,
    /// Loop/alt frames: translucent body, dividers, pennant labels
    Frame,
    /// Descriptions and section titles - always on top
    Text,
}

impl RenderLayer {
    /// Returns the layer name used in the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lifeline => "lifeline",
            Self::Content => "content",
            Self::Activation => "activation",
            Self::Frame => "frame",
            Self::Text => "text",
        }
    }
}

/// SVG nodes collected by rendering layer.
///
/// Nodes keep their insertion order within a layer; [`render`](Self::render)
/// sorts stably by layer and wraps each non-empty layer in a `<g>` carrying a
/// `data-layer` attribute.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the given layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends every node from `other`, keeping per-layer ordering.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if no nodes have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Returns one `<g data-layer="…">` per non-empty layer, bottom layer
    /// first. Consumes `self` because SVG nodes are not cloneable.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort: nodes within a layer keep their insertion order.
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);
                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }
            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);
        result
    }
}

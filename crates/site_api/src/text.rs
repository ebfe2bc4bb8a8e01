use shared::{
    blocks::{Block, BlockStyle, Decorator, TextBlock},
    domain::ImageRef,
};

use crate::views::{BodyNode, SpanView};

pub fn render_body<F>(blocks: &[Block], image_src: F) -> Vec<BodyNode>
where
    F: Fn(&ImageRef) -> Option<String>,
{
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Block(text) => Some(text_node(text)),
            Block::Image(image) => image_src(image).map(|src| BodyNode::Image {
                src,
                alt: image.alt.clone().unwrap_or_default(),
                caption: image.caption.clone().filter(|c| !c.is_empty()),
            }),
            Block::Unsupported => None,
        })
        .collect()
}

fn text_node(block: &TextBlock) -> BodyNode {
    let tag = match block.style {
        BlockStyle::H2 => "h2",
        BlockStyle::H3 => "h3",
        BlockStyle::Blockquote => "blockquote",
        BlockStyle::Normal | BlockStyle::Other => "p",
    };
    let spans = block
        .children
        .iter()
        .map(|span| {
            let mut view = SpanView {
                text: span.text.clone(),
                href: block.link_for(span).map(str::to_string),
                ..SpanView::default()
            };
            for mark in &span.marks {
                match Decorator::parse(mark) {
                    Some(Decorator::Strong) => view.strong = true,
                    Some(Decorator::Em) => view.em = true,
                    Some(Decorator::Code) => view.code = true,
                    None => {}
                }
            }
            view
        })
        .collect();
    BodyNode::Text { tag, spans }
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;

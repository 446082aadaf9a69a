//! Markdown renderer
//!
//! Walks the tree depth first and emits a flat list of lines. Structure is rebuilt purely
//! from prefixes: every nesting level pushes a [Frame] around the call that renders it and
//! pops it afterwards.
//!
//!     Paragraph      lines as written, then a blank separator
//!     Verbatim       every line re-indented by one indent unit, blanks kept
//!     BulletList     each item block under a `+   ` marker frame
//!     DefinitionList `**term** [*description*]`, a blank, then the body, under a `*   ` frame

use super::frames::{Frame, FrameStack};
use super::RenderOptions;
use crate::matdoc::ast::{
    Block, BlockChild, BulletList, DefinitionItem, DefinitionList, Paragraph, Verbatim,
    VerbatimLine,
};

/// Renders trees with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The two heading lines followed by the rendered body.
    pub fn render(&self, tree: &Block, heading: &str, subheading: &str) -> Vec<String> {
        let mut lines = vec![
            format!("{}{}", self.options.heading_prefix, heading),
            format!("{}{}", self.options.subheading_prefix, subheading),
        ];
        lines.extend(self.render_body(tree));
        lines
    }

    /// The rendered body alone.
    pub fn render_body(&self, tree: &Block) -> Vec<String> {
        let mut state = RenderState {
            options: &self.options,
            frames: FrameStack::new(),
            lines: Vec::new(),
        };
        state.block(tree);
        state.lines
    }
}

struct RenderState<'a> {
    options: &'a RenderOptions,
    frames: FrameStack,
    lines: Vec<String>,
}

impl RenderState<'_> {
    /// Run `f` with `frame` pushed, popping it afterwards.
    fn within<F>(&mut self, frame: Frame, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.frames.push(frame);
        f(self);
        self.frames.pop();
    }

    fn emit(&mut self, text: &str) {
        let mut line = self.frames.line_prefix();
        line.push_str(text);
        self.lines.push(line);
    }

    /// A separator line: the active prefix without its trailing whitespace.
    fn emit_blank(&mut self) {
        let prefix = self.frames.line_prefix();
        self.lines.push(prefix.trim_end().to_string());
    }

    fn block(&mut self, block: &Block) {
        for child in &block.children {
            match child {
                BlockChild::Blank => {}
                BlockChild::Paragraph(paragraph) => self.paragraph(paragraph),
                BlockChild::Verbatim(verbatim) => self.verbatim(verbatim),
                BlockChild::BulletList(list) => self.bullet_list(list),
                BlockChild::DefinitionList(list) => self.definition_list(list),
            }
            self.frames.clear_pending();
        }
    }

    fn paragraph(&mut self, paragraph: &Paragraph) {
        for line in &paragraph.lines {
            self.emit(&line.text);
        }
        self.emit_blank();
    }

    fn verbatim(&mut self, verbatim: &Verbatim) {
        let frame = Frame::indent(self.options.indent.as_str());
        self.within(frame, |state| {
            for line in &verbatim.lines {
                match line {
                    VerbatimLine::Line(line) => state.emit(&line.text),
                    VerbatimLine::Blank => state.emit_blank(),
                }
            }
        });
    }

    fn bullet_list(&mut self, list: &BulletList) {
        for item in &list.items {
            let frame = Frame::marked(
                self.options.indent.as_str(),
                self.options.bullet_marker.as_str(),
            );
            self.within(frame, |state| state.block(item));
        }
    }

    fn definition_list(&mut self, list: &DefinitionList) {
        for item in &list.items {
            let frame = Frame::marked(
                self.options.indent.as_str(),
                self.options.definition_marker.as_str(),
            );
            self.within(frame, |state| state.definition_item(item));
        }
    }

    fn definition_item(&mut self, item: &DefinitionItem) {
        self.emit(&format!("**{}** [*{}*]", item.term(), item.description()));
        self.emit_blank();
        if let Some(body) = &item.body {
            self.block(body);
        }
    }
}

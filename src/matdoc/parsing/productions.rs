//! Grammar productions
//!
//!     Recursive descent over terminals, with every production parameterized by the baseline
//!     indentation it parses at:
//!
//!         Block(i)          -> (Blank | Paragraph(i) | Verbatim(i) | BulletList(i) | DefinitionList(i))*
//!         Paragraph(i)      -> Plain(i)+
//!         Verbatim(i)       -> (Blank | Line(j))+             j > i
//!         BulletList(i)     -> Block(k)+                      k = inner indent of each Bullet(i)
//!         DefinitionList(i) -> (Definition(i) Block(j)?)+     j > i
//!
//!     A bullet item re-enters the block grammar: its bullet line is replaced in the lookahead
//!     by a new plain line holding the inner text at the inner indent, and a regular block is
//!     parsed from there. This is how item bodies get paragraphs, verbatim blocks and nested
//!     lists for free.
//!
//!     Choosing a production needs one terminal of lookahead and there is no backtracking.

use super::context::ParseContext;
use super::error::ParseError;
use crate::matdoc::ast::{
    Block, BlockChild, BulletList, DefinitionItem, DefinitionList, NodeKind, Paragraph, Verbatim,
    VerbatimLine,
};
use crate::matdoc::token::Terminal;
use log::trace;

/// What the block dispatcher does with the lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Production {
    Paragraph,
    Verbatim,
    BulletList,
    DefinitionList,
    Blank,
}

/// Dispatch priority at a baseline: plain → verbatim → bullet → definition → blank.
fn select_production(lookahead: &Terminal, baseline: usize) -> Option<Production> {
    if lookahead.is_plain_at(baseline) {
        Some(Production::Paragraph)
    } else if lookahead.is_indented_past(baseline) {
        Some(Production::Verbatim)
    } else if lookahead.is_bullet_at(baseline) {
        Some(Production::BulletList)
    } else if lookahead.is_definition_at(baseline) {
        Some(Production::DefinitionList)
    } else if lookahead.is_blank() {
        Some(Production::Blank)
    } else {
        None
    }
}

/// Parse a whole document: skip leading blanks, parse the root block, and require that
/// nothing is left over.
pub fn parse_document<S: AsRef<str>>(ctx: &mut ParseContext<'_, S>) -> Result<Block, ParseError> {
    ctx.skip_blanks();
    let root = parse_block(ctx, None)?;
    if let Some(indent) = ctx.lookahead().indent() {
        return Err(ParseError::UnexpectedDedent {
            line: ctx.line(),
            indent,
            baseline: root.indent,
        });
    }
    Ok(root)
}

/// Parse sibling elements until the lookahead falls below the baseline or input ends.
///
/// With `indent == None` the baseline is fixed by the first line seen.
pub fn parse_block<S: AsRef<str>>(
    ctx: &mut ParseContext<'_, S>,
    indent: Option<usize>,
) -> Result<Block, ParseError> {
    let mut baseline = indent;
    let mut children = Vec::new();

    loop {
        let Some(base) = baseline.or_else(|| ctx.lookahead().indent()) else {
            // no baseline yet: only blanks or the end of input so far
            if ctx.lookahead().is_blank() {
                ctx.shift();
                children.push(BlockChild::Blank);
                continue;
            }
            break;
        };
        let Some(production) = select_production(ctx.lookahead(), base) else {
            break;
        };
        let child = match production {
            Production::Paragraph => BlockChild::Paragraph(parse_paragraph(ctx, base)?),
            Production::Verbatim => BlockChild::Verbatim(parse_verbatim(ctx, base)?),
            Production::BulletList => BlockChild::BulletList(parse_bullet_list(ctx, base)?),
            Production::DefinitionList => {
                BlockChild::DefinitionList(parse_definition_list(ctx, base)?)
            }
            Production::Blank => {
                ctx.shift();
                BlockChild::Blank
            }
        };
        baseline.get_or_insert(base);
        children.push(child);
    }

    let indent = baseline.unwrap_or(0);
    trace!("reduce Block({}) with {} children", indent, children.len());
    Ok(Block::new(indent, children))
}

/// Consecutive plain lines at exactly `indent`.
pub fn parse_paragraph<S: AsRef<str>>(
    ctx: &mut ParseContext<'_, S>,
    indent: usize,
) -> Result<Paragraph, ParseError> {
    let mut lines = Vec::new();
    while ctx.lookahead().is_plain_at(indent) {
        if let Terminal::Plain(line) = ctx.shift() {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        return Err(ParseError::EmptyNode {
            kind: NodeKind::Paragraph,
            indent,
            line: ctx.line(),
        });
    }
    trace!("reduce Paragraph({}) with {} lines", indent, lines.len());
    Ok(Paragraph::new(indent, lines))
}

/// Blank lines and lines indented past `indent`, in order.
///
/// Blank lines are absorbed greedily, so blanks that trail the region stay inside it.
pub fn parse_verbatim<S: AsRef<str>>(
    ctx: &mut ParseContext<'_, S>,
    indent: usize,
) -> Result<Verbatim, ParseError> {
    let start_line = ctx.line();
    let mut lines = Vec::new();
    loop {
        if ctx.lookahead().is_blank() {
            ctx.shift();
            lines.push(VerbatimLine::Blank);
        } else if ctx.lookahead().is_indented_past(indent) {
            if let Some(line) = ctx.shift().into_plain() {
                lines.push(VerbatimLine::Line(line));
            }
        } else {
            break;
        }
    }
    if !lines.iter().any(|line| matches!(line, VerbatimLine::Line(_))) {
        return Err(ParseError::EmptyNode {
            kind: NodeKind::Verbatim,
            indent,
            line: start_line,
        });
    }
    trace!("reduce Verbatim({}) with {} lines", indent, lines.len());
    Ok(Verbatim::new(indent, lines))
}

/// Bullet items at exactly `indent`, each parsed as a block at its inner indent.
pub fn parse_bullet_list<S: AsRef<str>>(
    ctx: &mut ParseContext<'_, S>,
    indent: usize,
) -> Result<BulletList, ParseError> {
    let start_line = ctx.line();
    let mut items = Vec::new();
    loop {
        let (inner_indent, inner_line) = match ctx.lookahead() {
            Terminal::Bullet(bullet) if bullet.indent == indent => {
                (bullet.inner_indent, bullet.to_inner_line())
            }
            _ => break,
        };
        ctx.replace_lookahead(Terminal::Plain(inner_line));
        items.push(parse_block(ctx, Some(inner_indent))?);
    }
    if items.is_empty() {
        return Err(ParseError::EmptyList {
            kind: NodeKind::BulletList,
            indent,
            line: start_line,
        });
    }
    trace!("reduce BulletList({}) with {} items", indent, items.len());
    Ok(BulletList::new(indent, items))
}

/// Definition items at exactly `indent`. A body is parsed when the line after the head is
/// indented past `indent`.
pub fn parse_definition_list<S: AsRef<str>>(
    ctx: &mut ParseContext<'_, S>,
    indent: usize,
) -> Result<DefinitionList, ParseError> {
    let start_line = ctx.line();
    let mut items = Vec::new();
    while ctx.lookahead().is_definition_at(indent) {
        let Terminal::Definition(head) = ctx.shift() else {
            break;
        };
        let body = match ctx.lookahead().indent() {
            Some(body_indent) if body_indent > indent => Some(parse_block(ctx, Some(body_indent))?),
            _ => None,
        };
        trace!(
            "reduce DefinitionItem({}) with {} children",
            indent,
            1 + usize::from(body.is_some())
        );
        items.push(DefinitionItem::new(indent, head, body));
    }
    if items.is_empty() {
        return Err(ParseError::EmptyList {
            kind: NodeKind::DefinitionList,
            indent,
            line: start_line,
        });
    }
    trace!("reduce DefinitionList({}) with {} items", indent, items.len());
    Ok(DefinitionList::new(indent, items))
}

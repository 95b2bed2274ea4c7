//! Single-pass tokenizer for the backend's reply markup.
//!
//! The grammar is deliberately small:
//!
//! | Source | Block |
//! |--------|-------|
//! | `<emoji> **<label>**` for one of the seven known labels | [`Block::Section`] |
//! | `**text**` on a single line | [`Block::Emphasis`] |
//! | `\n`, `\r\n` or `\r` | [`Block::LineBreak`] |
//! | anything else | [`Block::PlainText`] |
//!
//! Nothing here can fail. Markers that do not close, emoji that are not
//! followed by a known label, and stray asterisks all fall through to plain
//! text.

use super::block::{Block, BlockGroup, SectionLabel};

const EMPHASIS_MARKER: &str = "**";

/// Convert a raw assistant reply into an ordered sequence of blocks.
pub fn format_response(text: &str) -> Vec<Block> {
    let mut tokenizer = Tokenizer::new(text);
    tokenizer.run();
    tokenizer.blocks
}

/// Fold a flat block sequence into section groups.
///
/// Each section opens a new group that lasts until the next section or the end
/// of input.
pub fn group_sections(blocks: &[Block]) -> Vec<BlockGroup> {
    let mut groups: Vec<BlockGroup> = Vec::new();

    for block in blocks {
        match block {
            Block::Section { label, .. } => groups.push(BlockGroup {
                heading: Some(*label),
                body: Vec::new(),
            }),
            other => match groups.last_mut() {
                Some(group) => group.body.push(other.clone()),
                None => groups.push(BlockGroup {
                    heading: None,
                    body: vec![other.clone()],
                }),
            },
        }
    }

    groups
}

struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
    plain: String,
    blocks: Vec<Block>,
}

impl<'a> Tokenizer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            plain: String::new(),
            blocks: Vec::new(),
        }
    }

    fn run(&mut self) {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];

            if let Some(len) = line_terminator_len(rest) {
                self.emit(Block::LineBreak);
                self.pos += len;
            } else if let Some((label, len)) = match_section(rest) {
                self.emit(Block::section(label));
                self.pos += len;
            } else if let Some((inner, len)) = match_emphasis(rest) {
                self.emit(Block::emphasis(inner));
                self.pos += len;
            } else {
                let Some(ch) = rest.chars().next() else {
                    break;
                };
                self.plain.push(ch);
                self.pos += ch.len_utf8();
            }
        }
        self.flush_plain();
    }

    fn emit(&mut self, block: Block) {
        self.flush_plain();
        self.blocks.push(block);
    }

    fn flush_plain(&mut self) {
        if !self.plain.is_empty() {
            let text = std::mem::take(&mut self.plain);
            self.blocks.push(Block::PlainText { text });
        }
    }
}

fn line_terminator_len(s: &str) -> Option<usize> {
    if s.starts_with("\r\n") {
        Some(2)
    } else if s.starts_with('\n') || s.starts_with('\r') {
        Some(1)
    } else {
        None
    }
}

fn horizontal_space_len(s: &str) -> usize {
    s.len() - s.trim_start_matches([' ', '\t']).len()
}

/// `<emoji>[ ]**<label>**[ ]` → (label, consumed bytes)
fn match_section(s: &str) -> Option<(SectionLabel, usize)> {
    let mut pos = emoji_cluster_len(s)?;
    pos += horizontal_space_len(&s[pos..]);

    let after_open = s[pos..].strip_prefix(EMPHASIS_MARKER)?;
    for label in SectionLabel::ALL {
        let Some(after_label) = after_open.strip_prefix(label.as_str()) else {
            continue;
        };
        let Some(after_close) = after_label.strip_prefix(EMPHASIS_MARKER) else {
            continue;
        };
        let consumed = s.len() - after_close.len();
        return Some((label, consumed + horizontal_space_len(after_close)));
    }
    None
}

/// `**text**` within one line → (text, consumed bytes)
fn match_emphasis(s: &str) -> Option<(&str, usize)> {
    let body = s.strip_prefix(EMPHASIS_MARKER)?;
    let line_end = body.find(['\n', '\r']).unwrap_or(body.len());
    let close = body[..line_end].find(EMPHASIS_MARKER)?;
    if close == 0 {
        return None;
    }
    Some((&body[..close], EMPHASIS_MARKER.len() * 2 + close))
}

/// Byte length of a leading emoji cluster, if `s` starts with one.
///
/// Covers a pictograph plus trailing variation selectors, skin-tone
/// modifiers, keycap marks and ZWJ-joined pictographs.
fn emoji_cluster_len(s: &str) -> Option<usize> {
    if let Some(len) = keycap_len(s) {
        return Some(len);
    }

    let mut chars = s.char_indices().peekable();
    let (_, first) = chars.next()?;
    if !is_pictograph(first) {
        return None;
    }
    let mut end = first.len_utf8();

    // Flags are a pair of regional indicators
    if is_regional_indicator(first)
        && let Some(&(idx, ch)) = chars.peek()
        && is_regional_indicator(ch)
    {
        chars.next();
        end = idx + ch.len_utf8();
    }

    while let Some(&(idx, ch)) = chars.peek() {
        if is_emoji_modifier(ch) {
            chars.next();
            end = idx + ch.len_utf8();
        } else if ch == '\u{200D}' {
            chars.next();
            match chars.peek() {
                Some(&(next_idx, next)) if is_pictograph(next) => {
                    chars.next();
                    end = next_idx + next.len_utf8();
                }
                _ => break,
            }
        } else {
            break;
        }
    }

    Some(end)
}

/// `1️⃣`, `#⃣` and friends: digit, `#` or `*`, optional U+FE0F, then U+20E3
fn keycap_len(s: &str) -> Option<usize> {
    let rest = s.strip_prefix(|c: char| c.is_ascii_digit() || c == '#' || c == '*')?;
    let rest = rest.strip_prefix('\u{FE0F}').unwrap_or(rest);
    let rest = rest.strip_prefix('\u{20E3}')?;
    Some(s.len() - rest.len())
}

fn is_pictograph(ch: char) -> bool {
    matches!(
        ch as u32,
        0x00A9
            | 0x00AE
            | 0x203C
            | 0x2049
            | 0x2122
            | 0x2139
            | 0x2194..=0x21AA
            | 0x2300..=0x23FF
            | 0x24C2
            | 0x25AA..=0x25FE
            | 0x2600..=0x27BF
            | 0x2934..=0x2935
            | 0x2B00..=0x2BFF
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
            | 0x1F000..=0x1FAFF
    )
}

fn is_regional_indicator(ch: char) -> bool {
    matches!(ch as u32, 0x1F1E6..=0x1F1FF)
}

fn is_emoji_modifier(ch: char) -> bool {
    matches!(ch as u32, 0xFE0E | 0xFE0F | 0x20E3 | 0x1F3FB..=0x1F3FF)
}

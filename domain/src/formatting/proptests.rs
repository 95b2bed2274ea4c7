//! Property-based tests for the response formatter
//!
//! Whatever the backend sends, formatting must:
//! - never panic
//! - produce at least one block for non-empty input
//! - emit exactly one line break per line terminator
//! - never invent text that was not in the reply

use super::block::Block;
use super::parser::{format_response, group_sections};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Replies built from the pieces the tokenizer cares about
fn arb_marker_heavy() -> impl Strategy<Value = String> {
    "(\\*|\\*\\*|🎯|⚠\u{FE0F}|ℹ|👩\u{200D}💻|\u{FE0F}|\u{200D}|\u{20E3}|1|🇺|\r\n|\r|\n| |\t|x|é|Prediction:|Alert:|Good News:|Risk Level:){0,48}"
}

fn line_terminators(text: &str) -> usize {
    text.replace("\r\n", "\n")
        .chars()
        .filter(|c| matches!(c, '\n' | '\r'))
        .count()
}

fn text_len(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|block| match block {
            Block::PlainText { text } | Block::Emphasis { text } => text.len(),
            Block::Section { label, .. } => label.as_str().len(),
            Block::LineBreak => 0,
        })
        .sum()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_any_text_formats(text in any::<String>()) {
        let blocks = format_response(&text);
        prop_assert_eq!(blocks.is_empty(), text.is_empty());
    }

    #[test]
    fn prop_marker_heavy_text_formats(text in arb_marker_heavy()) {
        let blocks = format_response(&text);
        prop_assert_eq!(blocks.is_empty(), text.is_empty());
        prop_assert!(text_len(&blocks) <= text.len());
    }

    #[test]
    fn prop_one_line_break_per_terminator(text in arb_marker_heavy()) {
        let blocks = format_response(&text);
        let breaks = blocks.iter().filter(|b| **b == Block::LineBreak).count();
        prop_assert_eq!(breaks, line_terminators(&text));
    }

    #[test]
    fn prop_no_empty_text_blocks(text in arb_marker_heavy()) {
        for block in format_response(&text) {
            if let Block::PlainText { text } | Block::Emphasis { text } = block {
                prop_assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn prop_grouping_keeps_every_block(text in arb_marker_heavy()) {
        let blocks = format_response(&text);
        let groups = group_sections(&blocks);

        let sections = blocks.iter().filter(|b| b.is_section()).count();
        let headed = groups.iter().filter(|g| g.heading.is_some()).count();
        prop_assert_eq!(headed, sections);

        let body: usize = groups.iter().map(|g| g.body.len()).sum();
        prop_assert_eq!(body, blocks.len() - sections);
    }
}

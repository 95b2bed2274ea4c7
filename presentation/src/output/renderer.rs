//! Terminal rendering of transcript messages

use churn_domain::{Block, Message, OutputFormat, Role, SectionLabel, Tone, group_sections};
use colored::{Color, Colorize};

/// Renders messages for the console in the configured [`OutputFormat`]
#[derive(Debug, Clone, Copy)]
pub struct ReplyRenderer {
    format: OutputFormat,
}

impl ReplyRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render the body of one message
    pub fn render(&self, message: &Message) -> String {
        match message.role {
            Role::User => message.content.clone(),
            Role::Assistant => match self.format {
                OutputFormat::Pretty => Self::render_blocks(message.blocks()),
                OutputFormat::Plain => message.content.clone(),
                OutputFormat::Json => {
                    serde_json::to_string_pretty(message.blocks()).unwrap_or_else(|_| "[]".to_string())
                }
            },
        }
    }

    /// Render one message prefixed with its author, for transcript listings
    pub fn render_entry(&self, message: &Message) -> String {
        let author = match message.role {
            Role::User => "You".bold().to_string(),
            Role::Assistant => "Assistant".blue().bold().to_string(),
        };
        format!("{}: {}", author, self.render(message))
    }

    /// Render formatted blocks with section styling.
    ///
    /// Text under an Alert, Caution or Good News heading takes that
    /// section's color until the next heading.
    pub fn render_blocks(blocks: &[Block]) -> String {
        let mut output = String::new();

        for group in group_sections(blocks) {
            if let Some(label) = group.heading {
                output.push_str(&Self::heading(label));
                if matches!(group.body.first(), Some(Block::PlainText { .. } | Block::Emphasis { .. })) {
                    output.push(' ');
                }
            }

            let tint = group.tone().filter(|tone| *tone != Tone::Informational);
            for block in &group.body {
                match block {
                    Block::PlainText { text } => output.push_str(&Self::body(text, tint, false)),
                    Block::Emphasis { text } => output.push_str(&Self::body(text, tint, true)),
                    Block::LineBreak => output.push('\n'),
                    Block::Section { .. } => {}
                }
            }
        }

        output
    }

    fn heading(label: SectionLabel) -> String {
        label
            .as_str()
            .color(Self::tone_color(label.tone()))
            .bold()
            .to_string()
    }

    fn body(text: &str, tint: Option<Tone>, emphasized: bool) -> String {
        let styled = match tint {
            Some(tone) => text.color(Self::tone_color(tone)),
            None => text.normal(),
        };
        if emphasized {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    fn tone_color(tone: Tone) -> Color {
        match tone {
            Tone::Critical => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Positive => Color::Green,
            Tone::Informational => Color::Cyan,
        }
    }
}

impl Default for ReplyRenderer {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

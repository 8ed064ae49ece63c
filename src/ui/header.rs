use crate::store::PostsState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const APP_TITLE: &str = "MiniBlog";

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u8) -> &'static str {
    SPINNER_FRAMES[tick as usize % SPINNER_FRAMES.len()]
}

pub struct Header;

impl Header {
    pub fn widget(posts: &PostsState, tick: u8) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![
            Span::styled("  ", muted),
            Span::styled(APP_TITLE, title_style),
            Span::styled("  │  ", muted),
            Span::styled(
                format!("{} posts", posts.items().len()),
                Style::default().fg(HEADER_TEXT),
            ),
        ];

        let mut activity = Vec::new();
        if posts.is_fetching() {
            activity.push("loading");
        }
        if posts.is_adding() {
            activity.push("publishing");
        }
        if !activity.is_empty() {
            spans.push(Span::styled("  │  ", muted));
            spans.push(Span::styled(
                format!("{} {}", spinner_frame(tick), activity.join(", ")),
                muted,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

use crate::api::Post;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::FormField;
use crate::ui::header::{spinner_frame, Header};
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, CARD_BORDER, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub const LOADING_TEXT: &str = "Loading posts...";
pub const EMPTY_TEXT: &str = "No posts yet.";
const TITLE_LABEL: &str = "Title   ";
const BODY_LABEL: &str = "Content ";
const TITLE_PLACEHOLDER: &str = "Title";
const BODY_PLACEHOLDER: &str = "Content";
/// Body lines visible in the form; older lines scroll out.
const BODY_ROWS: usize = 4;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::widget(app.posts(), app.animation_tick()), header);
    frame.render_widget(Clear, body);

    let status_lines = status_lines(app);
    let (status, list, form) = body_regions(body, status_lines.len() as u16);
    if !status_lines.is_empty() {
        frame.render_widget(
            Paragraph::new(status_lines).alignment(Alignment::Center),
            status,
        );
    }
    draw_posts(frame, list, app);
    draw_form(frame, form, app);

    frame.render_widget(Footer::widget(footer), footer);
}

/// Key shown next to a post: the server id, or its position when the
/// server did not assign one.
pub fn post_key(post: &Post, index: usize) -> String {
    match post.id {
        Some(id) => format!("#{id}"),
        None => format!("local-{index}"),
    }
}

fn status_lines(app: &App) -> Vec<Line<'static>> {
    let posts = app.posts();
    let mut lines = Vec::new();
    if posts.is_fetching() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", spinner_frame(app.animation_tick()), LOADING_TEXT),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    if let Some(error) = posts.error() {
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn draw_posts(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(" Posts ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let posts = app.posts();
    if posts.items().is_empty() {
        let placeholder = if posts.is_fetching() {
            Vec::new()
        } else {
            vec![Line::from(Span::styled(
                EMPTY_TEXT,
                Style::default()
                    .fg(MUTED_TEXT)
                    .add_modifier(Modifier::ITALIC),
            ))]
        };
        frame.render_widget(
            Paragraph::new(placeholder)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let title_style = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(MUTED_TEXT);
    let separator = Style::default().fg(CARD_BORDER);

    let mut lines = Vec::new();
    for (index, post) in posts.items().iter().enumerate().skip(app.list_offset()) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>9} ", post_key(post, index)), key_style),
            Span::styled(post.title.clone(), title_style),
        ]));
        for body_line in post.body.lines() {
            lines.push(Line::from(format!("          {body_line}")));
        }
        lines.push(Line::from(Span::styled(
            "─".repeat(area.width.saturating_sub(2) as usize),
            separator,
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_form(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let form = app.form();
    let block = Block::default()
        .title(Span::styled(" New post ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let label_style = |field: FormField| {
        if form.focused == field {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        }
    };
    let placeholder_style = Style::default()
        .fg(MUTED_TEXT)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(TITLE_LABEL, label_style(FormField::Title)),
        if form.title.is_empty() {
            Span::styled(TITLE_PLACEHOLDER, placeholder_style)
        } else {
            Span::raw(form.title.clone())
        },
    ]));

    let body_lines = visible_body_lines(&form.body);
    let indent = " ".repeat(BODY_LABEL.len());
    if form.body.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(BODY_LABEL, label_style(FormField::Body)),
            Span::styled(BODY_PLACEHOLDER, placeholder_style),
        ]));
    } else {
        for (row, text) in body_lines.iter().enumerate() {
            let prefix = if row == 0 {
                Span::styled(BODY_LABEL, label_style(FormField::Body))
            } else {
                Span::raw(indent.clone())
            };
            lines.push(Line::from(vec![prefix, Span::raw(text.to_string())]));
        }
    }
    while lines.len() < 1 + BODY_ROWS {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));

    let button_style = if app.can_submit() {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", app.submit_label()),
        button_style,
    )));

    frame.render_widget(Paragraph::new(lines), inner);

    let (col, row) = match form.focused {
        FormField::Title => (TITLE_LABEL.len() + form.title.chars().count(), 0),
        FormField::Body => {
            let last = body_lines.last().map(|line| line.chars().count()).unwrap_or(0);
            (
                BODY_LABEL.len() + last,
                1 + body_lines.len().saturating_sub(1),
            )
        }
    };
    let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
    let y = inner.y + (row as u16).min(inner.height.saturating_sub(1));
    frame.set_cursor_position((x, y));
}

/// Trailing lines of the body that fit in the form.
fn visible_body_lines(body: &str) -> Vec<&str> {
    let lines: Vec<&str> = body.split('\n').collect();
    let start = lines.len().saturating_sub(BODY_ROWS);
    lines[start..].to_vec()
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the "new post" form including its border.
pub const FORM_HEIGHT: u16 = 9;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into status line, post list and form.
pub fn body_regions(body: Rect, status_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(status_height),
            Constraint::Min(0),
            Constraint::Length(FORM_HEIGHT.min(body.height)),
        ])
        .split(body);
    (chunks[0], chunks[1], chunks[2])
}

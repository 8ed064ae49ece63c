use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0x66, 0xcc);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const FOCUS_BORDER: Color = Color::Rgb(0x00, 0x66, 0xcc);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const CARD_BORDER: Color = Color::Rgb(0x52, 0x52, 0x52);

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x0d, 0x6e, 0xfd);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BADGE_TEXT: Color = Color::Rgb(0x21, 0x25, 0x29);
pub const BADGE_ZERO: Color = Color::Rgb(0xff, 0xc1, 0x07);
pub const BADGE_POSITIVE: Color = Color::Rgb(0x0d, 0x6e, 0xfd);
pub const BADGE_NEGATIVE: Color = Color::Rgb(0x6c, 0x75, 0x7d);
pub const CONTROL_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

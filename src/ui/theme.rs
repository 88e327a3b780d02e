use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 20, 26);
    pub const BG_ELEVATED: Color = Color::Rgb(36, 40, 51);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 92);
    pub const TEXT_PRIMARY: Color = Color::Rgb(222, 226, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 167, 184);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 117, 135);
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 196, 190);
    pub const ACCENT_AMBER: Color = Color::Rgb(232, 187, 98);
    pub const ACCENT_GREEN: Color = Color::Rgb(140, 200, 120);
    pub const ACCENT_RED: Color = Color::Rgb(232, 104, 104);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_missing() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_info() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).bg(Self::BG_ELEVATED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }
}

use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

fn key_hints(page: &Page) -> &'static [(&'static str, &'static str)] {
    match page {
        Page::Home => &[("Enter", "Começar"), ("q", "Sair")],
        Page::Personal(_) | Page::Professional(_) => &[
            ("Tab", "Próximo campo"),
            ("◀▶", "Opção"),
            ("Ctrl+S", "Enviar"),
            ("Esc", "Voltar"),
        ],
        Page::Display => &[("Enter", "Início"), ("Esc", "Voltar"), ("q", "Sair")],
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Status text
    if let Some(status) = &state.status {
        let style = match status.kind {
            StatusKind::Error => Theme::status_error(),
            StatusKind::Info => Theme::status_info(),
        };
        parts.push(Span::styled(format!(" {} ", status.text), style));
    }

    if state.config.ui.show_key_hints {
        let hints: Vec<Span> = key_hints(&state.page)
            .iter()
            .flat_map(|(key, what)| {
                [
                    Span::styled(format!(" {}", key), Theme::key_hint()),
                    Span::styled(format!(" {} ", what), Theme::status_bar()),
                ]
            })
            .collect();

        // Pad so the hints sit on the right edge
        let used: usize = parts.iter().map(|s| s.width()).sum();
        let hint_width: usize = hints.iter().map(|s| s.width()).sum();
        let remaining = (area.width as usize).saturating_sub(used + hint_width);
        parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
        parts.extend(hints);
    }

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}

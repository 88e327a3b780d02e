use crate::app::route::Route;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

fn step_label(route: Route) -> &'static str {
    match route {
        Route::Home => "Início",
        Route::PersonalForm => "Etapa 1 de 2",
        Route::ProfessionalForm => "Etapa 2 de 2",
        Route::FormDisplay => "Concluído",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);
    let route = state.route();
    let line = Line::from(vec![
        Span::styled(
            " formwizard ",
            bg.fg(Theme::ACCENT_TEAL).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", bg.fg(Theme::BORDER_DIM)),
        Span::styled(route.path(), bg.fg(Theme::TEXT_PRIMARY)),
        Span::styled(" │ ", bg.fg(Theme::BORDER_DIM)),
        Span::styled(step_label(route), bg.fg(Theme::TEXT_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line).style(bg), area);
}

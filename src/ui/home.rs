use crate::ui::fields::render_button;
use crate::ui::layout::stack;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const CALL_TO_ACTION: &str = "Preencher Formulário";

pub fn render(frame: &mut Frame, area: Rect) {
    let top = area.height.saturating_sub(6) / 2;
    let rows = stack(area, &[top, 2, 3]);

    let intro = Paragraph::new(Line::from(Span::styled(
        "Cadastro de dados pessoais e profissionais",
        Theme::label(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(intro, rows[1]);
    render_button(frame, rows[2], CALL_TO_ACTION, true);
}

use crate::forms::page::FormPage;
use crate::forms::FormSpec;
use crate::ui::fields::{field_height, render_button, render_field, FieldView};
use crate::ui::layout::stack;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HEADING_ROWS: u16 = 2;
const BUTTON_ROWS: u16 = 3;

pub fn render<F: FormSpec>(frame: &mut Frame, area: Rect, page: &FormPage<F>) {
    let fields = page.form.fields();

    let mut heights = vec![HEADING_ROWS];
    heights.extend(fields.iter().map(field_height));
    heights.push(BUTTON_ROWS);
    let rows = stack(area, &heights);

    let heading = Paragraph::new(Line::from(Span::styled(F::HEADING, Theme::heading())));
    frame.render_widget(heading, rows[0]);

    for (idx, spec) in fields.iter().enumerate() {
        let focused = page.focus == idx;
        let view = FieldView {
            spec,
            value: page.draft.get(spec.key),
            editor: if focused && spec.is_text_entry() {
                Some(&page.editor)
            } else {
                None
            },
            focused,
            missing: page.is_highlighted(spec.key),
        };
        render_field(frame, rows[idx + 1], &view);
    }

    render_button(
        frame,
        rows[fields.len() + 1],
        F::SUBMIT_LABEL,
        page.on_submit_button(),
    );
}

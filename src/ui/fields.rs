//! Controlled form controls: each draws one field from its props and value.

use crate::forms::editor::LineEditor;
use crate::forms::field::{FieldKind, FieldSpec};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

const TEXTAREA_ROWS: u16 = 4;

/// Rows a field occupies, borders included.
pub fn field_height<K>(spec: &FieldSpec<K>) -> u16 {
    match spec.kind {
        FieldKind::TextArea { .. } => TEXTAREA_ROWS + 2,
        _ => 3,
    }
}

pub struct FieldView<'a, K> {
    pub spec: &'a FieldSpec<K>,
    pub value: &'a str,
    /// Present when the field has focus and takes text.
    pub editor: Option<&'a LineEditor>,
    pub focused: bool,
    pub missing: bool,
}

pub fn render_field<K>(frame: &mut Frame, area: Rect, view: &FieldView<'_, K>) {
    let (border_style, border_type) = if view.focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else if view.missing {
        (Theme::border_missing(), Theme::border_type())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let mut block = Block::default()
        .title(Span::styled(
            format!(" {}: ", view.spec.label),
            if view.focused {
                Theme::title()
            } else {
                Theme::label()
            },
        ))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    if let Some(max) = view.spec.max_len() {
        let count = format!(" {}/{} ", view.value.chars().count(), max);
        block = block.title_bottom(Line::from(Span::styled(count, Theme::label())).right_aligned());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match &view.spec.kind {
        FieldKind::Text => render_text(frame, inner, view),
        FieldKind::TextArea { .. } => render_textarea(frame, inner, view),
        FieldKind::Select { placeholder, .. } => render_select(frame, inner, view, placeholder),
    }
}

fn render_text<K>(frame: &mut Frame, inner: Rect, view: &FieldView<'_, K>) {
    let width = inner.width as usize;
    let (text, cursor_col) = match view.editor {
        Some(ed) => {
            // Scroll horizontally so the cursor stays inside the box.
            let before = display_width(&ed.text[..ed.cursor]);
            let skip = before.saturating_sub(width.saturating_sub(1));
            (skip_columns(&ed.text, skip), Some(before - skip))
        }
        None => (view.value.to_string(), None),
    };

    frame.render_widget(Paragraph::new(text).style(Theme::input_text()), inner);

    if let Some(col) = cursor_col {
        frame.set_cursor_position((inner.x + col as u16, inner.y));
    }
}

fn render_textarea<K>(frame: &mut Frame, inner: Rect, view: &FieldView<'_, K>) {
    let width = inner.width as usize;
    let height = inner.height as usize;
    let rows = wrap_columns(view.value, width);

    let cursor = view.editor.map(|ed| cursor_in_wrapped(&ed.text, ed.cursor, width));
    let scroll = match cursor {
        Some((row, _)) => row.saturating_sub(height.saturating_sub(1)),
        None => 0,
    };

    let lines: Vec<Line> = rows
        .into_iter()
        .skip(scroll)
        .take(height)
        .map(|r| Line::from(Span::styled(r, Theme::input_text())))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some((row, col)) = cursor {
        frame.set_cursor_position((inner.x + col as u16, inner.y + (row - scroll) as u16));
    }
}

fn render_select<K>(frame: &mut Frame, inner: Rect, view: &FieldView<'_, K>, placeholder: &str) {
    let chosen = if view.value.is_empty() {
        Span::styled(placeholder.to_string(), Theme::placeholder())
    } else {
        Span::styled(view.value.to_string(), Theme::input_text())
    };
    let line = if view.focused {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Theme::ACCENT_TEAL)),
            chosen,
            Span::styled(" ▶", Style::default().fg(Theme::ACCENT_TEAL)),
        ])
    } else {
        Line::from(chosen)
    };
    frame.render_widget(Paragraph::new(line), inner);
}

pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .style(if focused {
            Theme::button_focused()
        } else {
            Theme::button()
        });
    let paragraph = Paragraph::new(Line::from(label.to_string()).centered()).block(block);
    frame.render_widget(paragraph, area);
}

fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Drop the first `cols` display columns of `s`.
fn skip_columns(s: &str, cols: usize) -> String {
    let mut seen = 0;
    s.chars()
        .skip_while(|c| {
            if seen >= cols {
                return false;
            }
            seen += c.width().unwrap_or(0);
            true
        })
        .collect()
}

/// Hard-wrap `text` at `width` columns, honoring explicit newlines.
pub fn wrap_columns(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(c);
            used += w;
        }
        rows.push(row);
    }
    rows
}

/// Row and column of byte offset `cursor` once `text` is wrapped at `width`.
pub fn cursor_in_wrapped(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let rows = wrap_columns(&text[..cursor], width);
    let row = rows.len().saturating_sub(1);
    let col = rows.last().map(|r| display_width(r)).unwrap_or(0);
    // A full row pushes the cursor onto the next one.
    if col >= width.max(1) {
        (row + 1, 0)
    } else {
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_splits_on_width_and_newlines() {
        assert_eq!(wrap_columns("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_columns("ab\ncd", 4), vec!["ab", "cd"]);
        assert_eq!(wrap_columns("", 4), vec![""]);
    }

    #[test]
    fn cursor_tracks_wrapped_rows() {
        assert_eq!(cursor_in_wrapped("abcdef", 6, 4), (1, 2));
        assert_eq!(cursor_in_wrapped("ab\nc", 4, 4), (1, 1));
        assert_eq!(cursor_in_wrapped("abcd", 4, 4), (1, 0));
        assert_eq!(cursor_in_wrapped("", 0, 4), (0, 0));
    }

    #[test]
    fn skipping_columns_counts_display_width() {
        assert_eq!(skip_columns("ação", 2), "ão");
        assert_eq!(skip_columns("abc", 0), "abc");
    }

    #[test]
    fn textarea_is_taller_than_text_input() {
        let text = FieldSpec::text((), "role", "Cargo");
        let area = FieldSpec::textarea((), "resume", "Resumo do currículo", 1000);
        assert_eq!(field_height(&text), 3);
        assert_eq!(field_height(&area), TEXTAREA_ROWS + 2);
    }
}

use crate::store::GlobalState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const HEADING: &str = "Dados Enviados";

/// Every committed field paired with its display label, personal slice first.
pub fn display_lines(state: &GlobalState) -> Vec<(&'static str, &str)> {
    let p = &state.personal_data;
    let w = &state.professional_data;
    vec![
        ("Nome", p.name.as_str()),
        ("Email", p.email.as_str()),
        ("Cpf", p.cpf.as_str()),
        ("Endereço", p.address.as_str()),
        ("Cidade", p.city.as_str()),
        ("Estado", p.uf.as_str()),
        ("Currículo", w.resume.as_str()),
        ("Cargo", w.role.as_str()),
        ("Descrição do cargo", w.description.as_str()),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, state: &GlobalState) {
    let mut lines = vec![
        Line::from(Span::styled(HEADING, Theme::heading())),
        Line::default(),
    ];

    for (label, value) in display_lines(state) {
        let mut value_lines = value.split('\n');
        let first = value_lines.next().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", label), Theme::label()),
            Span::styled(first.to_string(), Theme::input_text()),
        ]));
        // Continuation lines of multi-line answers sit under the value.
        let indent = " ".repeat(label.chars().count() + 2);
        for rest in value_lines {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(rest.to_string(), Theme::input_text()),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::route::Route;
    use crate::app::state::AppState;
    use crate::config::AppConfig;
    use crate::store::{PersonalData, ProfessionalData, Store};
    use crate::ui::render_to_string;

    fn populated() -> GlobalState {
        GlobalState {
            personal_data: PersonalData {
                name: "Nome Teste".into(),
                email: "email@teste.com".into(),
                cpf: "123.456.789-00".into(),
                address: "Rua Teste".into(),
                city: "Cidade Teste".into(),
                uf: "Amapá".into(),
            },
            professional_data: ProfessionalData {
                resume: "Currículo Teste".into(),
                role: "Cargo Teste".into(),
                description: "Descrição Teste".into(),
            },
        }
    }

    #[test]
    fn renders_every_committed_field() {
        let config = AppConfig {
            start_route: Route::FormDisplay,
            ..AppConfig::default()
        };
        let state = AppState::with_store(config, Store::with_state(populated()));
        let screen = render_to_string(&state, 100, 30);

        for expected in [
            "Dados Enviados",
            "Nome: Nome Teste",
            "Email: email@teste.com",
            "Cpf: 123.456.789-00",
            "Endereço: Rua Teste",
            "Cidade: Cidade Teste",
            "Estado: Amapá",
            "Currículo: Currículo Teste",
            "Cargo: Cargo Teste",
            "Descrição do cargo: Descrição Teste",
        ] {
            assert!(screen.contains(expected), "missing {expected:?} in\n{screen}");
        }
    }

    #[test]
    fn empty_store_renders_empty_values() {
        let empty = GlobalState::default();
        let lines = display_lines(&empty);
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn multi_line_answers_are_indented() {
        let mut state = populated();
        state.professional_data.resume = "linha um\nlinha dois".into();
        let config = AppConfig {
            start_route: Route::FormDisplay,
            ..AppConfig::default()
        };
        let app = AppState::with_store(config, Store::with_state(state));
        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("Currículo: linha um"));
        assert!(screen.contains("           linha dois"));
    }
}

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::route::Route;
use crate::app::state::*;
use crate::forms::page::FormPage;
use crate::forms::FormSpec;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Esc {
        state.back();
        return vec![];
    }

    match &mut state.page {
        Page::Home => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.navigate(Route::PersonalForm);
                vec![]
            }
            KeyCode::Char('q') => vec![Action::Quit],
            _ => vec![],
        },
        Page::Display => match key.code {
            KeyCode::Enter => {
                state.navigate(Route::Home);
                vec![]
            }
            KeyCode::Char('q') => vec![Action::Quit],
            _ => vec![],
        },
        Page::Personal(page) => {
            if handle_form_key(page, key) {
                state.submit()
            } else {
                vec![]
            }
        }
        Page::Professional(page) => {
            if handle_form_key(page, key) {
                state.submit()
            } else {
                vec![]
            }
        }
    }
}

/// Route a key to the focused control. Returns true when the key asks for
/// the form to be submitted.
fn handle_form_key<F: FormSpec>(page: &mut FormPage<F>, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && key.code == KeyCode::Char('s') {
        return true;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            page.focus_next();
            return false;
        }
        KeyCode::BackTab | KeyCode::Up => {
            page.focus_prev();
            return false;
        }
        _ => {}
    }

    if page.on_submit_button() {
        return matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
    }

    let Some(spec) = page.focused_field() else {
        return false;
    };

    if !spec.is_text_entry() {
        match key.code {
            KeyCode::Left => {
                page.cycle_select(false);
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                page.cycle_select(true);
            }
            KeyCode::Enter => page.focus_next(),
            _ => {}
        }
        return false;
    }

    let multiline = spec.max_len().is_some();
    match key.code {
        KeyCode::Enter if multiline => {
            page.edit(|ed| {
                if !ed.insert_char('\n') {
                    debug!("newline refused at character limit");
                }
            });
        }
        KeyCode::Enter => page.focus_next(),
        KeyCode::Char('w') if ctrl => {
            page.edit(|ed| ed.delete_word_back());
        }
        KeyCode::Char('u') if ctrl => {
            page.edit(|ed| {
                ed.text.clear();
                ed.cursor = 0;
            });
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            page.edit(|ed| {
                if !ed.insert_char(c) {
                    debug!("input refused at character limit");
                }
            });
        }
        KeyCode::Backspace => {
            page.edit(|ed| ed.delete_back());
        }
        KeyCode::Delete => {
            page.edit(|ed| ed.delete_forward());
        }
        KeyCode::Left => {
            page.edit(|ed| ed.move_left());
        }
        KeyCode::Right => {
            page.edit(|ed| ed.move_right());
        }
        KeyCode::Home => {
            page.edit(|ed| ed.move_home());
        }
        KeyCode::End => {
            page.edit(|ed| ed.move_end());
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::{GlobalState, PersonalData, ProfessionalData};
    use crate::ui;
    use pretty_assertions::assert_eq;

    fn state_at(route: Route) -> AppState {
        AppState::new(AppConfig {
            start_route: route,
            ..AppConfig::default()
        })
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        press_with(state, code, KeyModifiers::NONE)
    }

    fn press_with(state: &mut AppState, code: KeyCode, mods: KeyModifiers) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, mods))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn fill_personal_form(state: &mut AppState) {
        type_text(state, "Nome Teste");
        press(state, KeyCode::Tab);
        type_text(state, "email@teste.com");
        press(state, KeyCode::Tab);
        type_text(state, "123.456.789-00");
        press(state, KeyCode::Tab);
        type_text(state, "Rua Teste");
        press(state, KeyCode::Tab);
        type_text(state, "Cidade Teste");
        press(state, KeyCode::Tab);
        // Rio de Janeiro, Minas Gerais, Amapá
        for _ in 0..3 {
            press(state, KeyCode::Right);
        }
        press(state, KeyCode::Tab);
    }

    fn fill_professional_form(state: &mut AppState) {
        type_text(state, "Currículo Teste");
        press(state, KeyCode::Tab);
        type_text(state, "Cargo Teste");
        press(state, KeyCode::Tab);
        type_text(state, "Descrição Teste");
        press(state, KeyCode::Tab);
    }

    fn personal_fixture() -> PersonalData {
        PersonalData {
            name: "Nome Teste".into(),
            email: "email@teste.com".into(),
            cpf: "123.456.789-00".into(),
            address: "Rua Teste".into(),
            city: "Cidade Teste".into(),
            uf: "Amapá".into(),
        }
    }

    fn professional_fixture() -> ProfessionalData {
        ProfessionalData {
            resume: "Currículo Teste".into(),
            role: "Cargo Teste".into(),
            description: "Descrição Teste".into(),
        }
    }

    #[test]
    fn home_button_opens_personal_form() {
        let mut state = state_at(Route::Home);
        assert!(ui::render_to_string(&state, 100, 40).contains("Preencher Formulário"));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.route(), Route::PersonalForm);
        assert!(ui::render_to_string(&state, 100, 40).contains("Informações Pessoais"));
    }

    #[test]
    fn filled_personal_form_commits_and_advances() {
        let mut state = state_at(Route::PersonalForm);
        fill_personal_form(&mut state);
        let Page::Personal(page) = &state.page else {
            panic!("expected personal form");
        };
        assert!(page.on_submit_button());
        let actions = press(&mut state, KeyCode::Enter);

        assert_eq!(
            actions,
            vec![Action::Submitted {
                action: "SET_PERSONAL_DATA",
                next: Route::ProfessionalForm,
            }]
        );
        assert_eq!(state.store.state().personal_data, personal_fixture());
        assert_eq!(state.store.state().professional_data, ProfessionalData::default());
        assert_eq!(state.store.dispatch_count(), 1);
        assert_eq!(state.route(), Route::ProfessionalForm);
        assert!(ui::render_to_string(&state, 100, 40).contains("Informações Profissionais"));
    }

    #[test]
    fn empty_personal_form_stays_put() {
        let mut state = state_at(Route::PersonalForm);
        let actions = press_with(&mut state, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(actions, vec![Action::Bell]);
        assert_eq!(state.route(), Route::PersonalForm);
        assert_eq!(state.store.dispatch_count(), 0);
        assert!(!ui::render_to_string(&state, 100, 40).contains("Informações Profissionais"));
    }

    #[test]
    fn filled_professional_form_shows_results() {
        let mut state = state_at(Route::ProfessionalForm);
        fill_professional_form(&mut state);
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.store.state().professional_data, professional_fixture());
        assert_eq!(state.store.state().personal_data, PersonalData::default());
        assert_eq!(state.store.dispatch_count(), 1);
        assert!(ui::render_to_string(&state, 100, 40).contains("Dados Enviados"));
    }

    #[test]
    fn empty_professional_form_does_not_show_results() {
        let mut state = state_at(Route::ProfessionalForm);
        press_with(&mut state, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(state.route(), Route::ProfessionalForm);
        assert!(!ui::render_to_string(&state, 100, 40).contains("Dados Enviados"));
    }

    #[test]
    fn correcting_and_resubmitting_succeeds() {
        let mut state = state_at(Route::ProfessionalForm);
        type_text(&mut state, "Currículo Teste");
        press_with(&mut state, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(state.store.dispatch_count(), 0);

        // focus moved to the first missing field (Cargo)
        type_text(&mut state, "Cargo Teste");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "Descrição Teste");
        press_with(&mut state, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(state.store.dispatch_count(), 1);
        assert_eq!(state.store.state().professional_data, professional_fixture());
        assert_eq!(state.route(), Route::FormDisplay);
    }

    #[test]
    fn full_wizard_fills_both_slices() {
        let mut state = state_at(Route::Home);
        press(&mut state, KeyCode::Enter);
        fill_personal_form(&mut state);
        press(&mut state, KeyCode::Enter);
        fill_professional_form(&mut state);
        press(&mut state, KeyCode::Enter);

        assert_eq!(
            state.store.state(),
            &GlobalState {
                personal_data: personal_fixture(),
                professional_data: professional_fixture(),
            }
        );
        assert_eq!(state.store.dispatch_count(), 2);
        let screen = ui::render_to_string(&state, 100, 40);
        assert!(screen.contains("Nome: Nome Teste"));
        assert!(screen.contains("Descrição do cargo: Descrição Teste"));
    }

    #[test]
    fn enter_in_textarea_inserts_newline() {
        let mut state = state_at(Route::ProfessionalForm);
        type_text(&mut state, "a");
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "b");
        let Page::Professional(page) = &state.page else {
            panic!("expected professional form");
        };
        assert_eq!(page.editor.text, "a\nb");
        assert_eq!(state.route(), Route::ProfessionalForm);
    }

    #[test]
    fn escape_goes_back() {
        let mut state = state_at(Route::Home);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.route(), Route::Home);
    }

    #[test]
    fn ctrl_c_quits_from_a_form_but_q_is_typed() {
        let mut state = state_at(Route::PersonalForm);
        assert!(press(&mut state, KeyCode::Char('q')).is_empty());
        assert_eq!(
            press_with(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL),
            vec![Action::Quit]
        );
    }

    #[test]
    fn tick_does_not_mark_dirty_without_status() {
        let mut state = state_at(Route::Home);
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
    }
}

use crate::app::action::Action;
use crate::app::route::Route;
use crate::config::AppConfig;
use crate::forms::gate::GateOutcome;
use crate::forms::page::FormPage;
use crate::forms::personal::PersonalForm;
use crate::forms::professional::ProfessionalForm;
use crate::forms::FormSpec;
use crate::store::Store;
use tracing::info;

/// The mounted page. Form pages own their draft, so replacing the page
/// discards any uncommitted input.
pub enum Page {
    Home,
    Personal(FormPage<PersonalForm>),
    Professional(FormPage<ProfessionalForm>),
    Display,
}

impl Page {
    fn for_route(route: Route, config: &AppConfig) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::PersonalForm => {
                Page::Personal(FormPage::new(PersonalForm::new(&config.personal.uf_options)))
            }
            Route::ProfessionalForm => Page::Professional(FormPage::new(ProfessionalForm::default())),
            Route::FormDisplay => Page::Display,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Home => Route::Home,
            Page::Personal(_) => Route::PersonalForm,
            Page::Professional(_) => Route::ProfessionalForm,
            Page::Display => Route::FormDisplay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    expires_at: u64,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub page: Page,
    /// Memory history; the last entry is the current route.
    pub history: Vec<Route>,
    pub status: Option<StatusMessage>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_store(config, Store::new())
    }

    /// Start from an existing store, e.g. one pre-populated with records.
    pub fn with_store(config: AppConfig, store: Store) -> Self {
        let start = config.start_route;
        let page = Page::for_route(start, &config);
        Self {
            config,
            store,
            page,
            history: vec![start],
            status: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route(), to = %route, "navigate");
        // Home is the root entry; going there starts a fresh history.
        if route == Route::Home {
            self.history = vec![Route::Home];
        } else {
            self.history.push(route);
        }
        self.page = Page::for_route(route, &self.config);
        self.status = None;
        self.dirty = true;
    }

    /// Return to the previous history entry. No-op on the first entry.
    pub fn back(&mut self) -> bool {
        if self.history.len() < 2 {
            return false;
        }
        self.history.pop();
        let route = *self.history.last().unwrap_or(&Route::Home);
        info!(to = %route, "back");
        self.page = Page::for_route(route, &self.config);
        self.status = None;
        self.dirty = true;
        true
    }

    /// Submit the mounted form through its gate.
    pub fn submit(&mut self) -> Vec<Action> {
        let result = match &mut self.page {
            Page::Personal(page) => submit_page(page, &mut self.store),
            Page::Professional(page) => submit_page(page, &mut self.store),
            Page::Home | Page::Display => return vec![],
        };
        self.dirty = true;

        match result {
            Ok((action, next)) => {
                self.navigate(next);
                self.set_status("Dados salvos.".to_string(), StatusKind::Info);
                vec![Action::Submitted { action, next }]
            }
            Err(missing) => {
                self.set_status(
                    format!("Preencha os campos obrigatórios: {}", missing.join(", ")),
                    StatusKind::Error,
                );
                vec![Action::Bell]
            }
        }
    }

    pub fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text,
            kind,
            expires_at: self.tick_count + self.config.ui.status_ticks,
        });
        self.dirty = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self
            .status
            .as_ref()
            .is_some_and(|s| self.tick_count >= s.expires_at)
        {
            self.status = None;
            self.dirty = true;
        }
    }
}

fn submit_page<F: FormSpec>(
    page: &mut FormPage<F>,
    store: &mut Store,
) -> Result<(&'static str, Route), Vec<&'static str>> {
    match page.submit(store) {
        GateOutcome::Committed { action, next } => Ok((action, next)),
        GateOutcome::Rejected { missing } => Err(page.labels_of(&missing)),
    }
}

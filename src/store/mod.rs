//! Session-wide store: two slices, two actions, one pure reducer.

pub mod model;

pub use model::{GlobalState, PersonalData, ProfessionalData};

/// The only ways the store can change. Each carries a full record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    SetPersonalData(PersonalData),
    SetProfessionalData(ProfessionalData),
}

impl StoreAction {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreAction::SetPersonalData(_) => "SET_PERSONAL_DATA",
            StoreAction::SetProfessionalData(_) => "SET_PROFESSIONAL_DATA",
        }
    }
}

/// Replace the slice named by `action`; the sibling slice is carried over as is.
pub fn reduce(state: &GlobalState, action: StoreAction) -> GlobalState {
    match action {
        StoreAction::SetPersonalData(personal_data) => GlobalState {
            personal_data,
            professional_data: state.professional_data.clone(),
        },
        StoreAction::SetProfessionalData(professional_data) => GlobalState {
            personal_data: state.personal_data.clone(),
            professional_data,
        },
    }
}

/// Owner of the committed session data.
///
/// Readers borrow [`Store::state`]; writers go through [`Store::dispatch`].
/// Every dispatch is counted.
#[derive(Debug, Default)]
pub struct Store {
    state: GlobalState,
    dispatch_count: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that starts from `state` instead of the empty records.
    pub fn with_state(state: GlobalState) -> Self {
        Self {
            state,
            dispatch_count: 0,
        }
    }

    pub fn state(&self) -> &GlobalState {
        &self.state
    }

    pub fn dispatch(&mut self, action: StoreAction) {
        tracing::debug!(action = action.kind(), "dispatch");
        self.state = reduce(&self.state, action);
        self.dispatch_count += 1;
    }

    pub fn dispatch_count(&self) -> usize {
        self.dispatch_count
    }
}

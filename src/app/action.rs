use crate::app::route::Route;

/// Side effects the main loop performs after the handler has updated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A form passed the gate and its slice was committed.
    Submitted { action: &'static str, next: Route },
    /// A submit was refused; ring the terminal bell.
    Bell,
    Quit,
}

//! Submit-time gate: commit and advance, or do nothing.

use super::{Draft, FormSpec};
use crate::app::route::Route;
use crate::store::Store;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<K> {
    /// The slice was replaced with one dispatch of `action`; navigate to `next`.
    Committed { action: &'static str, next: Route },
    /// At least one required field is empty. Nothing was written.
    Rejected { missing: Vec<K> },
}

/// Evaluate the draft from scratch and commit it only when every required
/// field is non-empty.
pub fn submit<F: FormSpec>(
    form: &F,
    draft: &Draft<F::Field>,
    store: &mut Store,
) -> GateOutcome<F::Field> {
    let route = F::ROUTE;
    let missing = form.missing_fields(draft);
    if !missing.is_empty() {
        debug!(%route, ?missing, "submit rejected");
        return GateOutcome::Rejected { missing };
    }

    let record = F::record(draft);
    info!(%route, ?record, "submit accepted");
    let action = F::action(record);
    let kind = action.kind();
    store.dispatch(action);
    GateOutcome::Committed {
        action: kind,
        next: F::NEXT,
    }
}

//! The two data-entry forms and the machinery they share: drafts, field
//! props, text editing, the per-page state holder and the submit gate.

pub mod draft;
pub mod editor;
pub mod field;
pub mod gate;
pub mod page;
pub mod personal;
pub mod professional;

use crate::app::route::Route;
use crate::store::StoreAction;
use std::fmt::Debug;

pub use draft::Draft;
pub use field::{FieldKind, FieldSpec};

/// Everything the gate and the renderers need to know about one form.
pub trait FormSpec {
    type Field: Copy + Ord + Debug;
    type Record: Debug;

    const HEADING: &'static str;
    const SUBMIT_LABEL: &'static str;
    const ROUTE: Route;
    /// Where a successful submit goes.
    const NEXT: Route;

    fn fields(&self) -> &[FieldSpec<Self::Field>];

    /// Build the full record from a draft. Absent keys become `""`.
    fn record(draft: &Draft<Self::Field>) -> Self::Record;

    /// The store action that replaces this form's slice with `record`.
    fn action(record: Self::Record) -> StoreAction;

    fn field(&self, key: Self::Field) -> Option<&FieldSpec<Self::Field>> {
        self.fields().iter().find(|f| f.key == key)
    }

    /// Required fields whose draft value is still empty, in display order.
    fn missing_fields(&self, draft: &Draft<Self::Field>) -> Vec<Self::Field> {
        self.fields()
            .iter()
            .filter(|f| f.required && !draft.is_filled(f.key))
            .map(|f| f.key)
            .collect()
    }
}

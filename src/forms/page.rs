use super::editor::LineEditor;
use super::field::{cycle_option, FieldKind, FieldSpec};
use super::gate::{self, GateOutcome};
use super::{Draft, FormSpec};
use crate::store::Store;

/// Local state of one mounted form page.
///
/// The draft lives exactly as long as the page; navigating away drops it.
/// Focus indexes the form's fields, with one extra slot for the submit
/// button at the end.
pub struct FormPage<F: FormSpec> {
    pub form: F,
    pub draft: Draft<F::Field>,
    pub focus: usize,
    pub editor: LineEditor,
    /// Fields reported missing by the last rejected submit.
    pub highlighted: Vec<F::Field>,
}

impl<F: FormSpec> FormPage<F> {
    pub fn new(form: F) -> Self {
        let mut page = Self {
            form,
            draft: Draft::new(),
            focus: 0,
            editor: LineEditor::default(),
            highlighted: Vec::new(),
        };
        page.load_editor();
        page
    }

    pub fn control_count(&self) -> usize {
        self.form.fields().len() + 1
    }

    pub fn focused_field(&self) -> Option<&FieldSpec<F::Field>> {
        self.form.fields().get(self.focus)
    }

    pub fn on_submit_button(&self) -> bool {
        self.focus == self.form.fields().len()
    }

    pub fn focus_next(&mut self) {
        self.focus_on((self.focus + 1) % self.control_count());
    }

    pub fn focus_prev(&mut self) {
        let n = self.control_count();
        self.focus_on((self.focus + n - 1) % n);
    }

    pub fn focus_on(&mut self, idx: usize) {
        self.focus = idx.min(self.control_count() - 1);
        tracing::trace!(field = self.focused_field().map(|f| f.name), "focus");
        self.load_editor();
    }

    fn load_editor(&mut self) {
        self.editor = match self.focused_field() {
            Some(spec) if spec.is_text_entry() => {
                LineEditor::load(self.draft.get(spec.key), spec.max_len())
            }
            _ => LineEditor::default(),
        };
    }

    /// Apply a text edit to the focused control and merge the result into
    /// the draft. Returns false when the focused control takes no text.
    pub fn edit(&mut self, apply: impl FnOnce(&mut LineEditor)) -> bool {
        let key = match self.focused_field() {
            Some(spec) if spec.is_text_entry() => spec.key,
            _ => return false,
        };
        apply(&mut self.editor);
        self.set_value(key, self.editor.text.clone());
        true
    }

    /// Step the focused select to its next or previous option.
    pub fn cycle_select(&mut self, forward: bool) -> bool {
        let Some(spec) = self.focused_field() else {
            return false;
        };
        let key = spec.key;
        let value = match &spec.kind {
            FieldKind::Select { options, .. } => {
                cycle_option(options, self.draft.get(key), forward)
            }
            _ => return false,
        };
        self.set_value(key, value);
        true
    }

    fn set_value(&mut self, key: F::Field, value: String) {
        self.draft = self.draft.with_field(key, value);
        if self.draft.is_filled(key) {
            self.highlighted.retain(|k| *k != key);
        }
    }

    pub fn is_highlighted(&self, key: F::Field) -> bool {
        self.highlighted.contains(&key)
    }

    /// Run the gate on the current draft. A rejection highlights the missing
    /// fields and moves focus to the first of them.
    pub fn submit(&mut self, store: &mut Store) -> GateOutcome<F::Field> {
        let outcome = gate::submit(&self.form, &self.draft, store);
        if let GateOutcome::Rejected { missing } = &outcome {
            self.highlighted = missing.clone();
            if let Some(first) = missing.first() {
                if let Some(idx) = self.form.fields().iter().position(|f| f.key == *first) {
                    self.focus_on(idx);
                }
            }
        }
        outcome
    }

    pub fn labels_of(&self, keys: &[F::Field]) -> Vec<&'static str> {
        keys.iter()
            .filter_map(|k| self.form.field(*k))
            .map(|f| f.label)
            .collect()
    }
}

//! Field descriptions shared by the form definitions and the renderers.

/// What kind of control a field is drawn as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line input that refuses insertion past `max_len` characters.
    TextArea { max_len: usize },
    /// Fixed option list headed by a placeholder entry meaning "nothing chosen".
    Select {
        options: Vec<String>,
        placeholder: &'static str,
    },
}

/// Props of one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec<K> {
    pub key: K,
    /// Stable identifier, also used to associate the label with the control.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl<K> FieldSpec<K> {
    pub fn text(key: K, name: &'static str, label: &'static str) -> Self {
        Self {
            key,
            name,
            label,
            kind: FieldKind::Text,
            required: true,
        }
    }

    pub fn textarea(key: K, name: &'static str, label: &'static str, max_len: usize) -> Self {
        Self {
            key,
            name,
            label,
            kind: FieldKind::TextArea { max_len },
            required: true,
        }
    }

    pub fn select(
        key: K,
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        options: Vec<String>,
    ) -> Self {
        Self {
            key,
            name,
            label,
            kind: FieldKind::Select {
                options,
                placeholder,
            },
            required: true,
        }
    }

    /// Character limit enforced while typing, if any.
    pub fn max_len(&self) -> Option<usize> {
        match self.kind {
            FieldKind::TextArea { max_len } => Some(max_len),
            _ => None,
        }
    }

    pub fn is_text_entry(&self) -> bool {
        !matches!(self.kind, FieldKind::Select { .. })
    }
}

/// Next (or previous) value of a select, treating the placeholder as the
/// empty string sitting before the first option.
pub fn cycle_option(options: &[String], current: &str, forward: bool) -> String {
    let slots = options.len() + 1;
    let idx = options
        .iter()
        .position(|o| o == current)
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward {
        (idx + 1) % slots
    } else {
        (idx + slots - 1) % slots
    };
    if next == 0 {
        String::new()
    } else {
        options[next - 1].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<String> {
        vec!["Amapá".into(), "Ceará".into()]
    }

    #[test]
    fn cycling_forward_walks_options_then_placeholder() {
        let o = opts();
        assert_eq!(cycle_option(&o, "", true), "Amapá");
        assert_eq!(cycle_option(&o, "Amapá", true), "Ceará");
        assert_eq!(cycle_option(&o, "Ceará", true), "");
    }

    #[test]
    fn cycling_backward_wraps_to_last_option() {
        let o = opts();
        assert_eq!(cycle_option(&o, "", false), "Ceará");
        assert_eq!(cycle_option(&o, "Amapá", false), "");
    }

    #[test]
    fn unknown_value_is_treated_as_placeholder() {
        assert_eq!(cycle_option(&opts(), "Bahia", true), "Amapá");
    }

    #[test]
    fn empty_option_list_stays_on_placeholder() {
        assert_eq!(cycle_option(&[], "", true), "");
    }

    #[test]
    fn only_textareas_carry_a_limit() {
        assert_eq!(FieldSpec::text(0, "role", "Cargo").max_len(), None);
        assert_eq!(
            FieldSpec::textarea(0, "resume", "Resumo do currículo", 1000).max_len(),
            Some(1000)
        );
    }
}

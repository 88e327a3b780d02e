use super::{Draft, FieldSpec, FormSpec};
use crate::app::route::Route;
use crate::store::{PersonalData, StoreAction};

/// States offered by the `Estado` select unless the config overrides them.
pub const UF_LIST: &[&str] = &[
    "Rio de Janeiro",
    "Minas Gerais",
    "Amapá",
    "Amazonas",
    "São Paulo",
    "Ceará",
    "Distrito Federal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersonalField {
    Name,
    Email,
    Cpf,
    Address,
    City,
    Uf,
}

#[derive(Debug, Clone)]
pub struct PersonalForm {
    fields: Vec<FieldSpec<PersonalField>>,
}

impl PersonalForm {
    /// Build the form with the given `Estado` options. An empty list falls
    /// back to [`UF_LIST`], since a select with only its placeholder could
    /// never be filled.
    pub fn new(uf_options: &[String]) -> Self {
        let uf_options = if uf_options.is_empty() {
            tracing::warn!("no uf_options configured, using the built-in list");
            default_options()
        } else {
            uf_options.to_vec()
        };
        Self {
            fields: vec![
                FieldSpec::text(PersonalField::Name, "name", "Nome"),
                FieldSpec::text(PersonalField::Email, "email", "Email"),
                FieldSpec::text(PersonalField::Cpf, "cpf", "Cpf"),
                FieldSpec::text(PersonalField::Address, "address", "Endereço"),
                FieldSpec::text(PersonalField::City, "city", "Cidade"),
                FieldSpec::select(
                    PersonalField::Uf,
                    "uf",
                    "Estado",
                    "Selecione",
                    uf_options,
                ),
            ],
        }
    }
}

impl Default for PersonalForm {
    fn default() -> Self {
        Self::new(&default_options())
    }
}

fn default_options() -> Vec<String> {
    UF_LIST.iter().map(|s| s.to_string()).collect()
}

impl FormSpec for PersonalForm {
    type Field = PersonalField;
    type Record = PersonalData;

    const HEADING: &'static str = "Informações Pessoais";
    const SUBMIT_LABEL: &'static str = "Próximo";
    const ROUTE: Route = Route::PersonalForm;
    const NEXT: Route = Route::ProfessionalForm;

    fn fields(&self) -> &[FieldSpec<PersonalField>] {
        &self.fields
    }

    fn record(draft: &Draft<PersonalField>) -> PersonalData {
        PersonalData {
            name: draft.get(PersonalField::Name).to_string(),
            email: draft.get(PersonalField::Email).to_string(),
            cpf: draft.get(PersonalField::Cpf).to_string(),
            address: draft.get(PersonalField::Address).to_string(),
            city: draft.get(PersonalField::City).to_string(),
            uf: draft.get(PersonalField::Uf).to_string(),
        }
    }

    fn action(record: PersonalData) -> StoreAction {
        StoreAction::SetPersonalData(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldKind;

    #[test]
    fn every_field_is_required() {
        let form = PersonalForm::default();
        assert_eq!(form.fields().len(), 6);
        assert!(form.fields().iter().all(|f| f.required));
        assert_eq!(form.missing_fields(&Draft::new()).len(), 6);
    }

    #[test]
    fn names_match_record_keys() {
        let names: Vec<_> = PersonalForm::default()
            .fields()
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["name", "email", "cpf", "address", "city", "uf"]);
    }

    #[test]
    fn record_copies_every_draft_value() {
        let draft = Draft::new()
            .with_field(PersonalField::Name, "Nome Teste")
            .with_field(PersonalField::Uf, "Amapá");
        let record = PersonalForm::record(&draft);
        assert_eq!(record.name, "Nome Teste");
        assert_eq!(record.uf, "Amapá");
        assert_eq!(record.email, "");
    }

    #[test]
    fn configured_options_replace_the_default_list() {
        let form = PersonalForm::new(&["Bahia".to_string()]);
        let uf = form.field(PersonalField::Uf).unwrap();
        assert_eq!(
            uf.kind,
            FieldKind::Select {
                options: vec!["Bahia".into()],
                placeholder: "Selecione",
            }
        );
    }

    #[test]
    fn empty_option_list_falls_back_to_built_in_states() {
        let form = PersonalForm::new(&[]);
        let Some(FieldKind::Select { options, .. }) = form.field(PersonalField::Uf).map(|f| &f.kind)
        else {
            panic!("estado should be a select");
        };
        assert_eq!(options.len(), UF_LIST.len());
        assert_eq!(options[0], "Rio de Janeiro");
    }
}

use super::{Draft, FieldSpec, FormSpec};
use crate::app::route::Route;
use crate::store::{ProfessionalData, StoreAction};

pub const RESUME_MAX_LEN: usize = 1000;
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfessionalField {
    Resume,
    Role,
    Description,
}

#[derive(Debug, Clone)]
pub struct ProfessionalForm {
    fields: Vec<FieldSpec<ProfessionalField>>,
}

impl Default for ProfessionalForm {
    fn default() -> Self {
        Self {
            fields: vec![
                FieldSpec::textarea(
                    ProfessionalField::Resume,
                    "resume",
                    "Resumo do currículo",
                    RESUME_MAX_LEN,
                ),
                FieldSpec::text(ProfessionalField::Role, "role", "Cargo"),
                FieldSpec::textarea(
                    ProfessionalField::Description,
                    "description",
                    "Descrição do cargo",
                    DESCRIPTION_MAX_LEN,
                ),
            ],
        }
    }
}

impl FormSpec for ProfessionalForm {
    type Field = ProfessionalField;
    type Record = ProfessionalData;

    const HEADING: &'static str = "Informações Profissionais";
    const SUBMIT_LABEL: &'static str = "Enviar";
    const ROUTE: Route = Route::ProfessionalForm;
    const NEXT: Route = Route::FormDisplay;

    fn fields(&self) -> &[FieldSpec<ProfessionalField>] {
        &self.fields
    }

    fn record(draft: &Draft<ProfessionalField>) -> ProfessionalData {
        ProfessionalData {
            resume: draft.get(ProfessionalField::Resume).to_string(),
            role: draft.get(ProfessionalField::Role).to_string(),
            description: draft.get(ProfessionalField::Description).to_string(),
        }
    }

    fn action(record: ProfessionalData) -> StoreAction {
        StoreAction::SetProfessionalData(record)
    }
}

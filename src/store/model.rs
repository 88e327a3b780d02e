//! Records held by the global store.
//!
//! Field sets are fixed: both records are plain structs, never maps, so a
//! slice can only ever be replaced as a whole. Serialization uses the
//! camelCase shape `{ personalData: {..}, professionalData: {..} }`.

use serde::{Deserialize, Serialize};

/// Personal details collected by the first form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalData {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub address: String,
    pub city: String,
    pub uf: String,
}

/// Professional details collected by the second form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalData {
    pub resume: String,
    pub role: String,
    pub description: String,
}

/// The whole session state: exactly two slices, both always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalState {
    pub personal_data: PersonalData,
    pub professional_data: ProfessionalData,
}

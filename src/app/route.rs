use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Client-side navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    Home,
    PersonalForm,
    ProfessionalForm,
    FormDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route `{0}` (expected one of /, /personal-form, /professional-form, /form-display)")]
pub struct ParseRouteError(pub String);

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::PersonalForm,
        Route::ProfessionalForm,
        Route::FormDisplay,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::PersonalForm => "/personal-form",
            Route::ProfessionalForm => "/professional-form",
            Route::FormDisplay => "/form-display",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Tolerate a trailing slash, but "/" itself stays the home route.
        let path = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        Route::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .ok_or_else(|| ParseRouteError(s.to_string()))
    }
}

impl TryFrom<String> for Route {
    type Error = ParseRouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path().to_string()
    }
}

// src/shared/patch.rs

use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, ValidationError};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior (requires #[serde(default)] on the field):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn map<U, F>(self, f: F) -> PatchField<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }

    pub fn try_map<U, E, F>(self, f: F) -> Result<PatchField<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)?),
        })
    }

    /// For non-nullable columns: `null` is rejected, `Unset` means keep.
    pub fn reject_null(self, field: &'static str) -> Result<PatchField<T>, ValidationError> {
        match self {
            PatchField::Null => Err(ValidationError::Required(field)),
            other => Ok(other),
        }
    }
}

impl<T> PatchField<Vec<T>> {
    /// List columns are never NULL: `null` empties the list.
    pub fn null_as_empty(self) -> PatchField<Vec<T>> {
        match self {
            PatchField::Null => PatchField::Value(Vec::new()),
            other => other,
        }
    }
}

impl PatchField<String> {
    /// Required text: `null` and blank values are rejected, values are trimmed.
    pub fn required_text(self, field: &'static str) -> Result<PatchField<String>, ValidationError> {
        self.reject_null(field)?
            .try_map(|v| validation::required_text(field, &v))
    }

    /// Optional text: blank values clear the column, values are trimmed.
    pub fn optional_text(self) -> PatchField<String> {
        match self {
            PatchField::Value(v) => match validation::optional_text(Some(v)) {
                Some(v) => PatchField::Value(v),
                None => PatchField::Null,
            },
            other => other,
        }
    }

    pub fn email(self, field: &'static str) -> Result<PatchField<String>, ValidationError> {
        self.reject_null(field)?
            .try_map(|v| validation::email(field, &v))
    }
}

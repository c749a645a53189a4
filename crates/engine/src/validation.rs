//! Path consistency of an entry inside the `Type → Category → Subcategory`
//! hierarchy.
//!
//! [`validate_path`] is a pure check: it never touches the database and it
//! reports every violation it finds, attributed to the offending field, so a
//! caller can surface all of them in one round trip.

use std::fmt;

use serde::Serialize;

use crate::{Category, Subcategory};

/// Entry field a [`FieldError`] is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Status,
    WriteType,
    Category,
    Subcategory,
    Amount,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::WriteType => "write_type",
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::Amount => "amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every field error collected during one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message attributed to `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

/// The resolved hierarchy path of a candidate entry.
///
/// A `None` node is one that is not set (or could not be resolved); checks
/// that depend on it are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntryPath<'a> {
    pub write_type: Option<&'a str>,
    pub category: Option<&'a Category>,
    pub subcategory: Option<&'a Subcategory>,
}

/// Checks that the category belongs to the type and the subcategory belongs
/// to the category. Both checks always run.
pub fn validate_path(path: &EntryPath<'_>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let (Some(category), Some(write_type)) = (path.category, path.write_type)
        && category.parent_type != write_type
    {
        errors.push(
            Field::Category,
            format!(
                "category '{}' must belong to the selected type '{write_type}'",
                category.name
            ),
        );
    }

    if let (Some(subcategory), Some(category)) = (path.subcategory, path.category)
        && subcategory.parent_category != category.name
    {
        errors.push(
            Field::Subcategory,
            format!(
                "subcategory '{}' must belong to the selected category '{}'",
                subcategory.name, category.name
            ),
        );
    }

    errors.into_result()
}

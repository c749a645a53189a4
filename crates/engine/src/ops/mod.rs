use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod entries;
mod hierarchy;
mod reference;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Trim a label and check it against the column limit.
fn normalize_label(value: &str, label: &str, max_len: usize) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!("{label} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(EngineError::InvalidName(format!(
            "{label} '{trimmed}' is longer than {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_trimmed() {
        assert_eq!(normalize_label("  Income ", "type", 20).unwrap(), "Income");
    }

    #[test]
    fn empty_label_is_rejected() {
        assert_eq!(
            normalize_label("   ", "status", 15),
            Err(EngineError::InvalidName("status must not be empty".to_string()))
        );
    }

    #[test]
    fn label_length_counts_characters() {
        assert!(normalize_label("Зарплата", "category", 8).is_ok());
        assert!(normalize_label("Зарплата!", "category", 8).is_err());
    }

    #[test]
    fn blank_text_becomes_none() {
        assert_eq!(normalize_optional_text(Some("  ")), None);
        assert_eq!(normalize_optional_text(None), None);
        assert_eq!(
            normalize_optional_text(Some(" note ")),
            Some("note".to_string())
        );
    }
}

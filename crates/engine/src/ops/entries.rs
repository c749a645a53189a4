use chrono::Utc;
use sea_orm::{DatabaseTransaction, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    Category, EngineError, Entry, EntryInput, ResultEngine, Subcategory, categories, entries,
    statuses, subcategories,
    validation::{EntryPath, Field, ValidationErrors, validate_path},
    write_types,
};

use super::{Engine, normalize_optional_text, with_tx};

impl Engine {
    /// Return a single entry.
    pub async fn entry(&self, id: Uuid) -> ResultEngine<Entry> {
        let model = entries::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        Entry::try_from(model)
    }

    /// All entries, most recent date first.
    pub async fn list_entries(&self) -> ResultEngine<Vec<Entry>> {
        entries::Entity::find()
            .order_by_desc(entries::Column::Date)
            .order_by_asc(entries::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Entry::try_from)
            .collect()
    }

    /// Validate and persist a new entry.
    ///
    /// Every reference must exist and the category/subcategory must lie on
    /// the path of the selected type; otherwise nothing is written and the
    /// field errors are returned as [`EngineError::Validation`].
    pub async fn create_entry(&self, input: EntryInput) -> ResultEngine<Entry> {
        let input = normalize_input(input);
        with_tx!(self, |db_tx| {
            self.check_entry(&db_tx, &input).await?;

            let entry = Entry::new(input, Utc::now().date_naive());
            entries::ActiveModel::from(&entry).insert(&db_tx).await?;

            tracing::debug!("created entry {}: {entry}", entry.id);
            Ok(entry)
        })
    }

    /// Replace the editable fields of an existing entry.
    ///
    /// Runs the same checks as [`Engine::create_entry`]. When `input.date` is
    /// `None` the stored date is kept.
    pub async fn update_entry(&self, id: Uuid, input: EntryInput) -> ResultEngine<Entry> {
        let input = normalize_input(input);
        with_tx!(self, |db_tx| {
            let current = entries::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;

            self.check_entry(&db_tx, &input).await?;

            let entry = Entry::with_id(id, input, current.date);
            entries::ActiveModel::from(&entry).update(&db_tx).await?;

            tracing::debug!("updated entry {id}: {entry}");
            Ok(entry)
        })
    }

    pub async fn delete_entry(&self, id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let result = entries::Entity::delete_by_id(id).exec(&db_tx).await?;
            if result.rows_affected == 0 {
                return Err(EngineError::KeyNotFound(id.to_string()));
            }

            tracing::debug!("deleted entry {id}");
            Ok(())
        })
    }

    /// Resolve the references of `input` and check path consistency.
    ///
    /// Unknown references are reported on their own field; the path checks
    /// then run on whatever could be resolved.
    async fn check_entry(
        &self,
        db_tx: &DatabaseTransaction,
        input: &EntryInput,
    ) -> ResultEngine<()> {
        let mut errors = ValidationErrors::new();

        if input.status.is_empty() {
            errors.push(Field::Status, "status is required");
        } else if statuses::Entity::find_by_id(input.status.clone())
            .one(db_tx)
            .await?
            .is_none()
        {
            errors.push(Field::Status, format!("unknown status '{}'", input.status));
        }

        let write_type = if input.write_type.is_empty() {
            errors.push(Field::WriteType, "type is required");
            None
        } else {
            let found = write_types::Entity::find_by_id(input.write_type.clone())
                .one(db_tx)
                .await?;
            if found.is_none() {
                errors.push(
                    Field::WriteType,
                    format!("unknown type '{}'", input.write_type),
                );
            }
            found
        };

        let category = if input.category.is_empty() {
            errors.push(Field::Category, "category is required");
            None
        } else {
            let found = categories::Entity::find_by_id(input.category.clone())
                .one(db_tx)
                .await?
                .map(Category::from);
            if found.is_none() {
                errors.push(
                    Field::Category,
                    format!("unknown category '{}'", input.category),
                );
            }
            found
        };

        let subcategory = if input.subcategory.is_empty() {
            errors.push(Field::Subcategory, "subcategory is required");
            None
        } else {
            let found = subcategories::Entity::find_by_id(input.subcategory.clone())
                .one(db_tx)
                .await?
                .map(Subcategory::from);
            if found.is_none() {
                errors.push(
                    Field::Subcategory,
                    format!("unknown subcategory '{}'", input.subcategory),
                );
            }
            found
        };

        let path = EntryPath {
            write_type: write_type.as_ref().map(|model| model.write_type.as_str()),
            category: category.as_ref(),
            subcategory: subcategory.as_ref(),
        };
        if let Err(path_errors) = validate_path(&path) {
            errors.merge(path_errors);
        }

        errors.into_result()?;
        Ok(())
    }
}

fn normalize_input(input: EntryInput) -> EntryInput {
    EntryInput {
        status: input.status.trim().to_string(),
        write_type: input.write_type.trim().to_string(),
        category: input.category.trim().to_string(),
        subcategory: input.subcategory.trim().to_string(),
        comment: normalize_optional_text(input.comment.as_deref()),
        ..input
    }
}

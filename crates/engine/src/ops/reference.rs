//! Flat reference data: statuses and types.

use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, ResultEngine, statuses,
    statuses::STATUS_MAX_LEN,
    write_types::{self, WRITE_TYPE_MAX_LEN},
};

use super::{Engine, normalize_label, with_tx};

impl Engine {
    /// All statuses, ordered by label.
    pub async fn list_statuses(&self) -> ResultEngine<Vec<String>> {
        let statuses = statuses::Entity::find()
            .order_by_asc(statuses::Column::Status)
            .all(&self.database)
            .await?
            .into_iter()
            .map(|model| model.status)
            .collect();
        Ok(statuses)
    }

    /// Register a new status and return its normalized label.
    pub async fn create_status(&self, status: &str) -> ResultEngine<String> {
        let status = normalize_label(status, "status", STATUS_MAX_LEN)?;
        with_tx!(self, |db_tx| {
            if statuses::Entity::find_by_id(status.clone())
                .one(&db_tx)
                .await?
                .is_some()
            {
                return Err(EngineError::ExistingKey(status));
            }

            statuses::ActiveModel {
                status: ActiveValue::Set(status.clone()),
            }
            .insert(&db_tx)
            .await?;

            tracing::debug!("created status {status}");
            Ok(status)
        })
    }

    /// Delete a status. Entries with that status are deleted with it.
    pub async fn delete_status(&self, status: &str) -> ResultEngine<()> {
        let status = status.trim();
        with_tx!(self, |db_tx| {
            let result = statuses::Entity::delete_by_id(status.to_string())
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(EngineError::KeyNotFound(status.to_string()));
            }

            tracing::debug!("deleted status {status}");
            Ok(())
        })
    }

    /// All types, ordered by label.
    pub async fn list_types(&self) -> ResultEngine<Vec<String>> {
        let types = write_types::Entity::find()
            .order_by_asc(write_types::Column::WriteType)
            .all(&self.database)
            .await?
            .into_iter()
            .map(|model| model.write_type)
            .collect();
        Ok(types)
    }

    /// Register a new type and return its normalized label.
    pub async fn create_type(&self, write_type: &str) -> ResultEngine<String> {
        let write_type = normalize_label(write_type, "type", WRITE_TYPE_MAX_LEN)?;
        with_tx!(self, |db_tx| {
            if write_types::Entity::find_by_id(write_type.clone())
                .one(&db_tx)
                .await?
                .is_some()
            {
                return Err(EngineError::ExistingKey(write_type));
            }

            write_types::ActiveModel {
                write_type: ActiveValue::Set(write_type.clone()),
            }
            .insert(&db_tx)
            .await?;

            tracing::debug!("created type {write_type}");
            Ok(write_type)
        })
    }

    /// Delete a type.
    ///
    /// The storage cascades the delete to the type's categories, their
    /// subcategories and every entry referencing any of them.
    pub async fn delete_type(&self, write_type: &str) -> ResultEngine<()> {
        let write_type = write_type.trim();
        with_tx!(self, |db_tx| {
            let result = write_types::Entity::delete_by_id(write_type.to_string())
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(EngineError::KeyNotFound(write_type.to_string()));
            }

            tracing::debug!("deleted type {write_type}");
            Ok(())
        })
    }
}

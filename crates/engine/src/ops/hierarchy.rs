//! The `Type → Category → Subcategory` tree: management and cascading lookups.

use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    Category, EngineError, ResultEngine, Subcategory,
    categories::{self, CATEGORY_MAX_LEN},
    subcategories::{self, SUBCATEGORY_MAX_LEN},
    write_types,
};

use super::{Engine, normalize_label, with_tx};

/// A lookup key counts only when present and non-empty.
fn lookup_key(key: Option<&str>) -> Option<&str> {
    key.filter(|key| !key.is_empty())
}

impl Engine {
    /// Categories whose parent type is `write_type`, ordered by name.
    ///
    /// An absent or empty key, as well as a key no category references,
    /// yields an empty list.
    pub async fn list_categories(&self, write_type: Option<&str>) -> ResultEngine<Vec<Category>> {
        let Some(write_type) = lookup_key(write_type) else {
            return Ok(Vec::new());
        };

        let categories = categories::Entity::find()
            .filter(categories::Column::ParentType.eq(write_type))
            .order_by_asc(categories::Column::Name)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Category::from)
            .collect();
        Ok(categories)
    }

    /// Subcategories whose parent category is `category`, ordered by name.
    ///
    /// Same contract as [`Engine::list_categories`].
    pub async fn list_subcategories(
        &self,
        category: Option<&str>,
    ) -> ResultEngine<Vec<Subcategory>> {
        let Some(category) = lookup_key(category) else {
            return Ok(Vec::new());
        };

        let subcategories = subcategories::Entity::find()
            .filter(subcategories::Column::ParentCategory.eq(category))
            .order_by_asc(subcategories::Column::Name)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Subcategory::from)
            .collect();
        Ok(subcategories)
    }

    pub async fn list_all_categories(&self) -> ResultEngine<Vec<Category>> {
        let categories = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Category::from)
            .collect();
        Ok(categories)
    }

    pub async fn list_all_subcategories(&self) -> ResultEngine<Vec<Subcategory>> {
        let subcategories = subcategories::Entity::find()
            .order_by_asc(subcategories::Column::Name)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Subcategory::from)
            .collect();
        Ok(subcategories)
    }

    /// Add a category under an existing type.
    pub async fn create_category(&self, name: &str, parent_type: &str) -> ResultEngine<Category> {
        let name = normalize_label(name, "category", CATEGORY_MAX_LEN)?;
        let parent_type = parent_type.trim();
        with_tx!(self, |db_tx| {
            if write_types::Entity::find_by_id(parent_type.to_string())
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::KeyNotFound(parent_type.to_string()));
            }
            if categories::Entity::find_by_id(name.clone())
                .one(&db_tx)
                .await?
                .is_some()
            {
                return Err(EngineError::ExistingKey(name));
            }

            let category = Category {
                name,
                parent_type: parent_type.to_string(),
            };
            categories::ActiveModel::from(&category)
                .insert(&db_tx)
                .await?;

            tracing::debug!(
                "created category {} under {}",
                category.name,
                category.parent_type
            );
            Ok(category)
        })
    }

    /// Add a subcategory under an existing category.
    pub async fn create_subcategory(
        &self,
        name: &str,
        parent_category: &str,
    ) -> ResultEngine<Subcategory> {
        let name = normalize_label(name, "subcategory", SUBCATEGORY_MAX_LEN)?;
        let parent_category = parent_category.trim();
        with_tx!(self, |db_tx| {
            if categories::Entity::find_by_id(parent_category.to_string())
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::KeyNotFound(parent_category.to_string()));
            }
            if subcategories::Entity::find_by_id(name.clone())
                .one(&db_tx)
                .await?
                .is_some()
            {
                return Err(EngineError::ExistingKey(name));
            }

            let subcategory = Subcategory {
                name,
                parent_category: parent_category.to_string(),
            };
            subcategories::ActiveModel::from(&subcategory)
                .insert(&db_tx)
                .await?;

            tracing::debug!(
                "created subcategory {} under {}",
                subcategory.name,
                subcategory.parent_category
            );
            Ok(subcategory)
        })
    }

    /// Delete a category together with its subcategories and their entries.
    pub async fn delete_category(&self, name: &str) -> ResultEngine<()> {
        let name = name.trim();
        with_tx!(self, |db_tx| {
            let result = categories::Entity::delete_by_id(name.to_string())
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(EngineError::KeyNotFound(name.to_string()));
            }

            tracing::debug!("deleted category {name}");
            Ok(())
        })
    }

    /// Delete a subcategory together with its entries.
    pub async fn delete_subcategory(&self, name: &str) -> ResultEngine<()> {
        let name = name.trim();
        with_tx!(self, |db_tx| {
            let result = subcategories::Entity::delete_by_id(name.to_string())
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(EngineError::KeyNotFound(name.to_string()));
            }

            tracing::debug!("deleted subcategory {name}");
            Ok(())
        })
    }
}

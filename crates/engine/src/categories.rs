//! Categories, scoped to exactly one type.

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};

/// Maximum length, in characters, of a category name.
pub const CATEGORY_MAX_LEN: usize = 30;

/// A mid-level node of the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub parent_type: String,
}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Self {
            name: model.name,
            parent_type: model.parent_type,
        }
    }
}

impl From<&Category> for ActiveModel {
    fn from(category: &Category) -> Self {
        Self {
            name: ActiveValue::Set(category.name.clone()),
            parent_type: ActiveValue::Set(category.parent_type.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub parent_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::write_types::Entity",
        from = "Column::ParentType",
        to = "super::write_types::Column::WriteType",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    WriteType,
    #[sea_orm(has_many = "super::subcategories::Entity")]
    Subcategories,
    #[sea_orm(has_many = "super::entries::Entity")]
    Entries,
}

impl Related<super::write_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WriteType.def()
    }
}

impl Related<super::subcategories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subcategories.def()
    }
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

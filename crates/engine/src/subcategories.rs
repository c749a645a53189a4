//! Subcategories, the leaves of the hierarchy.

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};

/// Maximum length, in characters, of a subcategory name.
pub const SUBCATEGORY_MAX_LEN: usize = 30;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub name: String,
    pub parent_category: String,
}

impl From<Model> for Subcategory {
    fn from(model: Model) -> Self {
        Self {
            name: model.name,
            parent_category: model.parent_category,
        }
    }
}

impl From<&Subcategory> for ActiveModel {
    fn from(subcategory: &Subcategory) -> Self {
        Self {
            name: ActiveValue::Set(subcategory.name.clone()),
            parent_category: ActiveValue::Set(subcategory.parent_category.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subcategories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub parent_category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::ParentCategory",
        to = "super::categories::Column::Name",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::entries::Entity")]
    Entries,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

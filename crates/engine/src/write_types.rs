//! Entry types, the root of the `Type → Category → Subcategory` hierarchy.

use sea_orm::entity::prelude::*;

/// Maximum length, in characters, of a type label.
pub const WRITE_TYPE_MAX_LEN: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "write_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub write_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::categories::Entity")]
    Categories,
    #[sea_orm(has_many = "super::entries::Entity")]
    Entries,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

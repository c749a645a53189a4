//! The module contains the `Entry` type, a single cash-flow record.
//!
//! Income and expenses are both represented by `Entry`; the direction is
//! carried by its type (e.g. "Income", "Expense") rather than by the sign of
//! the amount.
use core::fmt;

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Amount, EngineError};

/// A movement of funds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub status: String,
    pub write_type: String,
    pub category: String,
    pub subcategory: String,
    pub amount: Amount,
    pub comment: Option<String>,
}

impl Entry {
    /// Builds a new entry with a random id. A missing date falls back to
    /// `default_date`.
    pub fn new(input: EntryInput, default_date: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), input, default_date)
    }

    pub(crate) fn with_id(id: Uuid, input: EntryInput, default_date: NaiveDate) -> Self {
        Self {
            id,
            date: input.date.unwrap_or(default_date),
            status: input.status,
            write_type: input.write_type,
            category: input.category,
            subcategory: input.subcategory,
            amount: input.amount,
            comment: input.comment,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} / {} / {} ({})",
            self.date, self.amount, self.write_type, self.category, self.subcategory, self.status
        )?;
        if let Some(comment) = &self.comment {
            write!(f, " {comment}")?;
        }
        Ok(())
    }
}

/// Editable fields of an entry, shared by create and update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryInput {
    pub date: Option<NaiveDate>,
    pub status: String,
    pub write_type: String,
    pub category: String,
    pub subcategory: String,
    pub amount: Amount,
    pub comment: Option<String>,
}

impl EntryInput {
    #[must_use]
    pub fn new(
        status: impl Into<String>,
        write_type: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            date: None,
            status: status.into(),
            write_type: write_type.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            amount: Amount::ZERO,
            comment: None,
        }
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl TryFrom<Model> for Entry {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            date: model.date,
            status: model.status,
            write_type: model.write_type,
            category: model.category,
            subcategory: model.subcategory,
            amount: Amount::from_minor(model.amount_minor)?,
            comment: model.comment,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    pub status: String,
    pub write_type: String,
    pub category: String,
    pub subcategory: String,
    pub amount_minor: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::statuses::Entity",
        from = "Column::Status",
        to = "super::statuses::Column::Status",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Status,
    #[sea_orm(
        belongs_to = "super::write_types::Entity",
        from = "Column::WriteType",
        to = "super::write_types::Column::WriteType",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    WriteType,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::Category",
        to = "super::categories::Column::Name",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::subcategories::Entity",
        from = "Column::Subcategory",
        to = "super::subcategories::Column::Name",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Subcategory,
}

impl Related<super::statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<super::write_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WriteType.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::subcategories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subcategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Entry> for ActiveModel {
    fn from(entry: &Entry) -> Self {
        Self {
            id: ActiveValue::Set(entry.id),
            date: ActiveValue::Set(entry.date),
            status: ActiveValue::Set(entry.status.clone()),
            write_type: ActiveValue::Set(entry.write_type.clone()),
            category: ActiveValue::Set(entry.category.clone()),
            subcategory: ActiveValue::Set(entry.subcategory.clone()),
            amount_minor: ActiveValue::Set(entry.amount.minor()),
            comment: ActiveValue::Set(entry.comment.clone()),
        }
    }
}

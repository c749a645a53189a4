use serde::{Deserialize, Serialize};

/// Query parameters and rows of the cascading lookups.
pub mod lookup {
    use super::*;

    /// `GET /get-categories/?write_type_id=<type>`
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CategoriesQuery {
        pub write_type_id: Option<String>,
    }

    /// `GET /get-subcategories/?category_id=<category>`
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SubcategoriesQuery {
        pub category_id: Option<String>,
    }

    /// Last value bound to `key`; a repeated key is not an error.
    fn last_value(pairs: &[(String, String)], key: &str) -> Option<String> {
        pairs
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }

    impl CategoriesQuery {
        pub fn from_pairs(pairs: &[(String, String)]) -> Self {
            Self {
                write_type_id: last_value(pairs, "write_type_id"),
            }
        }
    }

    impl SubcategoriesQuery {
        pub fn from_pairs(pairs: &[(String, String)]) -> Self {
            Self {
                category_id: last_value(pairs, "category_id"),
            }
        }
    }

    /// A single lookup row. Lookups return a bare JSON array of these.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct NameView {
        pub name: String,
    }
}

pub mod reference {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct StatusView {
        pub status: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct WriteTypeView {
        pub write_type: String,
    }
}

pub mod category {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategoryView {
        pub name: String,
        pub parent_type: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SubcategoryView {
        pub name: String,
        pub parent_category: String,
    }
}

pub mod entry {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;

    /// Editable fields of an entry, sent on create (`POST /entries`) and on
    /// update (`PUT /entries/{id}`).
    ///
    /// `date` defaults to the current date on create and to the stored date
    /// on update. `amount` is a decimal string or number and defaults to `0`;
    /// it stays raw here so any malformed value is reported by the server as
    /// an `amount` field error.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct EntryFields {
        pub date: Option<NaiveDate>,
        pub status: String,
        pub write_type: String,
        pub category: String,
        pub subcategory: String,
        #[serde(default)]
        pub amount: serde_json::Value,
        pub comment: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EntryView {
        pub id: Uuid,
        pub date: NaiveDate,
        pub status: String,
        pub write_type: String,
        pub category: String,
        pub subcategory: String,
        pub amount: Decimal,
        pub comment: Option<String>,
    }
}

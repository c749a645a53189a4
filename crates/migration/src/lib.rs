pub use sea_orm_migration::prelude::*;

mod m20260301_000001_reference;
mod m20260301_000002_hierarchy;
mod m20260301_000003_entries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_reference::Migration),
            Box::new(m20260301_000002_hierarchy::Migration),
            Box::new(m20260301_000003_entries::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, Database, Statement};

    use super::*;

    async fn table_names(db: &sea_orm::DatabaseConnection) -> Vec<String> {
        let backend = db.get_database_backend();
        let rows = db
            .query_all(Statement::from_string(
                backend,
                "SELECT name FROM sqlite_master WHERE type = 'table' \
                 AND name NOT LIKE 'sqlite_%' AND name != 'seaql_migrations' ORDER BY name;",
            ))
            .await
            .unwrap();
        rows.iter()
            .map(|row| row.try_get::<String>("", "name").unwrap())
            .collect()
    }

    #[tokio::test]
    async fn up_and_down_are_symmetric() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        assert_eq!(
            table_names(&db).await,
            vec![
                "categories",
                "entries",
                "statuses",
                "subcategories",
                "write_types"
            ]
        );

        Migrator::down(&db, None).await.unwrap();
        assert!(table_names(&db).await.is_empty());

        Migrator::up(&db, None).await.unwrap();
        assert_eq!(table_names(&db).await.len(), 5);
    }
}

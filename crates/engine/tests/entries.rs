use chrono::{NaiveDate, Utc};
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

use engine::{Amount, Engine, EngineError, EntryInput, Field};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

/// Income/Salary/Bonus plus Expense/Housing/Rent and one status.
async fn seeded_engine() -> Engine {
    let (engine, _db) = engine_with_db().await;
    engine.create_status("Done").await.unwrap();
    engine.create_type("Income").await.unwrap();
    engine.create_type("Expense").await.unwrap();
    engine.create_category("Salary", "Income").await.unwrap();
    engine.create_category("Housing", "Expense").await.unwrap();
    engine.create_subcategory("Bonus", "Salary").await.unwrap();
    engine.create_subcategory("Rent", "Housing").await.unwrap();
    engine
}

fn amount(raw: &str) -> Amount {
    raw.parse().unwrap()
}

fn validation_errors(err: EngineError) -> engine::ValidationErrors {
    match err {
        EngineError::Validation(errors) => errors,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn consistent_entry_is_persisted() {
    let engine = seeded_engine().await;

    let entry = engine
        .create_entry(
            EntryInput::new("Done", "Income", "Salary", "Bonus")
                .amount(amount("100.000"))
                .comment("  March bonus "),
        )
        .await
        .unwrap();

    assert_eq!(entry.amount.minor(), 100_000);
    assert_eq!(entry.date, Utc::now().date_naive());
    assert_eq!(entry.comment.as_deref(), Some("March bonus"));

    let stored = engine.entry(entry.id).await.unwrap();
    assert_eq!(stored, entry);
}

#[tokio::test]
async fn category_of_other_type_is_rejected_on_category_field() {
    let engine = seeded_engine().await;
    engine.create_category("Freelance", "Expense").await.unwrap();
    engine.create_subcategory("Consulting", "Freelance").await.unwrap();

    let err = engine
        .create_entry(EntryInput::new("Done", "Income", "Freelance", "Consulting"))
        .await
        .unwrap_err();

    let errors = validation_errors(err);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(Field::Category));
    assert!(engine.list_entries().await.unwrap().is_empty());
}

#[tokio::test]
async fn both_path_violations_are_reported() {
    let engine = seeded_engine().await;

    let err = engine
        .create_entry(EntryInput::new("Done", "Income", "Housing", "Bonus"))
        .await
        .unwrap_err();

    let errors = validation_errors(err);
    assert!(errors.contains(Field::Category));
    assert!(errors.contains(Field::Subcategory));
}

#[tokio::test]
async fn unknown_references_are_field_errors() {
    let engine = seeded_engine().await;

    let err = engine
        .create_entry(EntryInput::new("Pending", "Transfer", "Salary", "Nope"))
        .await
        .unwrap_err();

    let errors = validation_errors(err);
    assert!(errors.contains(Field::Status));
    assert!(errors.contains(Field::WriteType));
    assert!(errors.contains(Field::Subcategory));
    // The category exists but no type could be resolved to compare it with.
    assert!(!errors.contains(Field::Category));
}

#[tokio::test]
async fn missing_references_are_required() {
    let engine = seeded_engine().await;

    let err = engine
        .create_entry(EntryInput::new(" ", "", "", ""))
        .await
        .unwrap_err();

    let errors = validation_errors(err);
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(Field::Status), Some("status is required"));
}

#[tokio::test]
async fn update_revalidates_and_keeps_date() {
    let engine = seeded_engine().await;
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

    let entry = engine
        .create_entry(
            EntryInput::new("Done", "Income", "Salary", "Bonus")
                .date(date)
                .amount(amount("10")),
        )
        .await
        .unwrap();

    let updated = engine
        .update_entry(
            entry.id,
            EntryInput::new("Done", "Expense", "Housing", "Rent").amount(amount("-950.5")),
        )
        .await
        .unwrap();
    assert_eq!(updated.id, entry.id);
    assert_eq!(updated.date, date);
    assert_eq!(updated.write_type, "Expense");
    assert_eq!(updated.amount.minor(), -950_500);

    let err = engine
        .update_entry(
            entry.id,
            EntryInput::new("Done", "Income", "Housing", "Rent"),
        )
        .await
        .unwrap_err();
    assert!(validation_errors(err).contains(Field::Category));

    let stored = engine.entry(entry.id).await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn unknown_entry_ids_are_not_found() {
    let engine = seeded_engine().await;
    let id = Uuid::new_v4();

    assert_eq!(
        engine.entry(id).await.unwrap_err(),
        EngineError::KeyNotFound(id.to_string())
    );
    assert_eq!(
        engine
            .update_entry(id, EntryInput::new("Done", "Income", "Salary", "Bonus"))
            .await
            .unwrap_err(),
        EngineError::KeyNotFound(id.to_string())
    );
    assert_eq!(
        engine.delete_entry(id).await.unwrap_err(),
        EngineError::KeyNotFound(id.to_string())
    );
}

#[tokio::test]
async fn entries_list_most_recent_first() {
    let engine = seeded_engine().await;
    for day in [3, 1, 2] {
        engine
            .create_entry(
                EntryInput::new("Done", "Income", "Salary", "Bonus")
                    .date(NaiveDate::from_ymd_opt(2026, 2, day).unwrap()),
            )
            .await
            .unwrap();
    }

    let days: Vec<String> = engine
        .list_entries()
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.date.to_string())
        .collect();
    assert_eq!(days, vec!["2026-02-03", "2026-02-02", "2026-02-01"]);
}

#[tokio::test]
async fn deleting_parents_cascades_to_entries() {
    let engine = seeded_engine().await;
    let income = engine
        .create_entry(EntryInput::new("Done", "Income", "Salary", "Bonus"))
        .await
        .unwrap();
    let expense = engine
        .create_entry(EntryInput::new("Done", "Expense", "Housing", "Rent"))
        .await
        .unwrap();

    engine.delete_type("Income").await.unwrap();
    let remaining = engine.list_entries().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, expense.id);
    assert!(engine.entry(income.id).await.is_err());

    engine.delete_status("Done").await.unwrap();
    assert!(engine.list_entries().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_entry_removes_only_that_entry() {
    let engine = seeded_engine().await;
    let a = engine
        .create_entry(EntryInput::new("Done", "Income", "Salary", "Bonus"))
        .await
        .unwrap();
    let b = engine
        .create_entry(EntryInput::new("Done", "Income", "Salary", "Bonus"))
        .await
        .unwrap();

    engine.delete_entry(a.id).await.unwrap();

    let remaining = engine.list_entries().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b.id);
}

use std::error::Error;

use clap::{Args, Parser, Subcommand};
use engine::{Engine, EngineError};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "cashbook_admin")]
#[command(about = "Admin utilities for Cashbook (statuses, types, categories, subcategories)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./cashbook.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage entry statuses.
    Status(Reference),
    /// Manage entry types.
    Type(Reference),
    /// Manage categories.
    Category(Category),
    /// Manage subcategories.
    Subcategory(Subcategory),
}

#[derive(Args, Debug)]
struct Reference {
    #[command(subcommand)]
    command: ReferenceCommand,
}

#[derive(Subcommand, Debug)]
enum ReferenceCommand {
    Create { label: String },
    /// Delete a label; every entry using it is deleted too.
    Delete { label: String },
    List,
}

#[derive(Args, Debug)]
struct Category {
    #[command(subcommand)]
    command: CategoryCommand,
}

#[derive(Subcommand, Debug)]
enum CategoryCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        parent_type: String,
    },
    /// Delete a category with its subcategories and entries.
    Delete {
        #[arg(long)]
        name: String,
    },
    /// List categories, optionally only those of one type.
    List {
        #[arg(long = "type")]
        parent_type: Option<String>,
    },
}

#[derive(Args, Debug)]
struct Subcategory {
    #[command(subcommand)]
    command: SubcategoryCommand,
}

#[derive(Subcommand, Debug)]
enum SubcategoryCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
    },
    Delete {
        #[arg(long)]
        name: String,
    },
    List {
        #[arg(long)]
        category: Option<String>,
    },
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn run_status(engine: &Engine, command: ReferenceCommand) -> Result<(), EngineError> {
    match command {
        ReferenceCommand::Create { label } => {
            let status = engine.create_status(&label).await?;
            println!("created status: {status}");
        }
        ReferenceCommand::Delete { label } => {
            engine.delete_status(&label).await?;
            println!("deleted status: {label}");
        }
        ReferenceCommand::List => {
            for status in engine.list_statuses().await? {
                println!("{status}");
            }
        }
    }
    Ok(())
}

async fn run_type(engine: &Engine, command: ReferenceCommand) -> Result<(), EngineError> {
    match command {
        ReferenceCommand::Create { label } => {
            let write_type = engine.create_type(&label).await?;
            println!("created type: {write_type}");
        }
        ReferenceCommand::Delete { label } => {
            engine.delete_type(&label).await?;
            println!("deleted type: {label}");
        }
        ReferenceCommand::List => {
            for write_type in engine.list_types().await? {
                println!("{write_type}");
            }
        }
    }
    Ok(())
}

async fn run_category(engine: &Engine, command: CategoryCommand) -> Result<(), EngineError> {
    match command {
        CategoryCommand::Create { name, parent_type } => {
            let category = engine.create_category(&name, &parent_type).await?;
            println!(
                "created category: {} ({})",
                category.name, category.parent_type
            );
        }
        CategoryCommand::Delete { name } => {
            engine.delete_category(&name).await?;
            println!("deleted category: {name}");
        }
        CategoryCommand::List { parent_type } => {
            let categories = match parent_type {
                Some(parent_type) => engine.list_categories(Some(&parent_type)).await?,
                None => engine.list_all_categories().await?,
            };
            for category in categories {
                println!("{}\t{}", category.name, category.parent_type);
            }
        }
    }
    Ok(())
}

async fn run_subcategory(
    engine: &Engine,
    command: SubcategoryCommand,
) -> Result<(), EngineError> {
    match command {
        SubcategoryCommand::Create { name, category } => {
            let subcategory = engine.create_subcategory(&name, &category).await?;
            println!(
                "created subcategory: {} ({})",
                subcategory.name, subcategory.parent_category
            );
        }
        SubcategoryCommand::Delete { name } => {
            engine.delete_subcategory(&name).await?;
            println!("deleted subcategory: {name}");
        }
        SubcategoryCommand::List { category } => {
            let subcategories = match category {
                Some(category) => engine.list_subcategories(Some(&category)).await?,
                None => engine.list_all_subcategories().await?,
            };
            for subcategory in subcategories {
                println!("{}\t{}", subcategory.name, subcategory.parent_category);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    let result = match cli.command {
        Command::Status(Reference { command }) => run_status(&engine, command).await,
        Command::Type(Reference { command }) => run_type(&engine, command).await,
        Command::Category(Category { command }) => run_category(&engine, command).await,
        Command::Subcategory(Subcategory { command }) => run_subcategory(&engine, command).await,
    };

    match result {
        Ok(()) => Ok(()),
        Err(err @ (EngineError::KeyNotFound(_) | EngineError::ExistingKey(_))) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err @ EngineError::InvalidName(_)) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(err) => Err(err.into()),
    }
}

use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use trivia_api::{
    CategoryType, Difficulty, NewQuestion, initialize_db,
    stores::{
        CategoryStore, QuestionStore,
        sqlite::{SQLiteCategoryStore, SQLiteQuestionStore},
    },
};

/// Each category with a sample question, its answer and difficulty.
const SAMPLE_QUESTIONS: [(&str, &str, &str, i64); 6] = [
    ("Science", "What is the chemical symbol for gold?", "Au", 2),
    (
        "Art",
        "Which artist painted the ceiling of the Sistine Chapel?",
        "Michelangelo",
        3,
    ),
    ("Geography", "What is the largest ocean on Earth?", "Pacific", 1),
    (
        "History",
        "In which year did the Berlin Wall fall?",
        "1989",
        2,
    ),
    (
        "Entertainment",
        "Which film won the first Academy Award for Best Picture?",
        "Wings",
        4,
    ),
    (
        "Sports",
        "How many players are on the field for one side in a soccer match?",
        "Eleven",
        1,
    ),
];

/// A utility for creating a test database for the trivia REST API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let conn = Arc::new(Mutex::new(conn));
    let category_store = SQLiteCategoryStore::new(conn.clone());
    let question_store = SQLiteQuestionStore::new(conn);

    println!("Creating categories and sample questions...");

    for (category_type, question, answer, difficulty) in SAMPLE_QUESTIONS {
        let category = category_store.create(CategoryType::new(category_type)?)?;

        question_store.create(NewQuestion {
            question: question.to_owned(),
            answer: answer.to_owned(),
            difficulty: Difficulty::new(difficulty)?,
            category_id: category.id,
        })?;
    }

    println!("Success!");

    Ok(())
}

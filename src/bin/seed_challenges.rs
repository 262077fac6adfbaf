//! Seed the stock coding challenges.
//!
//! Wipes the challenges table and inserts the starter set. Run against a
//! fresh deployment or whenever the stock set changes.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use learnflek::{config::CONFIG, db, db::repositories::ChallengeRepository, models::TestCase};

struct Seed {
    title: &'static str,
    description: &'static str,
    difficulty: &'static str,
    base_code: &'static str,
    cases: &'static [(&'static str, &'static str)],
}

const SEEDS: &[Seed] = &[
    Seed {
        title: "Sum of Two Numbers",
        description: "Write a function that takes two numbers as input and returns their sum.",
        difficulty: "Easy",
        base_code: "// Read a and b from stdin\n// Example: const [a, b] = fs.readFileSync(0, 'utf8').split(' ').map(Number);\n// console.log(a + b);",
        cases: &[("1 2", "3"), ("10 20", "30")],
    },
    Seed {
        title: "Check Even or Odd",
        description: "Write a program that reads an integer and prints 'Even' if it is even, and 'Odd' if it is odd.",
        difficulty: "Easy",
        base_code: "// Read n from stdin\n// Example: const n = parseInt(fs.readFileSync(0, 'utf8'));",
        cases: &[("4", "Even"), ("7", "Odd"), ("0", "Even")],
    },
    Seed {
        title: "Max of Three Numbers",
        description: "Read three integers separated by spaces and print the largest one.",
        difficulty: "Easy",
        base_code: "// Example: const nums = fs.readFileSync(0, 'utf8').split(' ').map(Number);",
        cases: &[("5 12 8", "12"), ("-1 -5 -3", "-1"), ("100 100 50", "100")],
    },
    Seed {
        title: "Find String Length",
        description: "Read a string from input and print its length.",
        difficulty: "Easy",
        base_code: "// Example: const str = fs.readFileSync(0, 'utf8').trim();",
        cases: &[("LearnFlek", "9"), ("AI", "2"), ("Antigravity", "11")],
    },
    Seed {
        title: "Leap Year Checker",
        description: "Read a year and print 'true' if it's a leap year, otherwise 'false'.",
        difficulty: "Easy",
        base_code: "// A year is leap if divisible by 4 but not 100, or divisible by 400.",
        cases: &[
            ("2024", "true"),
            ("2023", "false"),
            ("2000", "true"),
            ("1900", "false"),
        ],
    },
    Seed {
        title: "Reverse a String",
        description: "Write a function that reverses the given string.",
        difficulty: "Medium",
        base_code: "function reverseString(str) {\n  // Write your code here\n}",
        cases: &[("hello", "olleh"), ("world", "dlrow")],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("info"))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::create_pool(&CONFIG.database).await?;

    db::run_migrations(&pool).await?;

    ChallengeRepository::delete_all(&pool).await?;

    for seed in SEEDS {
        let cases: Vec<TestCase> = seed
            .cases
            .iter()
            .map(|(input, expected)| TestCase {
                input: (*input).to_string(),
                expected_output: (*expected).to_string(),
            })
            .collect();

        let challenge = ChallengeRepository::create(
            &pool,
            seed.title,
            seed.description,
            seed.difficulty,
            Some(seed.base_code),
            &cases,
        )
        .await?;

        tracing::info!(title = %challenge.title, id = %challenge.id, "Seeded challenge");
    }

    tracing::info!("Challenges seeded successfully");

    Ok(())
}

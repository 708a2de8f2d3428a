//! Built-in question/response pairs written on first initialization.

/// The fixed seed set, in insertion order.
pub const SEED_RECORDS: [(&str, &str); 5] = [
    (
        "What is Streamlit?",
        "Streamlit is an open-source app framework for Machine Learning and Data Science projects.",
    ),
    (
        "What is SQLite?",
        "SQLite is a lightweight database management system that is serverless and self-contained.",
    ),
    (
        "How do I install Python?",
        "You can install Python by downloading it from the official Python website (https://www.python.org).",
    ),
    (
        "What is AI?",
        "AI stands for Artificial Intelligence, the simulation of human intelligence by machines.",
    ),
    (
        "What is the capital of France?",
        "The capital of France is Paris.",
    ),
];

/// Seed set as owned pairs, ready for a batch insert.
pub fn seed_pairs() -> Vec<(String, String)> {
    SEED_RECORDS
        .iter()
        .map(|(q, r)| (q.to_string(), r.to_string()))
        .collect()
}

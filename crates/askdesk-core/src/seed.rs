//! Built-in knowledge base rows, inserted once when the table is empty.

use askdesk_types::knowledge::NewKnowledgeEntry;

/// The default question/answer pairs.
pub fn default_knowledge() -> Vec<NewKnowledgeEntry> {
    vec![
        NewKnowledgeEntry::new(
            "What is Python?",
            "Python is a high-level, interpreted programming language known for its simplicity and readability. It's widely used in web development, data science, AI, and automation.",
        ),
        NewKnowledgeEntry::new(
            "How do I install Python?",
            "You can download Python from python.org or use package managers like pip, conda, or brew. For Windows, download from python.org. For Mac, use 'brew install python'. For Linux, use your package manager.",
        ),
        NewKnowledgeEntry::new(
            "What is Flask?",
            "Flask is a lightweight web framework for Python that makes it easy to build web applications. It's known for its simplicity and flexibility.",
        ),
        NewKnowledgeEntry::new(
            "What is machine learning?",
            "Machine learning is a subset of artificial intelligence that enables computers to learn and make decisions from data without being explicitly programmed for every task.",
        ),
        NewKnowledgeEntry::new(
            "How do I get started with programming?",
            "Start with a beginner-friendly language like Python, practice regularly, build small projects, join coding communities, and don't be afraid to make mistakes - they're part of learning!",
        ),
    ]
}

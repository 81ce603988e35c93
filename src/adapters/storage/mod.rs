//! Storage adapters for quiz state and the advice hand-off.

mod in_memory_quiz_repository;
mod in_memory_result_store;

pub use in_memory_quiz_repository::InMemoryQuizRepository;
pub use in_memory_result_store::InMemorySessionResultStore;

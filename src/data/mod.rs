mod loader;

pub use loader::{load_document, LoadError, DEFAULT_QUIZ_PATH};

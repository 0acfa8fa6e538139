//! Catalog engine: file persistence and the assistant boundary.
mod assistant;
mod json_store;
mod persist;

pub use assistant::{
    AssistantError, AssistantHandle, AssistantSettings, ChatModel, ChatSession, ChatTurn,
    Completion, OpenAiCompatibleModel,
};
pub use json_store::{JsonFileRepository, DEFAULT_DATA_FILE};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};

pub mod http;
pub mod memory;
pub mod model;
pub mod repo;

pub use memory::MemoryNoteStore;
pub use model::{NewNote, Note, NotePatch, Priority};
pub use repo::{NoteStore, PgNoteStore};

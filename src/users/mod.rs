pub mod memory;
pub mod model;
pub mod repo;

pub use memory::MemoryUserStore;
pub use model::{AuthMethod, NewUser, User};
pub use repo::{PgUserStore, UserStore};

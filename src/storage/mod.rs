//! Account persistence for Saffron.

pub mod file;
pub mod memory;
pub mod session;
pub mod traits;

pub use file::FileAccountStore;
pub use memory::MemoryAccountStore;
pub use session::SessionPointer;
pub use traits::AccountStore;

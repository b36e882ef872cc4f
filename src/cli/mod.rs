//! CLI commands for Saffron.
//!
//! This module provides CLI commands for Saffron, organized into:
//! - **Session commands**: signup, login, logout
//! - **Progress commands**: complete (stage completion write path)
//! - **Read commands**: home, vocab, levels

// Session commands
pub mod login;
pub mod logout;
pub mod signup;

// Progress commands
pub mod complete;

// Read commands
pub mod home;
pub mod levels;
pub mod vocab;

pub use complete::CompleteCommand;
pub use home::HomeCommand;
pub use levels::LevelsCommand;
pub use login::LoginCommand;
pub use logout::LogoutCommand;
pub use signup::SignupCommand;
pub use vocab::VocabCommand;

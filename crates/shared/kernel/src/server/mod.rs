pub mod error;
mod health;
pub mod router;
pub mod state;

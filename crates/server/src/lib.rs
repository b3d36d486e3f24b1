pub mod api;
pub mod utils;

mod server;
pub use server::{serve, server};

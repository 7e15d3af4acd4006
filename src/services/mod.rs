pub mod check;
pub mod loading;
pub mod query;
pub mod server;

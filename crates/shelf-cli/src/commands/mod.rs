pub mod auth;
pub mod category;
pub mod dispatch;
pub mod route;
pub mod schema;
pub mod shared;
pub mod shell;

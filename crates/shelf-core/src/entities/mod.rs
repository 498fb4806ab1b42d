//! Entity structs for all Shelf domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be rendered by the CLI, persisted by the session storage, and exported as
//! schemas.

mod category;
mod session;
mod user;

pub use category::{Category, NAME_REQUIRED, NewCategory};
pub use session::{AuthState, Session};
pub use user::User;

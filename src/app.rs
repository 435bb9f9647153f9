//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and wraps the player with the
//! cursor, upload prompt and click regions the terminal view needs.

mod hit;
mod model;

pub use hit::{Hit, HitMap};
pub use model::*;

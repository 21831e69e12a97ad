// handlers/mod.rs - HTTP entry points
//
// The dispatch endpoint carries every record operation; the remaining
// routes are public service metadata.

pub mod graphql; // POST /graphql - operation dispatch
pub mod health;  // GET / and GET /health

pub use graphql::graphql_post;
pub use health::{health, root};

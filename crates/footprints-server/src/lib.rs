//! Footprints Service
//!
//! An authenticated HTTP service exposing user-authored footprint records,
//! each owning an ordered list of embedded comments.
//!
//! ## Consistency model
//!
//! - A footprint is a parent aggregate owned by the principal that created
//!   it; `author` is set from the authenticated principal at creation and is
//!   immutable thereafter
//! - Comments are embedded in their parent and mutated only through atomic
//!   whole-aggregate operations, so nested mutations never interleave
//! - Responses hydrate `author` references into full principal records
//!   without ever writing the joined data back
//!
//! ## API Endpoints
//!
//! ### Public
//! - `GET /health` - Liveness check
//! - `GET /ready` - Readiness check with aggregate count
//!
//! ### Protected (bearer credential required)
//! - `GET /footprints` - List all footprints, newest first
//! - `POST /footprints` - Create a footprint
//! - `GET /footprints/{id}` - Fetch one footprint
//! - `PUT /footprints/{id}` - Update a footprint (owner only)
//! - `DELETE /footprints/{id}` - Delete a footprint (owner only)
//! - `POST /footprints/{id}/comments` - Append a comment
//! - `PUT /footprints/{id}/comments/{comment_id}` - Update a comment's text
//! - `DELETE /footprints/{id}/comments/{comment_id}` - Remove a comment

pub mod api;
pub mod model;
pub mod storage;

pub use api::create_router;
pub use api::handlers::{AppState, CommentOwnership, ServiceConfig};
pub use storage::{FootprintStore, MemoryStore};

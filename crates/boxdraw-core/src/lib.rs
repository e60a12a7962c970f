//! boxdraw core library
//!
//! Platform-agnostic state and persistence for a drag-to-draw surface that
//! stamps boxes and circles.

pub mod session;
pub mod shapes;
pub mod state;
pub mod storage;

pub use session::DrawSession;
pub use shapes::{ParseShapeKindError, ShapeCollection, ShapeKind, ShapeStyle, Translate};
pub use state::{reduce, Command, DrawState};
pub use storage::{DrawsStore, MemoryStorage, Storage, StorageError, StorageResult, DRAWS_KEY};

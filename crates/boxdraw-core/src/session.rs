//! Command dispatch for a drawing session.
//!
//! A [`DrawSession`] owns the [`DrawState`], feeds commands through the
//! reducer one at a time, and carries out `PersistRequest` against the
//! persistence slot.

use crate::shapes::{ShapeCollection, ShapeKind};
use crate::state::{reduce, Command, DrawState};
use crate::storage::{DrawsStore, Storage, StorageResult};
use kurbo::Point;

/// A drawing surface's state plus the slot it persists to.
pub struct DrawSession<S: Storage> {
    state: DrawState,
    store: DrawsStore<S>,
}

impl<S: Storage> DrawSession<S> {
    /// Start a session, restoring shapes saved by a previous one.
    ///
    /// This is the only place stored shapes are read. An empty slot leaves
    /// the initial empty collection; unreadable data is returned as an error
    /// and the caller decides whether to start fresh.
    pub fn hydrate(store: DrawsStore<S>) -> StorageResult<Self> {
        let mut session = Self {
            state: DrawState::new(),
            store,
        };

        match session.store.load()? {
            Some(draws) => {
                log::info!(
                    "Restored {} boxes and {} circles from '{}'",
                    draws.boxes.len(),
                    draws.circles.len(),
                    session.store.key()
                );
                session.dispatch(&Command::LoadStored { draws });
            }
            None => log::info!("No stored shapes under '{}'", session.store.key()),
        }

        Ok(session)
    }

    /// Apply one command.
    ///
    /// Writes for `PersistRequest` are fire-and-forget: a failure is logged
    /// and the in-memory state stays authoritative.
    pub fn dispatch(&mut self, command: &Command) {
        log::debug!("Dispatching {:?}", command);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, command);

        if let Command::PersistRequest = command {
            self.persist();
        }
    }

    fn persist(&self) {
        match self.store.save(&self.state.draws) {
            Ok(()) => log::debug!("Saved {} shapes", self.state.draws.len()),
            Err(e) => log::error!("Failed to save shapes: {}", e),
        }
    }

    /// Pointer pressed on the surface.
    pub fn begin_drag(&mut self, point: Point) {
        self.dispatch(&Command::BeginDrag { point });
    }

    /// Pointer released on the surface. Stamps a shape and persists.
    pub fn end_drag(&mut self, point: Point) {
        self.dispatch(&Command::EndDrag { point });
        self.dispatch(&Command::PersistRequest);
    }

    /// Pick the kind of shape the next drag produces.
    pub fn set_draw_type(&mut self, kind: ShapeKind) {
        self.dispatch(&Command::SetDrawType { kind });
    }

    /// Remove all shapes and persist the empty collection.
    pub fn clear_all(&mut self) {
        self.dispatch(&Command::ClearAll);
        self.dispatch(&Command::PersistRequest);
    }

    /// Current state.
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Shapes drawn so far.
    pub fn draws(&self) -> &ShapeCollection {
        &self.state.draws
    }

    /// Kind of shape the next drag produces.
    pub fn draw_type(&self) -> ShapeKind {
        self.state.draw_type
    }

    /// The persistence slot this session writes to.
    pub fn store(&self) -> &DrawsStore<S> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError, DRAWS_KEY};
    use std::sync::Arc;

    /// Storage whose writes always fail.
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Io("read-only".to_string()))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Io("read-only".to_string()))
        }
    }

    fn new_session(storage: &Arc<MemoryStorage>) -> DrawSession<MemoryStorage> {
        DrawSession::hydrate(DrawsStore::new(storage.clone())).unwrap()
    }

    #[test]
    fn test_hydrate_empty_slot() {
        let storage = Arc::new(MemoryStorage::new());
        let session = new_session(&storage);

        assert_eq!(session.state(), &DrawState::new());
        // Hydration alone never writes.
        assert_eq!(storage.get(DRAWS_KEY).unwrap(), None);
    }

    #[test]
    fn test_hydrate_from_empty_collection() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(DRAWS_KEY, r#"{"boxes":[],"circles":[]}"#).unwrap();

        let session = new_session(&storage);
        assert_eq!(session.state(), &DrawState::new());
    }

    #[test]
    fn test_hydrate_error_propagates() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(DRAWS_KEY, "{").unwrap();

        let result = DrawSession::hydrate(DrawsStore::new(storage));
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_end_drag_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = new_session(&storage);

        session.begin_drag(Point::new(0.0, 0.0));
        // Nothing written mid-drag.
        assert_eq!(storage.get(DRAWS_KEY).unwrap(), None);

        session.end_drag(Point::new(40.0, 20.0));
        let saved = session.store().load().unwrap();
        assert_eq!(saved.as_ref(), Some(session.draws()));
        assert_eq!(session.draws().boxes.len(), 1);
    }

    #[test]
    fn test_set_draw_type_does_not_persist() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = new_session(&storage);

        session.set_draw_type(ShapeKind::Circle);
        assert_eq!(session.draw_type(), ShapeKind::Circle);
        assert_eq!(storage.get(DRAWS_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_all_persists_empty() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = new_session(&storage);

        session.begin_drag(Point::new(0.0, 0.0));
        session.end_drag(Point::new(10.0, 10.0));
        session.clear_all();

        assert!(session.draws().is_empty());
        assert_eq!(
            storage.get(DRAWS_KEY).unwrap().as_deref(),
            Some(r#"{"boxes":[],"circles":[]}"#)
        );
    }

    #[test]
    fn test_shapes_survive_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = new_session(&storage);

        session.begin_drag(Point::new(80.0, 80.0));
        session.end_drag(Point::new(20.0, 30.0));
        session.set_draw_type(ShapeKind::Circle);
        session.begin_drag(Point::new(10.0, 10.0));
        session.end_drag(Point::new(60.0, 40.0));
        let drawn = session.draws().clone();

        let reloaded = new_session(&storage);
        assert_eq!(reloaded.draws(), &drawn);
        // Only shapes are persisted; the selected kind starts over.
        assert_eq!(reloaded.draw_type(), ShapeKind::Box);
        assert_eq!(reloaded.state().start, Point::ZERO);
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let store = DrawsStore::new(Arc::new(ReadOnlyStorage));
        let mut session = DrawSession::hydrate(store).unwrap();

        session.begin_drag(Point::new(0.0, 0.0));
        session.end_drag(Point::new(5.0, 5.0));
        assert_eq!(session.draws().boxes.len(), 1);
    }

    #[test]
    fn test_dispatch_decoded_commands() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = new_session(&storage);

        let script = [
            r#"{"type":"set_draw_type","kind":"circle"}"#,
            r#"{"type":"begin_drag","point":{"x":0.0,"y":0.0}}"#,
            r#"{"type":"resize"}"#,
            r#"{"type":"end_drag","point":{"x":30.0,"y":30.0}}"#,
            r#"{"type":"persist_request"}"#,
        ];
        for line in script {
            let command: Command = serde_json::from_str(line).unwrap();
            session.dispatch(&command);
        }

        assert_eq!(session.draws().circles.len(), 1);
        assert_eq!(session.store().load().unwrap().as_ref(), Some(session.draws()));
    }
}

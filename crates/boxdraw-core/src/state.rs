//! Drawing state and the reducer that advances it.

use crate::shapes::{ShapeCollection, ShapeKind, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A command issued by the UI against the drawing state.
///
/// Commands have a JSON form tagged by `type`, so a web front end can post
/// them as text. Tags this crate does not know decode to [`Command::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Pointer pressed at `point`; starts a drag.
    BeginDrag { point: Point },
    /// Pointer released at `point`; stamps a shape of the current draw type.
    EndDrag { point: Point },
    /// Select the kind of shape subsequent drags produce.
    SetDrawType { kind: ShapeKind },
    /// Drop every shape.
    ClearAll,
    /// Replace the shapes with previously persisted ones.
    LoadStored { draws: ShapeCollection },
    /// Write the current shapes to storage. Does not change state.
    PersistRequest,
    /// Anything else. Ignored.
    #[serde(other)]
    Unknown,
}

/// Complete state of the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    /// Where the most recent drag started.
    pub start: Point,
    /// Where the most recent drag ended.
    pub end: Point,
    /// Kind of shape the next completed drag produces.
    pub draw_type: ShapeKind,
    /// Shapes drawn so far.
    pub draws: ShapeCollection,
}

impl Default for DrawState {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawState {
    /// Fresh state: no shapes, drawing boxes.
    pub fn new() -> Self {
        Self {
            start: Point::ZERO,
            end: Point::ZERO,
            draw_type: ShapeKind::default(),
            draws: ShapeCollection::new(),
        }
    }
}

/// Compute the state that follows `state` after `command`.
///
/// Total over every command. A drag in progress is not tracked: a second
/// `BeginDrag` simply moves the start point.
pub fn reduce(mut state: DrawState, command: &Command) -> DrawState {
    match command {
        Command::BeginDrag { point } => {
            state.start = *point;
        }
        Command::EndDrag { point } => {
            let style = ShapeStyle::from_drag(state.start, *point, state.draw_type);
            state.draws.push(style);
            state.end = *point;
        }
        Command::SetDrawType { kind } => {
            state.draw_type = *kind;
        }
        Command::ClearAll => {
            state.draws = ShapeCollection::new();
        }
        Command::LoadStored { draws } => {
            state.draws = draws.clone();
        }
        Command::PersistRequest | Command::Unknown => {}
    }
    state
}

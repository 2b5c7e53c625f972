use crate::domain::board::{ColumnId, MoveInstruction};
use crate::domain::task::TaskId;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Turns drag-and-drop toolkit events into board move instructions
pub trait ReorderSource {
    type Event;

    /// Returns `None` when the drop does not change the board
    fn on_reorder(&self, event: &Self::Event) -> Result<Option<MoveInstruction>>;
}

/// A position inside a droppable area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    pub droppable_id: String,
    pub index: usize,
}

/// Event emitted when a drag completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    pub draggable_id: String,
    pub source: DraggableLocation,
    /// Absent when the card was dropped outside every column
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

/// Maps [`DropResult`] events whose droppable ids are column ids
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnDropAdapter;

impl ReorderSource for ColumnDropAdapter {
    type Event = DropResult;

    fn on_reorder(&self, event: &DropResult) -> Result<Option<MoveInstruction>> {
        let Some(destination) = &event.destination else {
            return Ok(None);
        };

        let mv = MoveInstruction {
            task_id: TaskId::from(event.draggable_id.as_str()),
            source_column: ColumnId::from_str(&event.source.droppable_id)?,
            source_index: event.source.index,
            dest_column: ColumnId::from_str(&destination.droppable_id)?,
            dest_index: destination.index,
        };

        if mv.is_noop() {
            return Ok(None);
        }
        Ok(Some(mv))
    }
}

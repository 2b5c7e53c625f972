pub mod board;
pub mod dnd;
pub mod reducer;
pub mod task;

pub use board::{Applied, Board, Column, ColumnId, MoveInstruction};
pub use dnd::{ColumnDropAdapter, DraggableLocation, DropResult, ReorderSource};
pub use reducer::{reduce, BoardAction};
pub use task::{Assignee, Priority, Task, TaskId};

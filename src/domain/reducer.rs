//! Reducer over board state: an action goes in, the next board comes out.
//!
//! Rejected actions hand back the input board unchanged together with the
//! reason, so callers can log and carry on.

use crate::domain::board::{Applied, Board, ColumnId, MoveInstruction};
use crate::error::Result;

/// A user interaction that changes the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    MoveTask(MoveInstruction),
    AddTask { column: ColumnId, title: String },
}

/// Applies an action to the board
pub fn reduce(mut board: Board, action: &BoardAction) -> (Board, Result<Applied>) {
    let outcome = match action {
        BoardAction::MoveTask(mv) => board.move_task(mv),
        BoardAction::AddTask { column, title } => board.add_task(*column, title).map(Applied::Added),
    };
    (board, outcome)
}

use crate::domain::task::{Assignee, Priority, Task, TaskId};
use crate::error::{MissionControlError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of a kanban column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Backlog,
    InProgress,
    Done,
}

impl ColumnId {
    pub const ALL: [ColumnId; 3] = [ColumnId::Backlog, ColumnId::InProgress, ColumnId::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Display title shown in the column header
    pub fn title(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = MissionControlError;

    fn from_str(s: &str) -> Result<Self> {
        ColumnId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| MissionControlError::UnknownColumn(s.to_string()))
    }
}

/// A kanban column and its ordered tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// A request to move one task to a new board position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveInstruction {
    pub task_id: TaskId,
    pub source_column: ColumnId,
    pub source_index: usize,
    pub dest_column: ColumnId,
    pub dest_index: usize,
}

impl MoveInstruction {
    /// True when the task would land exactly where it already is
    pub fn is_noop(&self) -> bool {
        self.source_column == self.dest_column && self.source_index == self.dest_index
    }
}

/// What a board operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Moved,
    Added(TaskId),
    Unchanged,
}

/// Kanban board state
///
/// Every task lives in exactly one column; column membership is the task's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub next_task_number: u64,
}

impl Board {
    /// Creates a board from the given columns, seeding the id counter past
    /// the highest numeric id already present
    pub fn new(columns: Vec<Column>) -> Self {
        let highest = columns
            .iter()
            .flat_map(|col| col.tasks.iter())
            .filter_map(|task| task.id.number())
            .max()
            .unwrap_or(0);

        Self {
            columns,
            next_task_number: highest + 1,
        }
    }

    /// The board the dashboard starts with
    pub fn with_sample_tasks() -> Self {
        let task = |id: u64, title: &str, assignee, priority, created: &str| {
            Task::new(TaskId::new(id), title.to_string())
                .with_assignee(assignee)
                .with_priority(priority)
                .with_created_at(created)
        };

        Self::new(vec![
            Column::new(ColumnId::Backlog).with_tasks(vec![
                task(1, "Set up Convex backend", Assignee::Agent, Priority::High, "2h ago"),
                task(2, "Design mobile responsive layout", Assignee::Agent, Priority::Medium, "1d ago"),
                task(3, "Add authentication", Assignee::Human, Priority::Low, "2d ago"),
            ]),
            Column::new(ColumnId::InProgress).with_tasks(vec![
                task(4, "Build Mission Control dashboard", Assignee::Agent, Priority::High, "30m ago"),
                task(5, "Connect Clawdbot API", Assignee::Agent, Priority::High, "1h ago"),
            ]),
            Column::new(ColumnId::Done).with_tasks(vec![
                task(6, "Memory flush configuration", Assignee::Agent, Priority::Medium, "3h ago"),
                task(7, "Hybrid search setup", Assignee::Agent, Priority::High, "5h ago"),
                task(8, "Notion sync integration", Assignee::Agent, Priority::High, "2h ago"),
            ]),
        ])
    }

    /// Current columns in display order
    pub fn list_columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> Result<&Column> {
        self.columns
            .iter()
            .find(|col| col.id == id)
            .ok_or_else(|| MissionControlError::UnknownColumn(id.to_string()))
    }

    fn column_mut(&mut self, id: ColumnId) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|col| col.id == id)
            .ok_or_else(|| MissionControlError::UnknownColumn(id.to_string()))
    }

    /// Finds the column and index holding a task
    pub fn position_of(&self, id: &TaskId) -> Option<(ColumnId, usize)> {
        self.columns.iter().find_map(|col| {
            col.tasks
                .iter()
                .position(|task| &task.id == id)
                .map(|index| (col.id, index))
        })
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Generates the next unused task ID
    pub fn next_task_id(&mut self) -> TaskId {
        loop {
            let id = TaskId::new(self.next_task_number);
            self.next_task_number += 1;
            if self.position_of(&id).is_none() {
                return id;
            }
        }
    }

    /// Moves a task to a new position
    ///
    /// The board is only modified once every index and the task id have been
    /// validated, so a rejected move leaves it untouched.
    pub fn move_task(&mut self, mv: &MoveInstruction) -> Result<Applied> {
        let source = self.column(mv.source_column)?;
        let source_len = source.len();

        let found = source.tasks.get(mv.source_index).ok_or_else(|| {
            MissionControlError::IndexOutOfRange {
                column: mv.source_column.to_string(),
                index: mv.source_index,
                len: source_len,
            }
        })?;

        if found.id != mv.task_id {
            return Err(MissionControlError::TaskMismatch {
                expected: mv.task_id.to_string(),
                found: found.id.to_string(),
            });
        }

        if mv.is_noop() {
            return Ok(Applied::Unchanged);
        }

        // Within a column the task is removed before reinsertion
        let (dest_len, max_index) = if mv.source_column == mv.dest_column {
            (source_len, source_len - 1)
        } else {
            let len = self.column(mv.dest_column)?.len();
            (len, len)
        };

        if mv.dest_index > max_index {
            return Err(MissionControlError::IndexOutOfRange {
                column: mv.dest_column.to_string(),
                index: mv.dest_index,
                len: dest_len,
            });
        }

        let task = self
            .column_mut(mv.source_column)?
            .tasks
            .remove(mv.source_index);
        self.column_mut(mv.dest_column)?
            .tasks
            .insert(mv.dest_index, task);

        Ok(Applied::Moved)
    }

    /// Appends a new task to the end of a column
    pub fn add_task(&mut self, column: ColumnId, title: &str) -> Result<TaskId> {
        if title.trim().is_empty() {
            return Err(MissionControlError::EmptyTitle);
        }
        // Resolve the column before consuming an id
        self.column(column)?;

        let id = self.next_task_id();
        let task = Task::new(id.clone(), title.to_string());
        self.column_mut(column)?.tasks.push(task);
        Ok(id)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ColumnId::ALL.into_iter().map(Column::new).collect())
    }
}

//! Task record types and the pure rules around them.
//!
//! Nothing here touches storage; the store composes these pieces.

pub mod dates;
mod error;
mod filter;
mod model;

pub use error::{validate_due_date, validate_title, ValidationError};
pub use filter::{PriorityFilter, StatusFilter, TaskFilter, TaskMatcher};
pub use model::{NewTask, Priority, Task, TaskPatch};

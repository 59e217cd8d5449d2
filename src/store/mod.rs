//! Task store: the authoritative task list and its durable mirror.
//!
//! The whole list is kept in memory, newest first, and written to a
//! single storage key as a JSON array after every mutation. All I/O goes
//! through the ports in [`ServiceContext`], so the store works the same
//! over live, in-memory, recording, and replaying adapters.
//!
//! A failed write does not roll back the in-memory change. The store is
//! then *diverged* until a later write succeeds; see [`TaskStore::save`].

mod error;

pub use error::{StoreError, StoreResult};

use std::collections::HashSet;

use log::{info, warn};

use crate::context::ServiceContext;
use crate::task::dates::is_overdue;
use crate::task::{validate_due_date, validate_title, NewTask, Task, TaskFilter, TaskPatch};

/// Storage key used when none is configured.
pub const DEFAULT_KEY: &str = "taskflow_tasks";

/// How many fresh IDs to try before giving up on a colliding generator.
const MAX_ID_ATTEMPTS: usize = 16;

/// Outcome of [`TaskStore::toggle_complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    /// The task after the flip.
    pub task: Task,
    /// True only for the pending -> completed transition.
    pub just_completed: bool,
}

/// Counts shown alongside the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// All tasks.
    pub total: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Tasks not yet completed.
    pub pending: usize,
    /// Pending tasks whose due date has passed.
    pub overdue: usize,
}

/// Owns the task list for one storage key.
pub struct TaskStore<'a> {
    ctx: &'a ServiceContext,
    key: String,
    tasks: Vec<Task>,
    diverged: bool,
}

impl<'a> TaskStore<'a> {
    /// Loads the list stored under `key`. A key that was never written
    /// yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the key cannot be read and
    /// [`StoreError::Corrupt`] if its contents are not a task list.
    pub fn open(ctx: &'a ServiceContext, key: impl Into<String>) -> StoreResult<Self> {
        let key = key.into();
        let raw = ctx
            .storage
            .get(&key)
            .map_err(|e| StoreError::Storage(format!("key `{key}`: {e}")))?;

        let tasks: Vec<Task> = match raw.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(text) => serde_json::from_str(text)
                .map_err(|e| StoreError::Corrupt(format!("key `{key}`: {e}")))?,
        };

        if let Some(dup) = first_duplicate_id(&tasks) {
            warn!("event=store_open status=warn key={key} duplicate_id={dup}");
        }
        info!("event=store_open status=ok key={key} tasks={}", tasks.len());

        Ok(Self { ctx, key, tasks, diverged: false })
    }

    /// Every task, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True if there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up one task.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// True while the last write failed and storage is behind memory.
    #[must_use]
    pub fn is_diverged(&self) -> bool {
        self.diverged
    }

    /// Creates a task at the head of the list.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] for a blank title or a past due date,
    /// with the list untouched. [`StoreError::Persist`] if the task was
    /// added but could not be saved.
    pub fn add(&mut self, new: NewTask) -> StoreResult<Task> {
        let title = validate_title(&new.title)?;
        if new.due_date.is_some() {
            validate_due_date(new.due_date, self.ctx.clock.today())?;
        }

        let task = Task {
            id: self.fresh_id()?,
            title,
            description: new.description.trim().to_string(),
            priority: new.priority,
            due_date: new.due_date,
            completed: false,
            created_at: self.ctx.clock.now(),
        };
        self.tasks.insert(0, task.clone());
        info!("event=task_add status=ok id={} priority={}", task.id, task.priority);

        self.save()?;
        Ok(task)
    }

    /// Applies the fields present in `patch`. `id` and `created_at` never
    /// change, and an existing due date is only re-validated when the
    /// patch sets a new one.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] or [`StoreError::Validation`] with the
    /// task untouched; [`StoreError::Persist`] if the edit could not be saved.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> StoreResult<Task> {
        let index = self.index_of(id)?;

        let title = patch.title.as_deref().map(validate_title).transpose()?;
        if let Some(Some(due)) = patch.due_date {
            validate_due_date(Some(due), self.ctx.clock.today())?;
        }
        if patch.is_empty() {
            return Ok(self.tasks[index].clone());
        }

        let task = &mut self.tasks[index];
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description.trim().to_string();
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        let task = task.clone();
        info!("event=task_update status=ok id={id}");

        self.save()?;
        Ok(task)
    }

    /// Deletes a task. Returns whether anything was removed; an unknown
    /// ID is a no-op, so calling this twice is harmless.
    ///
    /// # Errors
    ///
    /// [`StoreError::Persist`] if the task was removed but not saved.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        info!("event=task_remove status=ok id={id}");
        self.save()?;
        Ok(true)
    }

    /// Flips the completion flag.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown ID; [`StoreError::Persist`]
    /// if the flip could not be saved.
    pub fn toggle_complete(&mut self, id: &str) -> StoreResult<Toggled> {
        let index = self.index_of(id)?;
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        let toggled = Toggled { task: task.clone(), just_completed: task.completed };
        info!("event=task_toggle status=ok id={id} completed={}", toggled.task.completed);

        self.save()?;
        Ok(toggled)
    }

    /// Deletes every completed task in one write and returns how many went.
    /// The remaining tasks keep their order.
    ///
    /// # Errors
    ///
    /// [`StoreError::Persist`] if the tasks were removed but not saved.
    pub fn clear_completed(&mut self) -> StoreResult<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return Ok(0);
        }
        info!("event=task_clear_completed status=ok removed={removed}");
        self.save()?;
        Ok(removed)
    }

    /// Tasks passing `filter`, in list order. The iterator borrows the
    /// store, never mutates it, and can be cloned to scan again.
    pub fn list<'s>(
        &'s self,
        filter: &TaskFilter,
    ) -> impl Iterator<Item = &'s Task> + Clone + 's {
        let matcher = filter.matcher();
        self.tasks.iter().filter(move |task| matcher.matches(task))
    }

    /// Totals for the whole list.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        let today = self.ctx.clock.today();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
            overdue: self.tasks.iter().filter(|t| is_overdue(t, today)).count(),
        }
    }

    /// Writes the full list to storage. Every mutator calls this; call it
    /// directly to retry after a failed write.
    ///
    /// # Errors
    ///
    /// [`StoreError::Persist`] if the write fails; the store stays diverged.
    pub fn save(&mut self) -> StoreResult<()> {
        let written = serde_json::to_string(&self.tasks)
            .map_err(|e| e.to_string())
            .and_then(|json| self.ctx.storage.set(&self.key, &json).map_err(|e| e.to_string()));

        match written {
            Ok(()) => {
                if self.diverged {
                    info!("event=store_persist status=recovered key={}", self.key);
                }
                self.diverged = false;
                Ok(())
            }
            Err(message) => {
                self.diverged = true;
                warn!(
                    "event=store_persist status=diverged key={} tasks={} error={message}",
                    self.key,
                    self.tasks.len()
                );
                Err(StoreError::Persist(message))
            }
        }
    }

    fn index_of(&self, id: &str) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn fresh_id(&self) -> StoreResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ctx.id_gen.next_id();
            if !id.is_empty() && self.get(&id).is_none() {
                return Ok(id);
            }
            warn!("event=task_add status=retry reason=id_collision id={id}");
        }
        Err(StoreError::DuplicateId(format!(
            "no unused id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }
}

fn first_duplicate_id(tasks: &[Task]) -> Option<&str> {
    let mut seen = HashSet::new();
    tasks.iter().map(|t| t.id.as_str()).find(|id| !seen.insert(*id))
}

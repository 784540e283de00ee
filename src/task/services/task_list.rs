//! Service owning the task list and its commit cycle.

use std::cmp::Reverse;
use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

use super::{IntentOutcome, TaskIntent};
use crate::task::{
    config::StoreConfig,
    domain::{CreatedAt, Deadline, Task, TaskRecord, ValidationError},
    ports::{DeletionConfirmation, PersistenceError, TaskListItem, TaskPersistence, TaskView},
    validation::TaskValidator,
};

/// Service-level errors for task list operations.
#[derive(Debug, Clone, Error)]
pub enum TaskListError {
    /// The candidate task was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Saving or reloading the list failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    /// Every key from the creation instant up to the largest representable
    /// instant is already taken.
    #[error("no free task key at or after {0}")]
    KeysExhausted(CreatedAt),
}

/// Result type for task list service operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The task was removed.
    Removed,
    /// No task had the requested key; the list was committed unchanged.
    NotFound,
    /// The user declined; nothing was changed or persisted.
    Declined,
}

/// Task list orchestration service.
///
/// Owns the ordered list exclusively. Every mutation builds a new list and
/// commits it: the list is saved, read back from persistence with time left
/// recomputed against the clock, and handed to the view. A failed save or
/// reload leaves the in-memory list as it was.
pub struct TaskListService<P, V, C>
where
    P: TaskPersistence,
    V: TaskView,
    C: Clock + Send + Sync,
{
    persistence: Arc<P>,
    view: Arc<V>,
    clock: Arc<C>,
    validator: TaskValidator,
    tasks: Vec<Task>,
}

impl<P, V, C> TaskListService<P, V, C>
where
    P: TaskPersistence,
    V: TaskView,
    C: Clock + Send + Sync,
{
    /// Opens the task list: loads the persisted list and commits it, which
    /// normalises storage and performs the first render.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Persistence`] when the initial load or
    /// commit fails.
    pub fn open(
        persistence: Arc<P>,
        view: Arc<V>,
        clock: Arc<C>,
        config: &StoreConfig,
    ) -> TaskListResult<Self> {
        let mut service = Self {
            persistence,
            view,
            clock,
            validator: TaskValidator::with_config(config.validation.clone()),
            tasks: Vec::new(),
        };
        service.load()?;
        service.commit(service.tasks.clone())?;
        Ok(service)
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given key.
    #[must_use]
    pub fn find(&self, key: CreatedAt) -> Option<&Task> {
        self.tasks.iter().find(|task| task.created_at() == key)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the view items for the current list.
    #[must_use]
    pub fn items(&self) -> Vec<TaskListItem> {
        self.tasks.iter().map(TaskListItem::from_task).collect()
    }

    /// Adds a task created now.
    ///
    /// The candidate is validated against the clock reading. The stored
    /// key is that reading, moved forward by whole milliseconds if another
    /// task already holds it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Validation`] when the candidate is rejected
    /// (the list is left untouched), [`TaskListError::KeysExhausted`] when
    /// no free key remains, or [`TaskListError::Persistence`] when the
    /// commit fails.
    pub fn add(&mut self, description: &str, deadline: Deadline) -> TaskListResult<CreatedAt> {
        let now = CreatedAt::from_datetime(&self.clock.utc());
        if let Err(err) = self.validator.validate(description, deadline, now) {
            debug!(error = %err, "rejected task");
            return Err(err.into());
        }
        let created_at = now
            .first_free(|key| self.find(key).is_some())
            .ok_or(TaskListError::KeysExhausted(now))?;

        let mut list = self.tasks.clone();
        list.push(Task::new(description, created_at, deadline));
        self.commit(list)?;
        debug!(%created_at, "added task");
        Ok(created_at)
    }

    /// Adds a task from raw form values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Validation`] when the deadline cannot be
    /// parsed or the candidate is rejected, or
    /// [`TaskListError::Persistence`] when the commit fails.
    pub fn add_from_input(
        &mut self,
        description: &str,
        raw_deadline: &str,
    ) -> TaskListResult<CreatedAt> {
        let deadline = Deadline::parse_input(raw_deadline)?;
        self.add(description, deadline)
    }

    /// Removes the task with the given key.
    ///
    /// Callers are expected to have obtained the user's confirmation; see
    /// [`Self::remove_with_confirmation`]. The list is committed even when
    /// no task matches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Persistence`] when the commit fails.
    pub fn remove(&mut self, key: CreatedAt) -> TaskListResult<RemovalOutcome> {
        let list: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.created_at() != key)
            .cloned()
            .collect();
        let outcome = if list.len() < self.tasks.len() {
            RemovalOutcome::Removed
        } else {
            RemovalOutcome::NotFound
        };
        self.commit(list)?;
        debug!(%key, ?outcome, "removed task");
        Ok(outcome)
    }

    /// Asks `confirmation` and removes the task only if it agrees.
    ///
    /// Declining is not an error and leaves both the list and storage
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Persistence`] when the commit fails.
    pub fn remove_with_confirmation(
        &mut self,
        key: CreatedAt,
        confirmation: &impl DeletionConfirmation,
    ) -> TaskListResult<RemovalOutcome> {
        if !confirmation.confirm(key) {
            debug!(%key, "deletion declined");
            return Ok(RemovalOutcome::Declined);
        }
        self.remove(key)
    }

    /// Marks the task with the given key as completed.
    ///
    /// Completion is one-way; repeating it changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Persistence`] when the commit fails.
    pub fn complete(&mut self, key: CreatedAt) -> TaskListResult<()> {
        let list = self
            .tasks
            .iter()
            .map(|task| {
                if task.created_at() == key {
                    task.marked_complete()
                } else {
                    task.clone()
                }
            })
            .collect();
        self.commit(list)
    }

    /// Orders newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Persistence`] when the commit fails.
    pub fn sort_by_date(&mut self) -> TaskListResult<()> {
        self.commit_sorted(|list| list.sort_by_key(|task| Reverse(task.created_at())))
    }

    /// Orders completed tasks first, keeping relative order within each
    /// group.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Persistence`] when the commit fails.
    pub fn sort_by_completed(&mut self) -> TaskListResult<()> {
        self.commit_sorted(|list| list.sort_by_key(|task| Reverse(task.completed())))
    }

    /// Orders by least time left; tasks without a deadline go last.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Persistence`] when the commit fails.
    pub fn sort_by_time_left(&mut self) -> TaskListResult<()> {
        self.commit_sorted(|list| list.sort_by_key(Task::time_left))
    }

    /// Reloads the list from persistence, recomputing time left.
    ///
    /// An absent or malformed stored value yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Persistence`] when storage cannot be read;
    /// the in-memory list is unchanged in that case.
    pub fn load(&mut self) -> TaskListResult<()> {
        self.tasks = self.rehydrate()?;
        Ok(())
    }

    /// Routes a user intent to the matching operation.
    ///
    /// # Errors
    ///
    /// Returns the error of the routed operation.
    pub fn dispatch(
        &mut self,
        intent: TaskIntent,
        confirmation: &impl DeletionConfirmation,
    ) -> TaskListResult<IntentOutcome> {
        match intent {
            TaskIntent::Add {
                description,
                deadline,
            } => self
                .add_from_input(&description, &deadline)
                .map(IntentOutcome::Added),
            TaskIntent::Delete(key) => self
                .remove_with_confirmation(key, confirmation)
                .map(IntentOutcome::Removed),
            TaskIntent::Complete(key) => self.complete(key).map(|()| IntentOutcome::Completed),
            TaskIntent::SortByDate => self.sort_by_date().map(|()| IntentOutcome::Sorted),
            TaskIntent::SortByCompleted => {
                self.sort_by_completed().map(|()| IntentOutcome::Sorted)
            }
            TaskIntent::SortByTimeLeft => {
                self.sort_by_time_left().map(|()| IntentOutcome::Sorted)
            }
        }
    }

    fn commit_sorted(&mut self, sort: impl FnOnce(&mut Vec<Task>)) -> TaskListResult<()> {
        let mut list = self.tasks.clone();
        sort(&mut list);
        self.commit(list)
    }

    /// Persists `list`, reloads it from storage, and re-renders.
    ///
    /// When the reload fails after a successful save, the previous list is
    /// written back so storage and memory keep agreeing.
    fn commit(&mut self, list: Vec<Task>) -> TaskListResult<()> {
        let records: Vec<TaskRecord> = list.iter().map(Task::to_record).collect();
        self.persistence.save(&records)?;
        self.tasks = match self.rehydrate() {
            Ok(tasks) => tasks,
            Err(err) => {
                self.restore_previous();
                return Err(err);
            }
        };
        debug!(count = self.tasks.len(), "committed task list");
        self.view.render(&self.items());
        Ok(())
    }

    fn rehydrate(&self) -> TaskListResult<Vec<Task>> {
        let records = self.persistence.load()?.unwrap_or_default();
        let now_millis = self.clock.utc().timestamp_millis();
        Ok(records
            .into_iter()
            .map(|record| Task::from_record(record, now_millis))
            .collect())
    }

    fn restore_previous(&self) {
        let previous: Vec<TaskRecord> = self.tasks.iter().map(Task::to_record).collect();
        if let Err(err) = self.persistence.save(&previous) {
            warn!(error = %err, "failed to restore task list after reload failure");
        }
    }
}

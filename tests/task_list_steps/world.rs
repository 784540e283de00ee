//! Shared world state for task list BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasklist::task::{
    adapters::{clock::ManualClock, html::HtmlTaskView, memory::InMemoryTaskPersistence},
    config::StoreConfig,
    domain::{CreatedAt, Task},
    services::{TaskListError, TaskListResult, TaskListService},
};

/// Service type used by the BDD world.
pub type TestTaskListService =
    TaskListService<InMemoryTaskPersistence, HtmlTaskView, ManualClock>;

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub service: TestTaskListService,
    pub persistence: InMemoryTaskPersistence,
    pub view: HtmlTaskView,
    pub clock: Arc<ManualClock>,
    pub last_add: Option<Result<CreatedAt, TaskListError>>,
}

impl TaskListWorld {
    /// Creates a world over empty in-memory storage.
    ///
    /// # Errors
    ///
    /// Returns the service error if the list cannot be opened.
    pub fn new() -> TaskListResult<Self> {
        let persistence = InMemoryTaskPersistence::new();
        let view = HtmlTaskView::new();
        let clock = Arc::new(ManualClock::new(0));
        let service = open_service(&persistence, &view, &clock)?;
        Ok(Self {
            service,
            persistence,
            view,
            clock,
            last_add: None,
        })
    }

    /// Replaces the service with a fresh one over the same storage.
    ///
    /// # Errors
    ///
    /// Returns the service error if the list cannot be opened.
    pub fn reopen(&mut self) -> TaskListResult<()> {
        self.service = open_service(&self.persistence, &self.view, &self.clock)?;
        Ok(())
    }

    /// Finds the task with the given description.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has that description.
    pub fn task_named(&self, description: &str) -> eyre::Result<&Task> {
        self.service
            .tasks()
            .iter()
            .find(|task| task.description() == description)
            .ok_or_else(|| eyre::eyre!("no task named {description:?} in the list"))
    }
}

fn open_service(
    persistence: &InMemoryTaskPersistence,
    view: &HtmlTaskView,
    clock: &Arc<ManualClock>,
) -> TaskListResult<TestTaskListService> {
    TaskListService::open(
        Arc::new(persistence.clone()),
        Arc::new(view.clone()),
        Arc::clone(clock),
        &StoreConfig::default(),
    )
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::new().expect("in-memory task list should open")
}

//! HTML rendering of the task list.

use minijinja::{Environment, context};
use std::sync::{Arc, RwLock};
use tracing::warn;

use crate::task::ports::{TaskListItem, TaskView};

const TEMPLATE_NAME: &str = "task_list.html";

const TEMPLATE: &str = r#"{% for task in tasks %}<li class="single__task">
  <div class="single__task__info completed__{{ task.completed }}">
    <div class="description">{{ task.description }}</div>
    <div>{{ task.time_left }}</div>
  </div>
  <div class="single__task__btns">
    <button class="delete__btn" data="{{ task.key }}">Delete</button>
    <div class="check-container complete__btn">
      <input type="checkbox" name="done" />
      <span class="checkmark{% if task.completed %} check{% endif %}" data="{{ task.key }}"></span>
    </div>
  </div>
</li>
{% endfor %}"#;

/// Renders list items to `<li>` markup.
///
/// Descriptions are HTML-escaped. Each item carries its key in the `data`
/// attribute of the delete button and the completion checkmark.
///
/// # Errors
///
/// Returns the template error if rendering fails.
pub fn render_markup(items: &[TaskListItem]) -> Result<String, minijinja::Error> {
    let mut environment = Environment::new();
    environment.add_template(TEMPLATE_NAME, TEMPLATE)?;
    environment
        .get_template(TEMPLATE_NAME)?
        .render(context! { tasks => items })
}

/// View adapter keeping the most recently rendered markup.
///
/// Clones share the same buffer, so a host can hand one clone to the
/// service and read the markup from another.
#[derive(Debug, Clone, Default)]
pub struct HtmlTaskView {
    markup: Arc<RwLock<String>>,
}

impl HtmlTaskView {
    /// Creates a view with empty markup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the markup produced by the last render.
    #[must_use]
    pub fn markup(&self) -> String {
        self.markup
            .read()
            .map_or_else(|poisoned| poisoned.into_inner().clone(), |markup| markup.clone())
    }
}

impl TaskView for HtmlTaskView {
    fn render(&self, items: &[TaskListItem]) {
        let rendered = match render_markup(items) {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!(error = %err, "failed to render task list markup");
                return;
            }
        };
        match self.markup.write() {
            Ok(mut markup) => *markup = rendered,
            Err(poisoned) => *poisoned.into_inner() = rendered,
        }
    }
}

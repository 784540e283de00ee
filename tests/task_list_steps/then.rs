//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;
use tasklist::task::{ports::TaskListItem, services::TaskListError};

#[then("the list has {count:usize} task")]
fn list_has_one(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    list_has_count(world, count)
}

#[then("the list has {count:usize} tasks")]
fn list_has_many(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    list_has_count(world, count)
}

fn list_has_count(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.service.len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"task "{description}" is completed"#)]
fn task_is_completed(world: &TaskListWorld, description: String) -> Result<(), eyre::Report> {
    if !world.task_named(&description)?.completed() {
        return Err(eyre::eyre!("expected {description:?} to be completed"));
    }
    Ok(())
}

#[then(r#"task "{description}" is not completed"#)]
fn task_is_not_completed(world: &TaskListWorld, description: String) -> Result<(), eyre::Report> {
    if world.task_named(&description)?.completed() {
        return Err(eyre::eyre!("expected {description:?} to be incomplete"));
    }
    Ok(())
}

#[then(r#"task "{description}" shows no time left"#)]
fn task_shows_no_time_left(
    world: &TaskListWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let label = time_left_label(world, &description)?;
    if !label.is_empty() {
        return Err(eyre::eyre!("expected an empty label, found {label:?}"));
    }
    Ok(())
}

#[then(r#"task "{description}" shows "{label}""#)]
fn task_shows_label(
    world: &TaskListWorld,
    description: String,
    label: String,
) -> Result<(), eyre::Report> {
    let actual = time_left_label(world, &description)?;
    if actual != label {
        return Err(eyre::eyre!("expected label {label:?}, found {actual:?}"));
    }
    Ok(())
}

fn time_left_label(world: &TaskListWorld, description: &str) -> Result<String, eyre::Report> {
    Ok(TaskListItem::from_task(world.task_named(description)?).time_left)
}

#[then(r#"the addition fails with "{message}""#)]
fn addition_fails_with(world: &TaskListWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_add
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task was added in this scenario"))?;

    match result {
        Err(TaskListError::Validation(err)) if err.user_message() == message => Ok(()),
        other => Err(eyre::eyre!(
            "expected validation failure {message:?}, got {other:?}"
        )),
    }
}

#[then(r#"the order is "{order}""#)]
fn order_is(world: &TaskListWorld, order: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = order.split(", ").collect();
    let actual: Vec<&str> = world
        .service
        .tasks()
        .iter()
        .map(|task| task.description())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected order {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the rendered list mentions "{text}""#)]
fn rendered_list_mentions(world: &TaskListWorld, text: String) -> Result<(), eyre::Report> {
    if !world.view.markup().contains(&text) {
        return Err(eyre::eyre!("rendered markup does not mention {text:?}"));
    }
    Ok(())
}

//! When steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklist::task::domain::{CreatedAt, Deadline};

const MINUTE_MS: i64 = 60_000;

#[when(r#"I add a task "{description}" with no deadline"#)]
fn add_without_deadline(world: &mut TaskListWorld, description: String) {
    world.last_add = Some(world.service.add(&description, Deadline::Never));
}

#[when(r#"I add a task "{description}" due at {millis:i64} ms"#)]
fn add_with_deadline(world: &mut TaskListWorld, description: String, millis: i64) {
    world.last_add = Some(world.service.add(&description, Deadline::At(millis)));
}

#[when("I add a task with a description of {length:usize} characters")]
fn add_with_description_length(world: &mut TaskListWorld, length: usize) {
    world.last_add = Some(world.service.add(&"x".repeat(length), Deadline::Never));
}

#[when(r#"I complete task "{description}""#)]
fn complete_task(world: &mut TaskListWorld, description: String) -> Result<(), eyre::Report> {
    let key = world.task_named(&description)?.created_at();
    world
        .service
        .complete(key)
        .wrap_err("complete task in scenario")?;
    Ok(())
}

#[when(r#"I delete task "{description}" and decline"#)]
fn delete_and_decline(world: &mut TaskListWorld, description: String) -> Result<(), eyre::Report> {
    let key = world.task_named(&description)?.created_at();
    world
        .service
        .remove_with_confirmation(key, &|_: CreatedAt| false)
        .wrap_err("decline deletion in scenario")?;
    Ok(())
}

#[when(r#"I delete task "{description}" and confirm"#)]
fn delete_and_confirm(world: &mut TaskListWorld, description: String) -> Result<(), eyre::Report> {
    let key = world.task_named(&description)?.created_at();
    world
        .service
        .remove_with_confirmation(key, &|_: CreatedAt| true)
        .wrap_err("confirm deletion in scenario")?;
    Ok(())
}

#[when("I sort the list by time left")]
fn sort_by_time_left(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    world
        .service
        .sort_by_time_left()
        .wrap_err("sort by time left in scenario")
}

#[when("I sort the list by date")]
fn sort_by_date(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    world
        .service
        .sort_by_date()
        .wrap_err("sort by date in scenario")
}

#[when("{minutes:i64} minutes pass and the list is reloaded")]
fn time_passes_and_reload(world: &mut TaskListWorld, minutes: i64) -> Result<(), eyre::Report> {
    world.clock.advance(minutes * MINUTE_MS);
    world.service.load().wrap_err("reload list in scenario")
}

#[when("the task list is reopened")]
fn reopen(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    world.reopen().wrap_err("reopen task list in scenario")
}

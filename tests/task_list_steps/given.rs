//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklist::task::domain::Deadline;

const MINUTE_MS: i64 = 60_000;

#[given("an empty task list at {millis:i64} ms")]
fn empty_task_list(world: &mut TaskListWorld, millis: i64) -> Result<(), eyre::Report> {
    if !world.service.is_empty() {
        return Err(eyre::eyre!("expected a fresh task list"));
    }
    world.clock.set(millis);
    Ok(())
}

#[given(r#"a task "{description}" was added with no deadline"#)]
fn task_added_without_deadline(
    world: &mut TaskListWorld,
    description: String,
) -> Result<(), eyre::Report> {
    world
        .service
        .add(&description, Deadline::Never)
        .wrap_err("add task without deadline in scenario setup")?;
    Ok(())
}

#[given(r#"a task "{description}" was added due in {minutes:i64} minutes"#)]
fn task_added_with_deadline(
    world: &mut TaskListWorld,
    description: String,
    minutes: i64,
) -> Result<(), eyre::Report> {
    let deadline = Deadline::At(world.clock.now_millis() + minutes * MINUTE_MS);
    world
        .service
        .add(&description, deadline)
        .wrap_err("add task with deadline in scenario setup")?;
    Ok(())
}

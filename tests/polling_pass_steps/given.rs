//! Given steps for polling pass BDD scenarios.

use super::world::{MonitorWorld, scenario_connection};
use modwatch::monitor::domain::ServerRecord;
use modwatch::monitor::ports::FetchError;
use rstest_bdd_macros::given;

fn queue_record(world: &mut MonitorWorld, name: &str) -> Result<(), eyre::Report> {
    world.records.push(ServerRecord::new(
        name,
        [("address".to_owned(), format!("{name}.example.org"))],
    ));
    Ok(())
}

#[given(r#"a configured server "{name}" whose queue has {count:u64} pending messages"#)]
fn a_server_with_pending(
    world: &mut MonitorWorld,
    name: String,
    count: u64,
) -> Result<(), eyre::Report> {
    queue_record(world, &name)?;
    world.fetcher.script(scenario_connection(&name)?, Ok(count));
    Ok(())
}

#[given(r#"a configured server "{name}" whose fetch fails"#)]
fn a_server_whose_fetch_fails(world: &mut MonitorWorld, name: String) -> Result<(), eyre::Report> {
    queue_record(world, &name)?;
    world.fetcher.script(
        scenario_connection(&name)?,
        Err(FetchError::unreachable(
            format!("{name}.example.org"),
            std::io::Error::other("connection refused"),
        )),
    );
    Ok(())
}

#[given("a configuration record with an empty name")]
fn an_empty_name_record(world: &mut MonitorWorld) {
    world.records.push(ServerRecord::new(
        "",
        [("address".to_owned(), "unnamed.example.org".to_owned())],
    ));
}

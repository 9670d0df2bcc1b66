//! Then steps for polling pass BDD scenarios.

use super::world::MonitorWorld;
use modwatch::monitor::domain::{ServerCollection, ServerName};
use rstest_bdd_macros::then;

fn collection(world: &MonitorWorld) -> Result<&ServerCollection, eyre::Report> {
    world
        .collection
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no loaded collection in scenario world"))
}

#[then(r#"the server order is "{order}""#)]
fn the_server_order_is(world: &mut MonitorWorld, order: String) -> Result<(), eyre::Report> {
    let actual = collection(world)?
        .iter()
        .map(|d| d.name().as_str().to_owned())
        .collect::<Vec<_>>()
        .join(", ");
    if actual != order {
        return Err(eyre::eyre!("expected order '{order}', found '{actual}'"));
    }
    Ok(())
}

#[then("every server reports a successful fetch")]
fn every_fetch_succeeded(world: &MonitorWorld) -> Result<(), eyre::Report> {
    let report = world
        .report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no pass report in scenario world"))?;
    let failed = report.failures().count();
    if failed != 0 {
        return Err(eyre::eyre!("expected no failures, found {failed}"));
    }
    Ok(())
}

#[then(r#"the server "{name}" is reported as failed"#)]
fn server_reported_as_failed(world: &MonitorWorld, name: String) -> Result<(), eyre::Report> {
    let report = world
        .report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no pass report in scenario world"))?;
    if !report.failures().any(|(failed, _)| failed.as_str() == name) {
        return Err(eyre::eyre!("expected '{name}' among reported failures"));
    }
    Ok(())
}

#[then(r#"the server "{name}" remains unpopulated"#)]
fn server_remains_unpopulated(world: &mut MonitorWorld, name: String) -> Result<(), eyre::Report> {
    let server_name =
        ServerName::new(&name).map_err(|err| eyre::eyre!("invalid scenario name: {err}"))?;
    let descriptor = collection(world)?
        .find_by_name(&server_name)
        .ok_or_else(|| eyre::eyre!("server '{name}' missing from collection"))?;
    if descriptor.is_populated() {
        return Err(eyre::eyre!("expected '{name}' to stay unpopulated"));
    }
    Ok(())
}

#[then("the collection contains {count:usize} servers")]
fn collection_contains(world: &mut MonitorWorld, count: usize) -> Result<(), eyre::Report> {
    let len = collection(world)?.len();
    if len != count {
        return Err(eyre::eyre!("expected {count} servers, found {len}"));
    }
    Ok(())
}

#[then("{count:usize} records were reported as skipped")]
fn records_reported_skipped(world: &MonitorWorld, count: usize) -> Result<(), eyre::Report> {
    if world.skipped.len() != count {
        return Err(eyre::eyre!(
            "expected {count} skipped records, found {}",
            world.skipped.len()
        ));
    }
    Ok(())
}

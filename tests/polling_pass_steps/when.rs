//! When steps for polling pass BDD scenarios.

use super::world::{MonitorWorld, load_collection, run_pass};
use rstest_bdd_macros::when;

#[when("a polling pass runs")]
fn a_polling_pass_runs(world: &mut MonitorWorld) -> Result<(), eyre::Report> {
    load_collection(world)?;
    run_pass(world)
}

#[when("the configuration is loaded")]
fn the_configuration_is_loaded(world: &mut MonitorWorld) -> Result<(), eyre::Report> {
    load_collection(world)
}

mod common;

use common::SimulationBuilder;
use cpim_core::control::{Command, Controller, Outcome};
use cpim_data::InitialCondition;

#[test]
fn test_start_requires_initialization() {
    let mut controller = Controller::new(SimulationBuilder::new().build());
    assert_eq!(controller.apply(Command::Start), Outcome::Ignored);
    assert!(controller.tick().is_none());
    assert!(controller.simulation.sweep().is_none());
    assert_eq!(controller.simulation.generation(), 0);
}

#[test]
fn test_start_is_idempotent_while_running() {
    let mut controller = Controller::new(
        SimulationBuilder::new()
            .with_initial(InitialCondition::FullUndifferentiated)
            .build(),
    );
    assert_eq!(controller.apply(Command::Start), Outcome::Started);
    assert_eq!(controller.apply(Command::Start), Outcome::Ignored);
    controller.tick().unwrap();
    assert_eq!(controller.simulation.generation(), 1);

    assert_eq!(controller.apply(Command::Stop), Outcome::Stopped);
    assert_eq!(controller.apply(Command::Stop), Outcome::Ignored);
    assert!(controller.tick().is_none());
}

#[test]
fn test_parameter_change_applies_to_next_sweep() {
    let mut controller = Controller::new(
        SimulationBuilder::new()
            .with_size(10, 10)
            .with_rates(0.0, 0.0, 0.0)
            .with_initial(InitialCondition::FullUndifferentiated)
            .build(),
    );
    controller.apply(Command::Start);
    let report = controller.tick().unwrap();
    assert_eq!(report.census.undifferentiated, 100);

    assert_eq!(
        controller.apply(Command::SetDifferentiationRate(1.0)),
        Outcome::ParameterChanged
    );
    let report = controller.tick().unwrap();
    assert!(report.events.differentiations > 0);
    assert!(report.census.up + report.census.down > 0);
}

#[test]
fn test_setters_assign_every_parameter() {
    let mut controller = Controller::new(SimulationBuilder::new().build());
    for command in [
        Command::SetBirthRate(0.3),
        Command::SetDeathRate(0.2),
        Command::SetDifferentiationRate(0.7),
        Command::SetTemperature(2.5),
        Command::SetCoupling(0.4),
        Command::SetField(-0.1),
        Command::SetNeighborhood(2),
    ] {
        assert_eq!(controller.apply(command), Outcome::ParameterChanged);
    }
    let p = controller.simulation.params();
    assert_eq!(p.birth_rate, 0.3);
    assert_eq!(p.death_rate, 0.2);
    assert_eq!(p.differentiation_rate, 0.7);
    assert_eq!(p.temperature, 2.5);
    assert_eq!(p.coupling, 0.4);
    assert_eq!(p.magnetic_field, -0.1);
    assert_eq!(p.neighborhood_radius, 2);
}

#[test]
fn test_init_while_running_resets_generation() {
    let mut controller = Controller::new(
        SimulationBuilder::new()
            .with_initial(InitialCondition::SpinBlock)
            .build(),
    );
    controller.apply(Command::Start);
    controller.tick();
    controller.tick();
    assert_eq!(
        controller.apply(Command::Init(InitialCondition::SingleUndifferentiated)),
        Outcome::Initialized
    );
    assert_eq!(controller.simulation.generation(), 0);
    assert_eq!(controller.simulation.census().occupied, 1);
}

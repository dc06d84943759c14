mod common;

use common::SimulationBuilder;
use cpim_core::control::{Command, Controller, Outcome};
use cpim_data::{InitialCondition, SiteState};

#[test]
fn test_empty_lattice_is_absorbing() {
    let mut sim = SimulationBuilder::new()
        .with_size(20, 20)
        .with_rates(1.0, 0.0, 0.1)
        .build();
    sim.init_sites([]);

    for _ in 0..20 {
        let report = sim.sweep().unwrap();
        assert!(report.extinct);
        assert_eq!(report.census.occupied, 0);
    }
}

#[test]
fn test_certain_death_empties_single_site() {
    let mut sim = SimulationBuilder::new()
        .with_size(1, 1)
        .with_rates(1.0, 1.0, 0.0)
        .with_site(0, 0, SiteState::SpinUp)
        .build();

    let report = sim.sweep().unwrap();
    assert_eq!(report.census.occupied, 0);
    assert!(report.extinct);
    assert_eq!(report.events.deaths, 1);
}

#[test]
fn test_certain_death_wipes_small_population() {
    let mut sim = SimulationBuilder::new()
        .with_size(6, 6)
        .with_rates(0.0, 1.0, 0.0)
        .with_initial(InitialCondition::SingleSpin)
        .build();

    // The lone spin survives only while it goes unvisited.
    let mut extinct = false;
    for _ in 0..200 {
        if sim.sweep().unwrap().extinct {
            extinct = true;
            break;
        }
    }
    assert!(extinct);
}

#[test]
fn test_extinction_disarms_controller() {
    let sim = SimulationBuilder::new()
        .with_size(1, 1)
        .with_rates(0.0, 1.0, 0.0)
        .with_site(0, 0, SiteState::SpinDown)
        .build();
    let mut controller = Controller::new(sim);

    assert_eq!(controller.apply(Command::Start), Outcome::Started);
    let report = controller.tick().unwrap();
    assert!(report.extinct);
    assert!(!controller.is_running());
    assert!(controller.tick().is_none());
    assert_eq!(controller.simulation.generation(), 1);
}

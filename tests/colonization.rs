mod common;

use common::SimulationBuilder;
use cpim_core::engine::Visit;
use cpim_data::SiteState;

#[test]
fn test_birth_copies_neighbor_state() {
    for parent in [SiteState::SpinDown, SiteState::SpinUp, SiteState::Undifferentiated] {
        let mut sim = SimulationBuilder::new()
            .with_size(7, 7)
            .with_rates(1.0, 0.0, 0.0)
            .with_site(3, 3, parent)
            .build();

        // (3, 2) has the parent as one of its four colonization neighbors.
        let mut born = None;
        for _ in 0..200 {
            match sim.visit(3, 2) {
                Visit::Birth(state) => {
                    born = Some(state);
                    break;
                }
                Visit::Unchanged => {}
                other => panic!("unexpected visit outcome {other:?}"),
            }
        }
        assert_eq!(born, Some(parent));
        assert_eq!(sim.lattice().get(3, 2), parent);
        assert_eq!(sim.census().occupied, 2);
    }
}

#[test]
fn test_zero_birth_rate_never_colonizes() {
    let mut sim = SimulationBuilder::new()
        .with_size(7, 7)
        .with_rates(0.0, 0.0, 0.0)
        .with_site(3, 3, SiteState::Undifferentiated)
        .build();

    for _ in 0..100 {
        assert_eq!(sim.visit(3, 2), Visit::Unchanged);
    }
    assert_eq!(sim.census().occupied, 1);
}

#[test]
fn test_vacant_site_without_occupied_neighbors_stays_vacant() {
    let mut sim = SimulationBuilder::new()
        .with_size(9, 9)
        .with_rates(1.0, 0.0, 0.0)
        .with_site(0, 0, SiteState::SpinUp)
        .build();

    for _ in 0..100 {
        assert_eq!(sim.visit(5, 5), Visit::Unchanged);
    }
}

#[test]
fn test_colonization_wraps_across_edges() {
    let mut sim = SimulationBuilder::new()
        .with_size(6, 6)
        .with_rates(1.0, 0.0, 0.0)
        .with_site(5, 0, SiteState::SpinUp)
        .build();

    let mut born = false;
    for _ in 0..200 {
        if sim.visit(0, 0) == Visit::Birth(SiteState::SpinUp) {
            born = true;
            break;
        }
    }
    assert!(born, "West neighbor of (0, 0) is (5, 0) on a torus");
}

mod common;

use common::SimulationBuilder;
use cpim_data::InitialCondition;

fn run(seed: u64, sweeps: usize) -> cpim_core::engine::Simulation {
    let mut sim = SimulationBuilder::new()
        .with_size(40, 30)
        .with_seed(seed)
        .with_rates(0.8, 0.05, 0.2)
        .with_ising(1.5, -1.0)
        .with_initial(InitialCondition::UndifferentiatedBlock)
        .build();
    for _ in 0..sweeps {
        sim.sweep().unwrap();
    }
    sim
}

#[test]
fn test_same_seed_reproduces_lattice() {
    let a = run(2024, 25);
    let b = run(2024, 25);

    assert_eq!(a.generation(), b.generation());
    assert_eq!(a.census(), b.census());
    assert_eq!(a.lattice().cells(), b.lattice().cells(), "Grids should match cell for cell");
}

#[test]
fn test_different_seeds_diverge() {
    let a = run(1, 25);
    let b = run(2, 25);
    assert_ne!(a.lattice().cells(), b.lattice().cells());
}

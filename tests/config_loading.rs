use cpim_core::config::AppConfig;
use cpim_data::InitialCondition;

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = AppConfig::from_toml(
        r#"
        [lattice]
        width = 64
        seed = 7

        [parameters]
        temperature = 2.0
        init_option = 4
        "#,
    )
    .unwrap();

    assert_eq!(config.lattice.width, 64);
    assert_eq!(config.lattice.height, 200);
    assert_eq!(config.lattice.seed, Some(7));
    assert_eq!(config.parameters.temperature, 2.0);
    assert_eq!(config.parameters.coupling, -1.0);
    assert_eq!(config.parameters.init_option, InitialCondition::SpinBlock);
    assert_eq!(config.run.target_fps, 60);
}

#[test]
fn test_invalid_values_rejected() {
    for bad in [
        "[parameters]\nbirth_rate = 1.5",
        "[parameters]\ntemperature = 0.0",
        "[parameters]\nneighborhood_radius = 0",
        "[parameters]\ninit_option = 9",
        "[lattice]\nwidth = 0",
        "[run]\ntarget_fps = 0",
    ] {
        assert!(AppConfig::from_toml(bad).is_err(), "accepted: {bad}");
    }
}

#[test]
fn test_missing_file_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = AppConfig::load_or_default(&path);
    assert_eq!(config, AppConfig::default());
    assert!(path.exists());

    let reloaded = AppConfig::from_toml(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_malformed_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is [not toml").unwrap();
    assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
}

#[test]
fn test_fingerprint_tracks_parameters() {
    let a = AppConfig::default();
    let mut b = AppConfig::default();
    assert_eq!(a.fingerprint(), b.fingerprint());
    b.parameters.coupling = 0.5;
    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint().len(), 64);
}

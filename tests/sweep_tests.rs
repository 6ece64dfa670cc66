use approx::assert_relative_eq;
use blackscholes_lib::{run_sweep, BlackScholes, OptionParams, SweepConfig};

/// Test that the default sweep prices the whole grid and every cell
/// satisfies put-call parity against the shared contract fields
#[test]
fn test_default_sweep_covers_whole_grid() {
    let config = SweepConfig::default();
    let cells = run_sweep(&config).expect("default sweep should run");

    assert_eq!(cells.len(), 21 * 19);

    let discounted_strike = config.strike * (-config.rate * config.maturity).exp();
    for cell in &cells {
        assert_relative_eq!(
            cell.call_price - cell.put_price,
            cell.spot - discounted_strike,
            max_relative = 1e-9,
            epsilon = 1e-9
        );
    }
}

/// Test the monotonicity a price surface must show along each axis
#[test]
fn test_sweep_surface_is_monotonic() {
    let config = SweepConfig::default();
    let cells = run_sweep(&config).expect("default sweep should run");
    let spot_steps = config.spot.steps;

    // Walking the spot axis at the lowest volatility, calls rise and puts fall
    for i in 1..spot_steps {
        assert!(
            cells[i].call_price > cells[i - 1].call_price,
            "call price should increase with spot"
        );
        assert!(
            cells[i].put_price < cells[i - 1].put_price,
            "put price should decrease with spot"
        );
    }

    // Walking the volatility axis at a fixed spot, both sides rise
    for j in 1..config.volatility.steps {
        let above = &cells[j * spot_steps + 5];
        let below = &cells[(j - 1) * spot_steps + 5];
        assert!(
            above.call_price > below.call_price && above.put_price > below.put_price,
            "prices should increase with volatility"
        );
    }
}

/// Test that preset grids produce the advertised densities
#[test]
fn test_presets_produce_expected_densities() {
    let coarse = run_sweep(&SweepConfig::coarse()).expect("coarse sweep should run");
    let fine = run_sweep(&SweepConfig::fine()).expect("fine sweep should run");

    assert_eq!(coarse.len(), 11 * 9);
    assert_eq!(fine.len(), 41 * 37);
}

/// Test that sweep cells agree exactly with direct engine calls
#[test]
fn test_sweep_cells_match_direct_engine() {
    let config = SweepConfig::coarse();
    let cells = run_sweep(&config).expect("coarse sweep should run");

    for index in [0, 7, 42, 98] {
        let cell = &cells[index];
        let params = OptionParams::new(
            cell.spot,
            config.strike,
            config.maturity,
            config.rate,
            cell.volatility,
        )
        .expect("grid points are valid parameters");
        let engine = BlackScholes::new(params);

        assert_eq!(cell.call_price, engine.call_price());
        assert_eq!(cell.put_price, engine.put_price());
    }
}

/// Test CSV export by writing a sweep and reading it back
#[cfg(feature = "serde")]
#[test]
fn test_csv_export_reads_back_identically() {
    use blackscholes_lib::{write_csv, SweepCell};

    let cells = run_sweep(&SweepConfig::coarse()).expect("coarse sweep should run");

    let path = std::env::temp_dir().join("blackscholes_sweep_test.csv");
    let path_str = path.to_str().expect("temp path should be valid UTF-8");
    write_csv(&cells, path_str).expect("CSV export should succeed");

    let mut reader = csv::Reader::from_path(path_str).expect("exported CSV should open");
    let restored: Vec<SweepCell> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("exported CSV should deserialize");

    assert_eq!(restored.len(), cells.len());
    // Float fields round-trip exactly through the shortest-representation writer
    assert_eq!(restored[0], cells[0]);
    assert_eq!(restored[50], cells[50]);
    assert_eq!(restored[98], cells[98]);

    std::fs::remove_file(&path).ok();
}

/// Test that a TOML-defined grid drives the sweep end to end
#[cfg(feature = "serde")]
#[test]
fn test_toml_config_drives_sweep() {
    let config = SweepConfig::from_toml_str(
        r#"
        strike = 100.0
        rate = 0.02

        [spot]
        min = 95.0
        max = 105.0
        steps = 3

        [volatility]
        min = 0.1
        max = 0.3
        steps = 2
        "#,
    )
    .expect("TOML config should parse");

    let cells = run_sweep(&config).expect("TOML-defined sweep should run");
    assert_eq!(cells.len(), 3 * 2);

    let params = OptionParams::new(cells[0].spot, 100.0, 1.0, 0.02, cells[0].volatility)
        .expect("grid corner is a valid parameter set");
    assert_eq!(cells[0].call_price, BlackScholes::new(params).call_price());
}

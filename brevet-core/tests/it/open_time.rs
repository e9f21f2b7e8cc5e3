use crate::helper::*;
use brevet_core::{Error, open_time};

#[test]
fn test_zero_km_control_opens_at_start() {
    init_tracing();
    assert_eq!(open_time(0.0, 200.0, &t0()).unwrap(), t0());
}

#[test]
fn test_200_km_control_opens_after_5h53m() {
    init_tracing();
    assert_eq!(open_time(200.0, 200.0, &t0()).unwrap(), t0() + hm(5, 53));
}

#[test]
fn test_control_in_second_band_uses_both_max_speeds() {
    init_tracing();
    assert_eq!(open_time(250.0, 300.0, &t0()).unwrap(), t0() + hm(7, 27));
}

#[test]
fn test_per_leg_rounding_of_300_km_finish() {
    init_tracing();
    // 5h53m + 3h07.5m, the half minute rounds to even
    assert_eq!(open_time(300.0, 300.0, &t0()).unwrap(), t0() + hm(9, 1));
}

#[test]
fn test_official_finish_open_times() {
    init_tracing();
    let cases = [
        (400.0, hm(12, 8)),
        (600.0, hm(18, 48)),
        (1000.0, hm(33, 5)),
    ];

    for (km, expected) in cases {
        assert_eq!(open_time(km, km, &t0()).unwrap(), t0() + expected, "{km} km");
    }
}

#[test]
fn test_control_beyond_brevet_is_clamped() {
    init_tracing();
    assert_eq!(
        open_time(220.0, 200.0, &t0()).unwrap(),
        open_time(200.0, 200.0, &t0()).unwrap()
    );
}

#[test]
fn test_negative_control_distance_is_rejected() {
    assert!(matches!(
        open_time(-5.0, 200.0, &t0()),
        Err(Error::InvalidControlDistance { .. })
    ));
    assert!(matches!(
        open_time(f64::NAN, 200.0, &t0()),
        Err(Error::InvalidControlDistance { .. })
    ));
}

#[test]
fn test_unofficial_brevet_distance_is_rejected() {
    for brevet_km in [150.0, 250.0, 1200.0, 300.5] {
        assert!(matches!(
            open_time(100.0, brevet_km, &t0()),
            Err(Error::InvalidBrevetDistance { .. })
        ));
    }
}

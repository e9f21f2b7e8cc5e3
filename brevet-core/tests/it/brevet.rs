use crate::helper::*;
use brevet_core::{Brevet, BrevetDistance, ControlTimeCalculator, Error, Rounding};

#[test]
fn test_schedule_is_ordered_by_distance() {
    init_tracing();
    let brevet = Brevet::new(BrevetDistance::Km300, t0());

    let schedule = brevet.schedule([300.0, 0.0, 250.0, 200.0]).unwrap();

    let distances = schedule.iter().map(|c| c.control_km).collect::<Vec<_>>();
    assert_eq!(distances, vec![0.0, 200.0, 250.0, 300.0]);

    assert_eq!(schedule[0].open, t0());
    assert_eq!(schedule[0].close, t0() + hm(1, 0));
    assert_eq!(schedule[1].open, t0() + hm(5, 53));
    assert_eq!(schedule[1].close, t0() + hm(13, 30));
    assert_eq!(schedule[2].open, t0() + hm(7, 27));
    assert_eq!(schedule[3].open, t0() + hm(9, 1));
    assert_eq!(schedule[3].close, t0() + hm(20, 0));
}

#[test]
fn test_control_within_overrun_is_timed_as_finish() {
    let brevet = Brevet::new(BrevetDistance::Km200, t0());

    let control = brevet.control(230.0).unwrap();

    assert_eq!(control.control_km, 230.0);
    assert_eq!(control.open, brevet.finish().open);
    assert_eq!(control.close, brevet.finish().close);
}

#[test]
fn test_control_more_than_20_percent_beyond_brevet_is_rejected() {
    let brevet = Brevet::new(BrevetDistance::Km200, t0());

    assert!(matches!(
        brevet.schedule([0.0, 100.0, 241.0]),
        Err(Error::ControlBeyondBrevet { brevet_km: 200, .. })
    ));
}

#[test]
fn test_invalid_control_fails_the_schedule() {
    let brevet = Brevet::new(BrevetDistance::Km400, t0());

    assert!(matches!(
        brevet.schedule([0.0, -10.0]),
        Err(Error::InvalidControlDistance { .. })
    ));
}

#[test]
fn test_schedule_uses_configured_rounding() {
    let brevet = Brevet::new(BrevetDistance::Km300, t0())
        .with_calculator(ControlTimeCalculator::new(Rounding::EndToEnd));

    assert_eq!(brevet.finish().open, t0() + hm(9, 0));
    assert_eq!(brevet.distance(), BrevetDistance::Km300);
    assert_eq!(*brevet.start(), t0());
}

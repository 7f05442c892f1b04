use crate::prescaler::{Prescaler, FREQUENCY_LADDER, PERIOD_LADDER};
use crate::solver::frequency_compare;
use crate::TimerError;

#[test]
fn frequency_ladder_picks_smallest_divisor_that_fits() {
    for freq_hz in 1..=1000u32 {
        let freq = f64::from(freq_hz);
        let smallest = Prescaler::ALL
            .into_iter()
            .find(|p| frequency_compare(freq, *p).is_some())
            .unwrap();
        assert_eq!(Prescaler::for_frequency(freq), smallest, "{freq_hz} Hz");
    }
}

#[test]
fn frequency_ladder_thresholds() {
    assert_eq!(FREQUENCY_LADDER.map(|(min, _)| min), [123.0, 16.0, 2.0, 1.0]);
    assert_eq!(Prescaler::for_frequency(8_000_000.0), Prescaler::Div1);
    assert_eq!(Prescaler::for_frequency(123.0), Prescaler::Div1);
    assert_eq!(Prescaler::for_frequency(122.0), Prescaler::Div8);
    assert_eq!(Prescaler::for_frequency(16.0), Prescaler::Div8);
    assert_eq!(Prescaler::for_frequency(15.0), Prescaler::Div64);
    assert_eq!(Prescaler::for_frequency(2.0), Prescaler::Div64);
    assert_eq!(Prescaler::for_frequency(1.0), Prescaler::Div256);
}

#[test]
fn fractional_frequency_falls_back_to_div1024() {
    assert_eq!(Prescaler::for_frequency(0.5), Prescaler::Div1024);
    assert_eq!(Prescaler::for_frequency(0.12), Prescaler::Div1024);
    assert_eq!(Prescaler::for_frequency(0.0), Prescaler::Div1024);
}

#[test]
fn period_ladder_thresholds() {
    assert_eq!(
        PERIOD_LADDER.map(|(max, _)| max),
        [0, 65_536, 524_288, 2_097_152]
    );
    assert_eq!(Prescaler::for_period(0), Prescaler::Div1);
    assert_eq!(Prescaler::for_period(1), Prescaler::Div8);
    assert_eq!(Prescaler::for_period(65_536), Prescaler::Div8);
    assert_eq!(Prescaler::for_period(65_537), Prescaler::Div64);
    assert_eq!(Prescaler::for_period(524_288), Prescaler::Div64);
    assert_eq!(Prescaler::for_period(524_289), Prescaler::Div256);
    assert_eq!(Prescaler::for_period(2_097_152), Prescaler::Div256);
    assert_eq!(Prescaler::for_period(2_097_153), Prescaler::Div1024);
    assert_eq!(Prescaler::for_period(8_000_000), Prescaler::Div1024);
}

#[test]
fn ordinals_map_to_divisors() {
    let divisors: Vec<(u8, u32)> = Prescaler::ALL
        .iter()
        .map(|p| (p.ordinal(), p.divisor()))
        .collect();
    assert_eq!(divisors, [(1u8, 1u32), (2, 8), (3, 64), (4, 256), (5, 1024)]);

    for ordinal in 1..=5u8 {
        assert_eq!(u8::from(Prescaler::try_from(ordinal).unwrap()), ordinal);
    }
}

#[test]
fn ordinals_without_divisor_are_rejected() {
    for ordinal in [0u8, 6, 7, 255] {
        assert_eq!(
            Prescaler::try_from(ordinal),
            Err(TimerError::InvalidPrescaler(ordinal))
        );
    }
}

#[test]
fn tick_resolution() {
    let steps = Prescaler::ALL.map(Prescaler::resolution_ns);
    assert_eq!(steps, [125, 1_000, 8_000, 32_000, 128_000]);
}

#[test]
fn next_prescaler_chain() {
    assert_eq!(Prescaler::Div1.next(), Some(Prescaler::Div8));
    assert_eq!(Prescaler::Div256.next(), Some(Prescaler::Div1024));
    assert_eq!(Prescaler::Div1024.next(), None);
}

#[test]
fn displays_divisor() {
    assert_eq!(Prescaler::Div64.to_string(), "64");
}

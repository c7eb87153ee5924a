use crate::attributes::{Accreditation, Attribute, DeliveryMethod, Location, TrainingLevel};
use crate::calculator::{CalculatorNotice, NoticeLevel};
use crate::cost_benefit::QalyScenario;
use crate::error::ModelError;
use crate::scenario::CostInput;
use crate::test_harness::TestCalculator;
use crate::uptake::UptakeNoiseSource;

fn worked_example(calc: &mut TestCalculator) -> &mut TestCalculator {
    calc.select(
        TrainingLevel::Frontline,
        DeliveryMethod::InPerson,
        Accreditation::International,
        Location::StateLevel,
    )
    .cohort(1000)
    .cost(CostInput::Direct(500.0))
}

// ====================================================================
// Bootstrap
// ====================================================================

#[test]
fn fresh_calculator_has_no_results() {
    let calc = TestCalculator::new();
    assert!(calc.latest().is_none());
    assert!(calc.book().is_empty());
    assert_eq!(calc.notice_count(), 0);
    assert_eq!(calc.state().qaly_scenario, QalyScenario::Moderate);
}

// ====================================================================
// Compute
// ====================================================================

#[test]
fn compute_worked_example_end_to_end() {
    let mut calc = TestCalculator::new();
    worked_example(&mut calc).compute();

    let results = calc.latest().expect("results after compute");
    assert!((results.uptake.fraction - 0.886).abs() < 0.001);
    assert!((results.uptake.percent - 88.6).abs() < 0.1);
    assert_eq!(results.scenario.cohort_size, 1000);
    // Frontline: (800k - 250k) × 1000
    assert_eq!(results.cost_benefit.net_benefit, 550_000_000.0);
    assert_eq!(results.wtp.len(), 10);
}

#[test]
fn compute_with_missing_selection_is_rejected() {
    let mut calc = TestCalculator::new();
    {
        let mut draft = calc.draft_mut();
        draft.training_level = Some(TrainingLevel::Advanced);
        draft.delivery_method = Some(DeliveryMethod::Online);
        draft.location = Some(Location::DistrictLevel);
    }
    calc.compute();

    assert!(calc.latest().is_none(), "no partial result");
    let (level, text) = calc.last_notice().unwrap();
    assert_eq!(level, NoticeLevel::Warning);
    assert_eq!(
        text,
        ModelError::MissingSelection(Attribute::Accreditation).to_string()
    );
}

#[test]
fn rejected_compute_keeps_previous_results() {
    let mut calc = TestCalculator::new();
    worked_example(&mut calc).compute();
    let before = calc.latest().cloned();

    calc.cohort(5000).compute();

    assert_eq!(calc.latest().cloned(), before);
    let (_, text) = calc.last_notice().unwrap();
    assert!(text.contains("5000"), "notice should name the value: {text}");
}

#[test]
fn slider_cost_maps_onto_dollars() {
    let mut calc = TestCalculator::new();
    worked_example(&mut calc)
        .cost(CostInput::Slider(250))
        .compute();
    let results = calc.latest().unwrap();
    assert!((results.scenario.cost_per_participant - 1500.0).abs() < 1e-9);
}

#[test]
fn repeated_compute_is_identical_without_noise() {
    let mut calc = TestCalculator::new();
    worked_example(&mut calc).compute();
    let first = calc.latest().cloned().unwrap();
    calc.compute();
    assert_eq!(calc.latest().cloned().unwrap(), first);
}

#[test]
fn seeded_noise_stays_in_band_and_clamped() {
    let mut calc = TestCalculator::with_noise(UptakeNoiseSource::seeded(9, 20.0));
    worked_example(&mut calc);
    for _ in 0..10 {
        calc.compute();
        let uptake = calc.latest().unwrap().uptake;
        assert!((0.0..=100.0).contains(&uptake.percent));
        assert!((uptake.percent - uptake.fraction * 100.0).abs() <= 20.0 + 1e-9);
    }
}

// ====================================================================
// QALY selection
// ====================================================================

#[test]
fn qaly_change_recosts_without_touching_uptake() {
    let mut calc = TestCalculator::new();
    worked_example(&mut calc).compute();
    let before = calc.latest().cloned().unwrap();

    calc.select_qaly(QalyScenario::High);

    let after = calc.latest().unwrap();
    assert_eq!(after.qaly_scenario, QalyScenario::High);
    assert_eq!(after.uptake, before.uptake);
    assert_eq!(after.cost_benefit.net_benefit, before.cost_benefit.net_benefit);
    let ratio = after.cost_benefit.total_qalys / before.cost_benefit.total_qalys;
    assert!((ratio - 0.08 / 0.05).abs() < 1e-9);
}

#[test]
fn qaly_change_before_compute_is_remembered() {
    let mut calc = TestCalculator::new();
    calc.select_qaly(QalyScenario::Low);
    worked_example(&mut calc).compute();
    assert_eq!(calc.latest().unwrap().qaly_scenario, QalyScenario::Low);
}

// ====================================================================
// Notices
// ====================================================================

#[test]
fn external_notices_are_collected() {
    let mut calc = TestCalculator::new();
    calc.notify(CalculatorNotice::error("Export failed"));
    let (level, text) = calc.last_notice().unwrap();
    assert_eq!(level, NoticeLevel::Error);
    assert_eq!(text, "Export failed");
}

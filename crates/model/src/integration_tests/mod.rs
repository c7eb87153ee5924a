//! Integration tests for the calculator using the `TestCalculator` harness.
//!
//! Each test spins up a headless Bevy App with `ModelPlugin` and drives it
//! through the same events the UI sends.

mod calculator_tests;

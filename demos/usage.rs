//! Walkthrough of the lissageo public API.
//!
//! Mirrors the shipped usage notes: basic generation, metrics,
//! validation, frequency-ratio comparison, phase-shift sweep, and a
//! custom configuration.
//!
//! ```text
//! cargo run --example usage
//! ```

use std::f64::consts::{FRAC_PI_2, PI};

use lissageo::curve::{CurveParams, Lissajous};
use lissageo::metrics::{arc_length, bounding_box, symmetry_score};
use lissageo::validate::{
    validate_amplitude_bounds, validate_periodicity, validate_smoothness, AMPLITUDE_TOLERANCE,
    MAX_CURVATURE, PERIODICITY_TOLERANCE,
};
use lissageo::Result;

fn heading(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

fn basic_generation() -> Result<()> {
    heading("Example 1: Basic Lissajous Curve Generation");

    let lissajous = Lissajous::new(CurveParams {
        amplitude_x: 1.0,
        amplitude_y: 1.0,
        frequency_x: 3.0,
        frequency_y: 2.0,
        phase_shift: FRAC_PI_2,
        sample_count: 1000,
    })?;
    let curve = lissajous.generate();
    let bbox = bounding_box(&curve.x, &curve.y)?;

    println!("Generated curve with {} points", curve.len());
    println!("X range: [{:.3}, {:.3}]", bbox.x_min, bbox.x_max);
    println!("Y range: [{:.3}, {:.3}]", bbox.y_min, bbox.y_max);
    println!();
    Ok(())
}

fn calculate_metrics() -> Result<()> {
    heading("Example 2: Calculate Curve Metrics");

    let curve = Lissajous::new(CurveParams {
        amplitude_x: 1.5,
        amplitude_y: 1.0,
        frequency_x: 5.0,
        frequency_y: 4.0,
        phase_shift: 0.0,
        ..CurveParams::default()
    })?
    .generate();

    let length = arc_length(&curve.x, &curve.y)?;
    let bbox = bounding_box(&curve.x, &curve.y)?;
    let symmetry = symmetry_score(&curve.x, &curve.y)?;

    println!("Arc Length: {length:.2} units");
    println!("Bounding Box:");
    println!("  X: [{:.3}, {:.3}]", bbox.x_min, bbox.x_max);
    println!("  Y: [{:.3}, {:.3}]", bbox.y_min, bbox.y_max);
    println!("Symmetry Score: {symmetry:.3} (0=asymmetric, 1=perfectly symmetric)");
    println!();
    Ok(())
}

fn validate_properties() -> Result<()> {
    heading("Example 3: Validate Curve Properties");

    let curve = Lissajous::new(CurveParams {
        amplitude_x: 2.0,
        amplitude_y: 1.5,
        ..CurveParams::default()
    })?
    .generate();

    let amp_valid =
        validate_amplitude_bounds(&curve.x, &curve.y, 2.0, 1.5, AMPLITUDE_TOLERANCE)?;
    println!(
        "Amplitude validation: {}",
        if amp_valid { "PASSED" } else { "FAILED" }
    );

    let smooth_valid = validate_smoothness(&curve.x, &curve.y, MAX_CURVATURE)?;
    println!(
        "Smoothness validation: {}",
        if smooth_valid { "PASSED" } else { "FAILED" }
    );

    let period_valid =
        validate_periodicity(&curve.x, &curve.y, 3.0, 2.0, PERIODICITY_TOLERANCE);
    println!(
        "Periodicity validation: {}",
        if period_valid { "PASSED" } else { "FAILED" }
    );
    println!();
    Ok(())
}

fn compare_ratios() -> Result<()> {
    heading("Example 4: Compare Different Frequency Ratios");

    let configs = [
        (1.0, 1.0, "1:1 (Circle)"),
        (3.0, 2.0, "3:2 (Classic)"),
        (5.0, 4.0, "5:4 (Complex)"),
        (7.0, 5.0, "7:5 (Very Complex)"),
    ];

    println!("{:<20} {:<15} {:<10}", "Ratio", "Arc Length", "Symmetry");
    println!("{}", "-".repeat(45));
    for (frequency_x, frequency_y, name) in configs {
        let curve = Lissajous::new(CurveParams {
            frequency_x,
            frequency_y,
            phase_shift: FRAC_PI_2,
            ..CurveParams::default()
        })?
        .generate();
        let length = arc_length(&curve.x, &curve.y)?;
        let symmetry = symmetry_score(&curve.x, &curve.y)?;
        println!("{name:<20} {length:<15.2} {symmetry:<10.3}");
    }
    println!();
    Ok(())
}

fn phase_shift_effect() -> Result<()> {
    heading("Example 5: Phase Shift Effect");

    let phases = [0.0, PI / 4.0, FRAC_PI_2, 3.0 * PI / 4.0, PI];

    println!(
        "{:<20} {:<20} {:<10}",
        "Phase (radians)", "Phase (degrees)", "Symmetry"
    );
    println!("{}", "-".repeat(50));
    for phase_shift in phases {
        let curve = Lissajous::new(CurveParams {
            phase_shift,
            ..CurveParams::default()
        })?
        .generate();
        let symmetry = symmetry_score(&curve.x, &curve.y)?;
        println!(
            "{phase_shift:<20.3} {:<20.1} {symmetry:<10.3}",
            phase_shift.to_degrees()
        );
    }
    println!();
    Ok(())
}

fn custom_configuration() -> Result<()> {
    heading("Example 6: Custom Configuration");

    let lissajous = Lissajous::new(CurveParams {
        amplitude_x: 2.5,
        amplitude_y: 1.8,
        frequency_x: 7.0,
        frequency_y: 5.0,
        phase_shift: PI / 3.0,
        sample_count: 2000,
    })?;
    let params = lissajous.params();

    println!("Custom Lissajous Curve Configuration:");
    println!("  Amplitude: ({}, {})", params.amplitude_x, params.amplitude_y);
    println!("  Frequency: ({}, {})", params.frequency_x, params.frequency_y);
    println!(
        "  Phase: {:.3} rad ({:.1} deg)",
        params.phase_shift,
        params.phase_shift.to_degrees()
    );
    println!("  Points: {}", params.sample_count);
    println!();

    let curve = lissajous.generate();
    let length = arc_length(&curve.x, &curve.y)?;
    let bbox = bounding_box(&curve.x, &curve.y)?;
    let symmetry = symmetry_score(&curve.x, &curve.y)?;

    println!("Calculated Properties:");
    println!("  Arc Length: {length:.2}");
    println!("  Width: {:.2}", bbox.width());
    println!("  Height: {:.2}", bbox.height());
    println!("  Symmetry: {symmetry:.3}");
    println!();
    Ok(())
}

fn main() -> Result<()> {
    basic_generation()?;
    calculate_metrics()?;
    validate_properties()?;
    compare_ratios()?;
    phase_shift_effect()?;
    custom_configuration()?;

    println!("Examples completed successfully!");
    Ok(())
}

// Chain construction: cutoff handling, terminal pen entry, empty spectrum.

use epicycles_core::*;
use std::f64::consts::TAU;

fn spiral_spectrum() -> Spectrum {
    // Harmonics at k = ±1, ±2, ±3, ±5, ±7 with magnitudes from 70 down to 1.5.
    let points: Vec<Point2D> = (0..24)
        .map(|j| {
            let t = TAU * j as f64 / 24.0;
            Point2D::new(
                80.0 * t.cos() + 25.0 * (3.0 * t).sin() + 7.0 * (5.0 * t).cos(),
                60.0 * t.sin() - 15.0 * (2.0 * t).cos() + 3.0 * (7.0 * t).sin(),
            )
        })
        .collect();
    decompose_points(&points).unwrap()
}

#[test]
fn zero_cutoff_keeps_every_term() {
    let spectrum = spiral_spectrum();
    let terms = spectrum.len();
    let mut chain = EpicycleChain::new();
    chain.set_spectrum(spectrum);

    let circles = chain.advance(0.7, 0.0);
    assert_eq!(circles.len(), terms + 1);
    assert_eq!(circles.last().unwrap().radius, 0.0);
    assert_eq!(chain.circle_count(), terms);
}

#[test]
fn cutoff_above_max_leaves_only_the_pen() {
    let spectrum = spiral_spectrum();
    let dc = spectrum.dc;
    let cutoff = spectrum.max_magnitude() + 1.0;
    let mut chain = EpicycleChain::new();
    chain.set_spectrum(spectrum);

    let circles = chain.advance(1.3, cutoff);
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].radius, 0.0);
    assert_eq!(chain.pen(), Some(dc));
    assert_eq!(chain.circle_count(), 0);
}

#[test]
fn cutoff_keeps_exactly_the_terms_at_or_above_it() {
    let spectrum = spiral_spectrum();
    let cutoff = 5.0;
    let expected = spectrum.terms.iter().filter(|t| t.magnitude >= cutoff).count();
    assert!(expected > 0 && expected < spectrum.len());

    let mut chain = EpicycleChain::new();
    chain.set_spectrum(spectrum.clone());
    let circles = chain.advance(2.0, cutoff);
    assert_eq!(circles.len(), expected + 1);

    // Each circle's radius is the matching ranked magnitude; the pen entry follows.
    for (c, t) in circles[..expected].iter().zip(&spectrum.terms) {
        assert_eq!(c.radius, t.magnitude);
    }
    assert_eq!(circles[expected].radius, 0.0);
}

#[test]
fn circles_are_chained_head_to_tail() {
    let spectrum = spiral_spectrum();
    let mut chain = EpicycleChain::new();
    chain.set_spectrum(spectrum.clone());
    let phase = 0.9;
    let circles = chain.advance(phase, 0.0).to_vec();

    assert_eq!(circles[0].center, spectrum.dc);
    for (i, term) in spectrum.terms.iter().enumerate() {
        let step = circles[i + 1].center - circles[i].center;
        assert!((step - term.rotated(phase)).length() < 1e-9);
        // The arm length equals the circle radius.
        assert!((step.length() - circles[i].radius).abs() < 1e-9);
    }
}

#[test]
fn empty_chain_draws_nothing() {
    let mut chain = EpicycleChain::new();
    assert!(chain.advance(1.0, 0.0).is_empty());
    assert_eq!(chain.pen(), None);
    assert_eq!(chain.circle_count(), 0);

    chain.set_spectrum(spiral_spectrum());
    chain.advance(1.0, 0.0);
    chain.clear();
    assert!(!chain.has_terms());
    assert!(chain.circles().is_empty());
}

#[test]
fn opacity_fades_with_depth() {
    assert_eq!(circle_opacity(0, 0.05), 1.0);
    assert!((circle_opacity(20, 0.05) - 0.5).abs() < 1e-12);
    assert!(circle_opacity(5, 0.05) > circle_opacity(6, 0.05));
}

// Decomposition properties: term count, ordering, inverse-transform round trip.

use epicycles_core::*;
use rand::prelude::*;
use std::f64::consts::TAU;

fn circle_points(radius: f64, n: usize) -> Vec<Point2D> {
    (0..n)
        .map(|j| {
            let theta = TAU * j as f64 / n as f64;
            Point2D::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

fn random_closed_curve(rng: &mut StdRng, n: usize) -> Vec<Point2D> {
    (0..n)
        .map(|_| Point2D::new(rng.gen_range(-300.0..300.0), rng.gen_range(-200.0..200.0)))
        .collect()
}

#[test]
fn perfect_circle_has_one_dominant_term() {
    let spectrum = decompose_points(&circle_points(20.0, 360)).unwrap();

    assert_eq!(spectrum.len(), 359);
    assert!(spectrum.dc.length() < 1e-9, "centroid should be the origin");

    let top = spectrum.terms[0];
    assert!((top.magnitude - 20.0).abs() < 1e-9, "got {}", top.magnitude);
    assert_eq!(top.frequency.abs(), 1);
    for t in &spectrum.terms[1..] {
        assert!(t.magnitude < 1e-9, "k={} magnitude {}", t.frequency, t.magnitude);
    }
}

#[test]
fn circle_pen_follows_phase() {
    let spectrum = decompose_points(&circle_points(20.0, 360)).unwrap();
    let mut chain = EpicycleChain::new();
    chain.set_spectrum(spectrum);

    for &phase in &[0.0, 0.3, 1.0, 2.5, 4.0, 7.1] {
        chain.advance(phase, 0.1);
        assert_eq!(chain.circle_count(), 1);
        let pen = chain.pen().unwrap();
        let expected = Point2D::new(20.0 * phase.cos(), 20.0 * phase.sin());
        assert!(
            pen.distance(expected) < 1e-9,
            "phase {phase}: pen {pen:?} expected {expected:?}"
        );
    }
}

#[test]
fn n_samples_give_n_minus_one_terms_plus_dc() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [10, 11, 24, 57, 128] {
        let spectrum = decompose_points(&random_closed_curve(&mut rng, n)).unwrap();
        assert_eq!(spectrum.len(), n - 1);
        assert!(spectrum.terms.iter().all(|t| t.frequency != 0));

        let half = (n / 2) as i32;
        let mut freqs: Vec<i32> = spectrum.terms.iter().map(|t| t.frequency).collect();
        freqs.sort_unstable();
        let expected: Vec<i32> = (-half..(-half + n as i32)).filter(|&k| k != 0).collect();
        assert_eq!(freqs, expected);
    }
}

#[test]
fn terms_are_sorted_by_descending_magnitude() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..8 {
        let n = rng.gen_range(10..120);
        let spectrum = decompose_points(&random_closed_curve(&mut rng, n)).unwrap();
        for pair in spectrum.terms.windows(2) {
            assert!(pair[0].magnitude >= pair[1].magnitude);
        }
        assert_eq!(spectrum.max_magnitude(), spectrum.terms[0].magnitude);
    }
}

#[test]
fn full_chain_reconstructs_every_sample() {
    let mut rng = StdRng::seed_from_u64(1234);
    // Even counts use the lopsided window -n/2 ..= n/2 - 1.
    for n in [10, 36, 37] {
        let points = random_closed_curve(&mut rng, n);
        let mut chain = EpicycleChain::new();
        chain.set_spectrum(decompose_points(&points).unwrap());

        // Sample j sits at phase 2πj/n.
        for (j, &p) in points.iter().enumerate() {
            chain.advance(TAU * j as f64 / n as f64, 0.0);
            let pen = chain.pen().unwrap();
            assert!(pen.distance(p) < 1e-8, "n={n} sample {j}: {pen:?} vs {p:?}");
        }
    }
}

#[test]
fn decompose_reads_point_sequence() {
    let curve: PointSequence = circle_points(50.0, 40).into_iter().collect();
    let spectrum = decompose(&curve).unwrap();
    assert_eq!(spectrum.len(), 39);

    let short: PointSequence = circle_points(50.0, 9).into_iter().collect();
    assert!(matches!(
        decompose(&short),
        Err(SpectrumError::TooFewSamples { got: 9, .. })
    ));
}

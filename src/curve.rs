use std::f64::consts::PI;

/// Peak value of both coordinates.
pub const AMPLITUDE: f64 = 0.8;
/// Number of points taken along the curve.
pub const SAMPLE_COUNT: usize = 20;
/// Parameter step is `PI / STEPS_PER_HALF_TURN`.
pub const STEPS_PER_HALF_TURN: f64 = 10.0;
pub const X_FREQUENCY: f64 = 1.0;
pub const Y_FREQUENCY: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Point number `i` of the curve, taken at `t = i * PI / 10`.
pub fn sample(i: usize) -> Sample {
    let i = i as f64;
    Sample {
        x: AMPLITUDE * (X_FREQUENCY * PI * i / STEPS_PER_HALF_TURN).sin(),
        y: AMPLITUDE * (Y_FREQUENCY * PI * i / STEPS_PER_HALF_TURN).sin(),
    }
}

/// All `SAMPLE_COUNT` points in index order.
pub fn samples() -> impl ExactSizeIterator<Item = Sample> {
    (0..SAMPLE_COUNT).map(sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn yields_twenty_points_in_order() {
        let all: Vec<Sample> = samples().collect();
        assert_eq!(all.len(), SAMPLE_COUNT);
        for (i, s) in all.iter().enumerate() {
            assert_eq!(*s, sample(i));
        }
    }

    #[test]
    fn follows_lissajous_law() {
        for (i, s) in samples().enumerate() {
            let t = PI * i as f64 / 10.0;
            assert!((s.x - 0.8 * t.sin()).abs() < EPS, "x at {}", i);
            assert!((s.y - 0.8 * (2.0 * t).sin()).abs() < EPS, "y at {}", i);
        }
    }

    #[test]
    fn origin_at_zero_and_half_turn() {
        for &i in &[0, 10] {
            let s = sample(i);
            assert!(s.x.abs() < EPS, "x at {} = {}", i, s.x);
            assert!(s.y.abs() < EPS, "y at {} = {}", i, s.y);
        }
        assert_eq!(sample(0), Sample { x: 0.0, y: 0.0 });
    }

    #[test]
    fn peaks_reach_amplitude() {
        assert!((sample(5).x - AMPLITUDE).abs() < EPS);
        assert!((sample(15).x + AMPLITUDE).abs() < EPS);
        assert!((sample(5).y).abs() < EPS);
        let max_y = samples().map(|s| s.y).fold(f64::MIN, f64::max);
        assert!(max_y <= AMPLITUDE);
        assert!((max_y - 0.8 * (0.4 * PI).sin()).abs() < EPS);
    }

    #[test]
    fn stays_within_amplitude() {
        for s in samples() {
            assert!(-AMPLITUDE <= s.x && s.x <= AMPLITUDE);
            assert!(-AMPLITUDE <= s.y && s.y <= AMPLITUDE);
        }
    }

    #[test]
    fn is_deterministic() {
        let a: Vec<(u64, u64)> = samples().map(|s| (s.x.to_bits(), s.y.to_bits())).collect();
        let b: Vec<(u64, u64)> = samples().map(|s| (s.x.to_bits(), s.y.to_bits())).collect();
        assert_eq!(a, b);
    }
}

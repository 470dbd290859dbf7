//! Gate envelope with linear edge ramps.
//!
//! Each tone fades in and out over a short fixed interval to avoid
//! audible clicks. Both ramps fit inside the gate: the level reaches
//! full scale `EDGE_RAMP` after the start and is back at zero exactly
//! when the gate ends.

/// Edge ramp length in seconds.
pub const EDGE_RAMP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Attack,
    Hold,
    Release,
    Done,
}

/// A one-shot gate envelope: ramp up, hold at 1.0, ramp down.
#[derive(Debug, Clone)]
pub struct RampGate {
    stage: Stage,
    level: f64,
    /// Samples in the current stage.
    stage_samples: usize,
    stage_counter: usize,
    hold_samples: usize,
    ramp_samples: usize,
}

impl RampGate {
    /// Build a gate spanning `duration` seconds. Ramps shrink for gates
    /// too short to hold two full edges.
    pub fn new(sample_rate: f64, duration: f64) -> Self {
        let ramp = EDGE_RAMP.min(duration / 2.0);
        let ramp_samples = (ramp * sample_rate) as usize;
        let total_samples = (duration * sample_rate) as usize;
        let hold_samples = total_samples.saturating_sub(2 * ramp_samples);
        RampGate {
            stage: Stage::Attack,
            level: 0.0,
            stage_samples: ramp_samples,
            stage_counter: 0,
            hold_samples,
            ramp_samples,
        }
    }

    /// Generate the next envelope sample in [0, 1].
    pub fn next_sample(&mut self) -> f64 {
        match self.stage {
            Stage::Attack => {
                if self.stage_samples == 0 {
                    self.level = 1.0;
                    self.enter_hold();
                } else {
                    let t = self.stage_counter as f64 / self.stage_samples as f64;
                    self.level = t;
                    self.stage_counter += 1;
                    if self.stage_counter >= self.stage_samples {
                        self.level = 1.0;
                        self.enter_hold();
                    }
                }
            }
            Stage::Hold => {
                self.level = 1.0;
                self.stage_counter += 1;
                if self.stage_counter >= self.stage_samples {
                    self.stage = Stage::Release;
                    self.stage_samples = self.ramp_samples;
                    self.stage_counter = 0;
                }
            }
            Stage::Release => {
                if self.stage_samples == 0 {
                    self.level = 0.0;
                    self.stage = Stage::Done;
                } else {
                    let t = self.stage_counter as f64 / self.stage_samples as f64;
                    self.level = 1.0 - t;
                    self.stage_counter += 1;
                    if self.stage_counter >= self.stage_samples {
                        self.level = 0.0;
                        self.stage = Stage::Done;
                    }
                }
            }
            Stage::Done => {
                self.level = 0.0;
            }
        }
        self.level
    }

    /// True once the closing ramp has finished.
    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Done
    }

    fn enter_hold(&mut self) {
        if self.hold_samples == 0 {
            self.stage = Stage::Release;
            self.stage_samples = self.ramp_samples;
        } else {
            self.stage = Stage::Hold;
            self.stage_samples = self.hold_samples;
        }
        self.stage_counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_full_level() {
        let mut gate = RampGate::new(44100.0, 0.1);
        let mut max_level = 0.0;
        for _ in 0..4410 {
            let s = gate.next_sample();
            if s > max_level {
                max_level = s;
            }
        }
        assert!(
            (max_level - 1.0).abs() < 1e-9,
            "gate should reach full level, got {max_level}"
        );
    }

    #[test]
    fn finishes_within_duration() {
        let sample_rate = 44100.0;
        let duration = 0.1;
        let mut gate = RampGate::new(sample_rate, duration);
        let total = (duration * sample_rate) as usize;
        for _ in 0..total {
            gate.next_sample();
        }
        assert!(gate.is_finished(), "gate should finish by its duration");
        assert_eq!(gate.next_sample(), 0.0);
    }

    #[test]
    fn edges_are_ramped() {
        let sample_rate = 44100.0;
        let mut gate = RampGate::new(sample_rate, 0.1);
        let first = gate.next_sample();
        assert!(first < 0.01, "gate should start near silence, got {first}");

        // Collect the full gate and inspect the closing edge
        let total = (0.1 * sample_rate) as usize;
        let mut samples = vec![first];
        for _ in 1..total {
            samples.push(gate.next_sample());
        }
        let last = *samples.last().unwrap();
        assert!(last < 0.01, "gate should end near silence, got {last}");

        // Midpoint sits on the hold plateau
        let mid = samples[total / 2];
        assert!((mid - 1.0).abs() < 1e-9, "midpoint should hold at 1.0, got {mid}");
    }

    #[test]
    fn stays_in_range() {
        let mut gate = RampGate::new(44100.0, 0.3);
        for _ in 0..20000 {
            let s = gate.next_sample();
            assert!((0.0..=1.0).contains(&s), "envelope out of range: {s}");
        }
    }

    #[test]
    fn short_gate_shrinks_ramps() {
        // 5 ms gate cannot hold two 10 ms ramps; it must still finish
        let sample_rate = 44100.0;
        let mut gate = RampGate::new(sample_rate, 0.005);
        let total = (0.005 * sample_rate) as usize;
        for _ in 0..total {
            gate.next_sample();
        }
        assert!(gate.is_finished(), "short gate should still complete");
    }
}

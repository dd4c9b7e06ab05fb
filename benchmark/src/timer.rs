use std::time::{Duration, Instant};

use hashbrown::HashMap;

pub struct Timer {
    start: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Measured times grouped by graph size.
#[derive(Default)]
pub struct Samples {
    times: HashMap<usize, Vec<f64>>,
}

impl Samples {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a time in milliseconds and returns the number of samples of the size.
    pub fn push(&mut self, num_nodes: usize, millis: f64) -> usize {
        let times = self.times.entry(num_nodes).or_default();
        times.push(millis);
        times.len()
    }

    pub fn median(&self, num_nodes: usize) -> Option<f64> {
        let mut times = self.times.get(&num_nodes)?.clone();
        if times.is_empty() {
            return None;
        }
        times.sort_unstable_by(f64::total_cmp);
        let mid = times.len() / 2;
        if times.len() % 2 == 0 {
            Some((times[mid - 1] + times[mid]) / 2.0)
        } else {
            Some(times[mid])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        let mut samples = Samples::new();
        assert_eq!(samples.median(10), None);
        assert_eq!(samples.push(10, 3.0), 1);
        assert_eq!(samples.median(10), Some(3.0));
        samples.push(10, 1.0);
        assert_eq!(samples.median(10), Some(2.0));
        samples.push(10, 10.0);
        assert_eq!(samples.median(10), Some(3.0));
        assert_eq!(samples.median(20), None);
    }
}

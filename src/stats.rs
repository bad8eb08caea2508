//! Running summary statistics over temperature values.

use std::ops::AddAssign;

use serde_derive::*;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    sum: f64,
    sum_sq: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.,
            sum_sq: 0.,
        }
    }
}

impl Stats {
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let var = self.sum_sq / self.count as f64 - mean * mean;
        Some(var.max(0.).sqrt())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.count,
            min: (self.count > 0).then(|| self.min),
            max: (self.count > 0).then(|| self.max),
            mean: self.mean(),
            std_dev: self.std_dev(),
        }
    }
}

impl AddAssign<f64> for Stats {
    fn add_assign(&mut self, val: f64) {
        self.count += 1;
        self.min = self.min.min(val);
        self.max = self.max.max(val);
        self.sum += val;
        self.sum_sq += val * val;
    }
}

impl AddAssign<&Stats> for Stats {
    fn add_assign(&mut self, other: &Stats) {
        self.count += other.count;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
    }
}

/// What gets reported for a set of values.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_values() {
        let mut stats = Stats::default();
        for v in &[20., 60., 100., 60.] {
            stats += *v;
        }
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 20.);
        assert_eq!(stats.max, 100.);
        assert_eq!(stats.mean(), Some(60.));
        assert!((stats.std_dev().unwrap() - 800f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn combines_partial_stats() {
        let mut left = Stats::default();
        left += 1.;
        left += 2.;
        let mut right = Stats::default();
        right += 6.;

        left += &right;
        assert_eq!(left.count, 3);
        assert_eq!(left.min, 1.);
        assert_eq!(left.max, 6.);
        assert_eq!(left.mean(), Some(3.));

        left += &Stats::default();
        assert_eq!(left.count, 3);
        assert_eq!(left.min, 1.);
    }

    #[test]
    fn empty_summary() {
        let summary = Stats::default().summary();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.mean, None);
        assert_eq!(
            serde_json::to_value(&summary).unwrap()["std_dev"],
            serde_json::Value::Null
        );
    }
}

/// A single latency/uptime observation for one region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    /// Region identifier, e.g. `apac`.
    pub region: &'static str,

    /// Observed round-trip latency in milliseconds.
    pub latency_ms: f64,

    /// Observed uptime percentage in `[0, 100]`.
    pub uptime_pct: f64,
}

impl Record {
    /// Creates a new record.
    #[must_use]
    pub const fn new(region: &'static str, latency_ms: f64, uptime_pct: f64) -> Self {
        Self {
            region,
            latency_ms,
            uptime_pct,
        }
    }

    /// Whether this observation's latency strictly exceeds `threshold_ms`.
    #[must_use]
    pub fn breaches(&self, threshold_ms: f64) -> bool {
        self.latency_ms > threshold_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breach_is_strict() {
        let record = Record::new("apac", 150.0, 99.0);

        assert!(!record.breaches(150.0));
        assert!(record.breaches(149.99));
        assert!(!record.breaches(150.01));
    }
}

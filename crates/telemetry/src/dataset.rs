use crate::Record;

/// Seeded observations served by the aggregator, grouped by region.
pub static DATASET: &[Record] = &[
    // apac
    Record::new("apac", 196.92, 97.52),
    Record::new("apac", 215.23, 98.142),
    Record::new("apac", 178.05, 99.124),
    Record::new("apac", 187.17, 97.967),
    Record::new("apac", 201.07, 98.284),
    Record::new("apac", 106.28, 97.326),
    Record::new("apac", 210.01, 97.963),
    Record::new("apac", 208.43, 97.15),
    Record::new("apac", 180.81, 99.15),
    Record::new("apac", 181.06, 98.27),
    Record::new("apac", 110.59, 97.685),
    Record::new("apac", 145.25, 98.555),
    // emea
    Record::new("emea", 207.35, 98.063),
    Record::new("emea", 218.31, 97.977),
    Record::new("emea", 229.28, 97.288),
    Record::new("emea", 185.18, 98.834),
    Record::new("emea", 139.58, 98.413),
    Record::new("emea", 130.32, 97.45),
    Record::new("emea", 144.9, 97.865),
    Record::new("emea", 144.18, 97.552),
    Record::new("emea", 195.86, 98.869),
    Record::new("emea", 159.95, 97.614),
    Record::new("emea", 216.72, 98.289),
    Record::new("emea", 224.75, 99.003),
    // amer
    Record::new("amer", 136.17, 97.238),
    Record::new("amer", 118.85, 98.276),
    Record::new("amer", 137.36, 98.956),
    Record::new("amer", 168.64, 98.682),
    Record::new("amer", 190.73, 98.58),
    Record::new("amer", 113.19, 99.49),
    Record::new("amer", 204.79, 98.8),
    Record::new("amer", 122.95, 98.943),
    Record::new("amer", 143.84, 98.273),
    Record::new("amer", 172.84, 98.882),
    Record::new("amer", 129.01, 98.817),
    Record::new("amer", 178.29, 97.92),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_has_twelve_records_per_region() {
        for region in ["apac", "emea", "amer"] {
            let count = DATASET.iter().filter(|r| r.region == region).count();
            assert_eq!(count, 12, "region {region}");
        }
        assert_eq!(DATASET.len(), 36);
    }

    #[test]
    fn test_dataset_values_in_range() {
        for record in DATASET {
            assert!(record.latency_ms > 0.0);
            assert!((0.0..=100.0).contains(&record.uptime_pct));
        }
    }
}

//! Feature extraction trait definitions.

use railcast_primitives::{Date, DispositionRecord, RepairRecord, TimeFeatures};

/// Per-observation feature extraction.
///
/// Operates on the history of a single wagon, looking backward from a cutoff.
pub trait FeatureExtractor: Send + Sync {
    /// Compute time-dependent features for one target date.
    ///
    /// # Arguments
    /// * `date` - Target date; only events strictly before it are used
    /// * `dispositions` - The wagon's disposition records, ascending by plan date
    /// * `repairs` - The wagon's repair records, ascending by date
    ///
    /// # Returns
    /// The feature vector, with missing entries for quantities the history
    /// cannot provide.
    fn extract(
        &self,
        date: Date,
        dispositions: &[DispositionRecord],
        repairs: &[RepairRecord],
    ) -> TimeFeatures;

    /// Returns the name of this extractor.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use railcast_primitives::WagonId;

    use super::*;

    struct CountingExtractor;

    impl FeatureExtractor for CountingExtractor {
        fn extract(
            &self,
            date: Date,
            _dispositions: &[DispositionRecord],
            repairs: &[RepairRecord],
        ) -> TimeFeatures {
            let count = repairs.iter().filter(|r| r.date < date).count() as i64;
            TimeFeatures { num_rem: Some(count), ..TimeFeatures::missing() }
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn extractor_is_object_safe() {
        let extractor: Box<dyn FeatureExtractor> = Box::new(CountingExtractor);
        let wagon = WagonId::new(1);
        let repairs = [
            RepairRecord::new(wagon, Date::from_ymd_opt(2022, 1, 1).unwrap()),
            RepairRecord::new(wagon, Date::from_ymd_opt(2023, 6, 1).unwrap()),
        ];

        let features = extractor.extract(Date::from_ymd_opt(2023, 1, 1).unwrap(), &[], &repairs);
        assert_eq!(features.num_rem, Some(1));
        assert_eq!(extractor.name(), "counting");
    }
}

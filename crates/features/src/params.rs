//! Static wagon parameter lookup.

use std::collections::{HashMap, hash_map::Entry};

use railcast_primitives::{StaticAttributes, TargetObservation, WagonId, WagonParameters};
use tracing::{debug, info};

use crate::FeatureError;

/// Immutable lookup from wagon ID to its six static attributes.
///
/// Built once per run and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct StaticParameterIndex {
    attributes: HashMap<WagonId, StaticAttributes>,
}

impl StaticParameterIndex {
    /// Build the index from the wagon parameters table.
    ///
    /// # Errors
    /// Returns `FeatureError::DuplicateWagon` if a wagon appears twice.
    pub fn build<I>(params: I) -> Result<Self, FeatureError>
    where
        I: IntoIterator<Item = WagonParameters>,
    {
        let mut attributes = HashMap::new();
        for p in params {
            match attributes.entry(p.wagon) {
                Entry::Occupied(_) => return Err(FeatureError::DuplicateWagon(p.wagon)),
                Entry::Vacant(slot) => {
                    slot.insert(StaticAttributes::from(&p));
                }
            }
        }

        debug!(wagons = attributes.len(), "built static parameter index");
        Ok(Self { attributes })
    }

    /// Static attributes of a wagon.
    ///
    /// # Errors
    /// Returns `FeatureError::UnknownWagon` if the wagon is not indexed.
    pub fn lookup(&self, wagon: WagonId) -> Result<StaticAttributes, FeatureError> {
        self.attributes.get(&wagon).copied().ok_or(FeatureError::UnknownWagon(wagon))
    }

    /// Whether the wagon is indexed.
    #[must_use]
    pub fn contains(&self, wagon: WagonId) -> bool {
        self.attributes.contains_key(&wagon)
    }

    /// Number of wagons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Drop observations of wagons missing from the index.
    ///
    /// # Returns
    /// The kept observations, in their original order.
    #[must_use]
    pub fn retain_known(&self, targets: Vec<TargetObservation>) -> Vec<TargetObservation> {
        let total = targets.len();
        let kept: Vec<_> = targets.into_iter().filter(|t| self.contains(t.wagon)).collect();
        if kept.len() < total {
            info!(dropped = total - kept.len(), "dropped observations of unknown wagons");
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use railcast_primitives::Date;

    use super::*;

    fn params(id: i64, kuzov: i64) -> WagonParameters {
        WagonParameters {
            rod_id: Some(id % 3),
            gruz: Some(69.0),
            kuzov: Some(kuzov),
            ..WagonParameters::new(WagonId::new(id))
        }
    }

    #[test]
    fn lookup_known_wagon() {
        let index = StaticParameterIndex::build([params(1, 2), params(2, 1)]).unwrap();

        assert_eq!(index.len(), 2);
        let attrs = index.lookup(WagonId::new(1)).unwrap();
        assert_eq!(attrs.kuzov, 1);
        assert_eq!(attrs.rodid, Some(1));
        assert_eq!(index.lookup(WagonId::new(2)).unwrap().kuzov, 0);
    }

    #[test]
    fn lookup_unknown_wagon_fails() {
        let index = StaticParameterIndex::build([params(1, 2)]).unwrap();
        let err = index.lookup(WagonId::new(99)).unwrap_err();
        assert!(matches!(err, FeatureError::UnknownWagon(w) if w == WagonId::new(99)));
    }

    #[test]
    fn duplicate_wagon_fails() {
        let err = StaticParameterIndex::build([params(1, 2), params(1, 0)]).unwrap_err();
        assert!(matches!(err, FeatureError::DuplicateWagon(_)));
    }

    #[test]
    fn retain_known_preserves_order() {
        let index = StaticParameterIndex::build([params(1, 0), params(3, 0)]).unwrap();
        let date = Date::from_ymd_opt(2023, 1, 1).unwrap();
        let targets = vec![
            TargetObservation::new(WagonId::new(3), date),
            TargetObservation::new(WagonId::new(2), date),
            TargetObservation::new(WagonId::new(1), date),
        ];

        let kept = index.retain_known(targets);
        let ids: Vec<i64> = kept.iter().map(|t| t.wagon.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}

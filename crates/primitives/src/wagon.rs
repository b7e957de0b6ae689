//! Wagon identity and static parameter definitions.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Unique identifier for a wagon (`wagnum`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
pub struct WagonId(pub i64);

impl WagonId {
    /// Create a new wagon ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw wagon number.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// Raw body-type code marking the encoded body type.
pub const KUZOV_FLAG_CODE: i64 = 2;

/// One row of the wagon parameters table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagonParameters {
    /// Wagon identifier.
    pub wagon: WagonId,
    /// Rod (type) identifier.
    pub rod_id: Option<i64>,
    /// Load capacity.
    pub gruz: Option<f64>,
    /// Tare weight.
    pub tara: Option<f64>,
    /// Body volume.
    pub cnsi_volumek: Option<f64>,
    /// Raw body-type code.
    pub kuzov: Option<i64>,
    /// Distance norm in km.
    pub norma_km: Option<f64>,
}

impl WagonParameters {
    /// Create parameters with only the wagon ID set.
    #[must_use]
    pub const fn new(wagon: WagonId) -> Self {
        Self {
            wagon,
            rod_id: None,
            gruz: None,
            tara: None,
            cnsi_volumek: None,
            kuzov: None,
            norma_km: None,
        }
    }
}

/// The six static attributes attached to every feature row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticAttributes {
    /// Rod (type) identifier.
    pub rodid: Option<i64>,
    /// Load capacity.
    pub gruz: Option<f64>,
    /// Tare weight.
    pub tara: Option<f64>,
    /// Body volume.
    pub cnsi_volumek: Option<f64>,
    /// Body-type flag: 1 if the raw code is 2, else 0.
    pub kuzov: u8,
    /// Distance norm in km.
    pub norma_km: Option<f64>,
}

impl From<&WagonParameters> for StaticAttributes {
    fn from(params: &WagonParameters) -> Self {
        Self {
            rodid: params.rod_id,
            gruz: params.gruz,
            tara: params.tara,
            cnsi_volumek: params.cnsi_volumek,
            kuzov: u8::from(params.kuzov == Some(KUZOV_FLAG_CODE)),
            norma_km: params.norma_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn wagon_id_display() {
        let id: WagonId = 29_105.into();
        assert_eq!(id.to_string(), "29105");
        assert_eq!(i64::from(id), 29_105);
    }

    #[rstest]
    #[case(Some(2), 1)]
    #[case(Some(1), 0)]
    #[case(Some(0), 0)]
    #[case(None, 0)]
    fn kuzov_is_binary_encoded(#[case] raw: Option<i64>, #[case] flag: u8) {
        let params = WagonParameters { kuzov: raw, ..WagonParameters::new(WagonId::new(1)) };
        assert_eq!(StaticAttributes::from(&params).kuzov, flag);
    }

    #[test]
    fn static_attributes_copy_values() {
        let params = WagonParameters {
            wagon: WagonId::new(7),
            rod_id: Some(1),
            gruz: Some(70.5),
            tara: Some(24.0),
            cnsi_volumek: Some(88.0),
            kuzov: Some(2),
            norma_km: Some(110_000.0),
        };
        let attrs = StaticAttributes::from(&params);
        assert_eq!(attrs.rodid, Some(1));
        assert_eq!(attrs.gruz, Some(70.5));
        assert_eq!(attrs.norma_km, Some(110_000.0));
    }
}

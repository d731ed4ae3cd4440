use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds parameters for the peridynamic force-state constitutive models
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub enum ParamForceState {
    /// Isotropic linear peridynamic solid (dilatation only, no plasticity)
    LinearElastic {
        /// Bulk modulus K
        bulk_modulus: f64,

        /// Shear modulus μ
        shear_modulus: f64,
    },

    /// Isotropic elastic-plastic solid with incremental radial return
    ElasticPlastic {
        /// Bulk modulus K
        bulk_modulus: f64,

        /// Shear modulus μ
        shear_modulus: f64,

        /// Horizon δ (interaction radius)
        horizon: f64,

        /// Yield stress σy
        yield_stress: f64,
    },
}

impl ParamForceState {
    /// Reads a parameter set from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        serde_json::from_str(json).map_err(|_| "cannot parse JSON parameter set")
    }

    /// Writes the parameter set to a JSON string
    pub fn to_json(&self) -> Result<String, StrError> {
        serde_json::to_string_pretty(self).map_err(|_| "cannot serialize parameter set")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParamForceState;

    #[test]
    fn derive_works() {
        let p = ParamForceState::LinearElastic {
            bulk_modulus: 130e9,
            shear_modulus: 78e9,
        };
        let q = p.clone();
        let txt = format!("{:?}", q);
        assert!(txt.contains("LinearElastic"));
    }

    #[test]
    fn json_roundtrip_works() {
        let p = ParamForceState::ElasticPlastic {
            bulk_modulus: 130e9,
            shear_modulus: 78e9,
            horizon: 0.503,
            yield_stress: 200e6,
        };
        let json = p.to_json().unwrap();
        let q = ParamForceState::from_json(&json).unwrap();
        match q {
            ParamForceState::ElasticPlastic {
                bulk_modulus,
                shear_modulus,
                horizon,
                yield_stress,
            } => {
                assert_eq!(bulk_modulus, 130e9);
                assert_eq!(shear_modulus, 78e9);
                assert_eq!(horizon, 0.503);
                assert_eq!(yield_stress, 200e6);
            }
            _ => panic!("wrong variant"),
        }
        assert_eq!(ParamForceState::from_json("{").err(), Some("cannot parse JSON parameter set"));
    }
}

use serde::{Serialize, Deserialize};

use crate::geo_3d::{GeoVector, GeoResult};
use crate::query::inputs::required;
use crate::query::operations::{GeoOperation, Outcome};

/// Angle between vectors `a` and `b`, in radians.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AngleBetween {
    #[serde(default)]
    a: Option<GeoVector>,
    #[serde(default)]
    b: Option<GeoVector>,
}
impl Default for AngleBetween {
    fn default() -> Self {
        AngleBetween{
            a: Some(GeoVector::xhat()),
            b: Some(GeoVector::new(1.0, 1.0, 0.0)),
        }
    }
}
impl GeoOperation for AngleBetween {
    fn description(&self) -> &'static str {
        "angle between two vectors, in radians"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let a = required(&self.a, "a")?;
        let b = required(&self.b, "b")?;
        Ok(Outcome::Angle(a.angle_to(&b)))
    }
}

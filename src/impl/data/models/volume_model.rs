use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidVolume;

/// Volume in megalitres, as written in the source sheet (thousands separators
/// allowed, negatives rejected).
#[derive(Debug)]
pub(crate) struct VolumeModel(pub f64);
impl FromStr for VolumeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(',', "");
        let volume = raw
            .parse::<f64>()
            .map_err(|_| InvalidVolume::new(s))?;
        if !volume.is_finite() || volume < 0.0 {
            return Err(InvalidVolume::new(s));
        }
        Ok(VolumeModel(volume))
    }
}

impl From<VolumeModel> for f64 {
    fn from(model: VolumeModel) -> Self {
        model.0
    }
}

use fractic_server_error::ServerError;

use crate::entities::AbstractionPeriod;

/// RON cell, e.g. `(start_day: 1, start_month: 11, end_day: 31, end_month: 3)`.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct AbstractionPeriodModel {
    start_day: u32,
    start_month: u32,
    end_day: u32,
    end_month: u32,
}

impl TryFrom<AbstractionPeriodModel> for AbstractionPeriod {
    type Error = ServerError;
    fn try_from(model: AbstractionPeriodModel) -> Result<Self, Self::Error> {
        AbstractionPeriod::new(
            model.start_day,
            model.start_month,
            model.end_day,
            model.end_month,
        )
    }
}

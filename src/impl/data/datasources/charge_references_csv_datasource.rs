use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::{abstraction_period_model::AbstractionPeriodModel, volume_model::VolumeModel},
    entities::{AbstractionPeriod, ChargeElement, ChargeReference},
    errors::{InvalidCsv, InvalidCsvContent, InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait ChargeReferencesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<ChargeReference>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<ChargeReference>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ChargeReferencesCsvDatasourceImpl;

impl ChargeReferencesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChargeReferencesCsvDatasource for ChargeReferencesCsvDatasourceImpl {
    /// One row per charge element. Rows with the same `charge_reference` key
    /// belong to the same reference, kept in first-seen order.
    fn from_string(&self, s: &str) -> Result<Vec<ChargeReference>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_reference = r.get(0).unwrap_or("");
                    let raw_category_code = r.get(1).unwrap_or("");
                    let raw_category_description = r.get(2).unwrap_or("");
                    let raw_description = r.get(3).unwrap_or("");
                    let raw_volume = r.get(4).unwrap_or("0");
                    let raw_element_description = r.get(5).unwrap_or("");
                    let raw_abstraction_period = r.get(6).unwrap_or("");

                    if raw_reference.is_empty() {
                        return Err(InvalidCsvContent::new("missing charge reference key"));
                    }
                    if raw_category_code.is_empty() {
                        return Err(InvalidCsvContent::new("missing charge category code"));
                    }

                    // Parse.
                    let volume = VolumeModel::from_str(raw_volume)?;
                    let abstraction_period: AbstractionPeriodModel =
                        from_str(raw_abstraction_period)
                            .map_err(|e| InvalidRon::with_debug("AbstractionPeriod", &e))?;

                    // Build.
                    Ok((
                        ChargeReference {
                            id: raw_reference.into(),
                            charge_category_code: raw_category_code.into(),
                            charge_category_description: raw_category_description.into(),
                            description: raw_description.into(),
                            volume: volume.into(),
                            charge_elements: Vec::new(),
                        },
                        ChargeElement {
                            description: raw_element_description.into(),
                            abstraction_period: AbstractionPeriod::try_from(abstraction_period)?,
                        },
                    ))
                })
            })
            .try_fold(Vec::<ChargeReference>::new(), |mut references, row| {
                let (reference, element) = row?;
                match references.iter_mut().find(|r| r.id == reference.id) {
                    Some(existing) => {
                        if existing.charge_category_code != reference.charge_category_code
                            || existing.charge_category_description
                                != reference.charge_category_description
                            || existing.description != reference.description
                            || existing.volume != reference.volume
                        {
                            return Err(InvalidCsvContent::new(&format!(
                                "conflicting charge reference columns for '{}'",
                                reference.id
                            )));
                        }
                        existing.charge_elements.push(element);
                    }
                    None => references.push(ChargeReference {
                        charge_elements: vec![element],
                        ..reference
                    }),
                }
                Ok(references)
            })
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<ChargeReference>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(
            &tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ReadError::with_debug(&e))?,
        )
    }
}

use fractic_server_error::ServerError;
use serde_json::json;
use tracing::debug;

use crate::entities::{
    BillingConfig, BillingContext, BillingInvoiceLicenceId, BillingTransactionId,
    ChargeReference, ChargeType, DateRange, NewTransaction, TransactionStatus,
};

use super::{
    billable_days_calculator::calculate_abstraction_days, billing_periods::determine_charge_period,
};

const COMPENSATION_CHARGE_DESCRIPTION: &str = "Compensation charge: calculated from the charge \
reference, activity description and regional environmental improvement charge; excludes any \
supported source additional charge and two-part tariff charges";

pub(crate) struct TransactionGenerator<'a> {
    config: &'a BillingConfig,
}

pub(crate) struct GenerationInput<'a> {
    pub(crate) billing_invoice_licence_id: BillingInvoiceLicenceId,
    pub(crate) charge_reference: &'a ChargeReference,
    pub(crate) billing_period: &'a DateRange,
    pub(crate) charge_period: &'a DateRange,
    pub(crate) is_new_licence: bool,
    pub(crate) is_water_undertaker: bool,
}

impl<'a> TransactionGenerator<'a> {
    pub(crate) fn new(config: &'a BillingConfig) -> Self {
        Self { config }
    }

    /// Generates for each charge reference against the licence described by
    /// `context`. Nothing is generated when the charge version does not apply
    /// during the billing period.
    pub(crate) fn generate_for_context(
        &self,
        charge_references: &[ChargeReference],
        context: &BillingContext,
    ) -> Result<Vec<NewTransaction>, ServerError> {
        let Some(charge_period) =
            determine_charge_period(&context.charge_version, &context.billing_period)
        else {
            return Ok(Vec::new());
        };
        charge_references
            .iter()
            .map(|charge_reference| {
                self.generate(GenerationInput {
                    billing_invoice_licence_id: context.billing_invoice_licence_id,
                    charge_reference,
                    billing_period: &context.billing_period,
                    charge_period: &charge_period,
                    is_new_licence: context.is_new_licence,
                    is_water_undertaker: context.is_water_undertaker,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|generated| generated.into_iter().flatten().collect())
    }

    /// Standard transaction for the charge reference, followed by a
    /// compensation transaction when the licensee is not a water undertaker.
    /// Nothing is generated when there are no billable days.
    pub(crate) fn generate(
        &self,
        input: GenerationInput<'_>,
    ) -> Result<Vec<NewTransaction>, ServerError> {
        let reference = input.charge_reference;
        let days = calculate_abstraction_days(
            input.charge_period,
            input.billing_period,
            reference,
            self.config.leap_day_policy,
        )?;
        if days.billable_days == 0 {
            debug!(
                charge_reference = %reference.id,
                "no billable days, skipping charge reference"
            );
            return Ok(vec![]);
        }

        let standard = NewTransaction {
            id: BillingTransactionId::generate(),
            billing_invoice_licence_id: input.billing_invoice_licence_id,
            charge_type: ChargeType::Standard,
            charge_category_code: reference.charge_category_code.clone(),
            charge_category_description: reference.charge_category_description.clone(),
            description: format!("Water abstraction charge: {}", reference.description),
            authorised_days: days.authorised_days,
            billable_days: days.billable_days,
            volume: reference.volume,
            is_credit: false,
            is_new_licence: input.is_new_licence,
            status: TransactionStatus::Candidate,
            start_date: input.charge_period.start_date,
            end_date: input.charge_period.end_date,
            purposes: purposes(reference),
        };

        let mut transactions = vec![standard];
        if self.config.compensation_charges && !input.is_water_undertaker {
            let compensation = NewTransaction {
                id: BillingTransactionId::generate(),
                charge_type: ChargeType::Compensation,
                description: COMPENSATION_CHARGE_DESCRIPTION.to_string(),
                ..transactions[0].clone()
            };
            transactions.push(compensation);
        }
        debug!(
            charge_reference = %reference.id,
            authorised_days = days.authorised_days,
            billable_days = days.billable_days,
            count = transactions.len(),
            "generated transactions"
        );
        Ok(transactions)
    }
}

fn purposes(reference: &ChargeReference) -> serde_json::Value {
    reference
        .charge_elements
        .iter()
        .map(|element| {
            let period = &element.abstraction_period;
            json!({
                "description": element.description,
                "abstractionPeriodStartDay": period.start.day(),
                "abstractionPeriodStartMonth": period.start.month(),
                "abstractionPeriodEndDay": period.end.day(),
                "abstractionPeriodEndMonth": period.end.month(),
            })
        })
        .collect()
}

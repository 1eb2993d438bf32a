use tracing::debug;

use crate::entities::{
    BillingInvoiceLicenceId, BillingTransactionId, NewTransaction, PersistedTransaction,
    TransactionStatus,
};

/// Creates a credit for each previously billed transaction, attached to
/// `target`. Each credit gets a fresh identifier.
pub fn reverse_transactions(
    transactions: Vec<PersistedTransaction>,
    target: BillingInvoiceLicenceId,
) -> Vec<NewTransaction> {
    debug!(
        count = transactions.len(),
        billing_invoice_licence_id = %target,
        "reversing previous transactions"
    );
    transactions
        .into_iter()
        .map(|transaction| transaction.into_reversal(target))
        .collect()
}

/// Drops each standard transaction that has a reversed counterpart with the
/// same charge type, category and billable days, consuming that counterpart.
/// Matching is greedy in input order. Returns the kept standard transactions
/// followed by the unmatched reversals.
pub fn cancel_pairs(
    standard: Vec<NewTransaction>,
    reversed: Vec<NewTransaction>,
) -> Vec<NewTransaction> {
    let mut remaining = reversed;
    let mut kept = Vec::with_capacity(standard.len());
    for transaction in standard {
        let counterpart = remaining
            .iter()
            .position(|r| r.cancellation_key() == transaction.cancellation_key());
        match counterpart {
            Some(i) => {
                remaining.remove(i);
            }
            None => kept.push(transaction),
        }
    }
    debug!(
        kept = kept.len(),
        unmatched_reversals = remaining.len(),
        "cancelled matching transaction pairs"
    );
    kept.extend(remaining);
    kept
}

/// Nets freshly calculated transactions against what was billed before:
/// previous transactions are reversed onto `target`, then matching pairs
/// cancel out.
pub fn reconcile_with_previous(
    calculated: Vec<NewTransaction>,
    previous: Vec<PersistedTransaction>,
    target: BillingInvoiceLicenceId,
) -> Vec<NewTransaction> {
    if previous.is_empty() {
        return calculated;
    }
    let reversed = reverse_transactions(previous, target);
    cancel_pairs(calculated, reversed)
}

impl PersistedTransaction {
    fn into_reversal(self, target: BillingInvoiceLicenceId) -> NewTransaction {
        // Exhaustive so that a new column has to be mapped or dropped here.
        let PersistedTransaction {
            id: _,
            billing_invoice_licence_id: _,
            charge_type,
            charge_category_code,
            charge_category_description,
            description,
            authorised_days,
            billable_days,
            volume,
            is_credit: _,
            is_new_licence,
            status: _,
            start_date,
            end_date,
            purposes,
            invoice_account_id: _,
            invoice_account_number: _,
        } = self;

        if purposes.len() > 1 {
            debug!(
                charge_category_code = %charge_category_code,
                extra = purposes.len() - 1,
                "purposes wrapper holds more than one element, keeping the first"
            );
        }

        NewTransaction {
            id: BillingTransactionId::generate(),
            billing_invoice_licence_id: target,
            charge_type,
            charge_category_code,
            charge_category_description,
            description,
            authorised_days,
            billable_days,
            volume,
            is_credit: true,
            is_new_licence,
            status: TransactionStatus::Candidate,
            start_date,
            end_date,
            purposes: purposes.into_iter().next().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::entities::ChargeType;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn persisted(category: &str, billable_days: i64) -> PersistedTransaction {
        PersistedTransaction {
            id: BillingTransactionId(Uuid::new_v4()),
            billing_invoice_licence_id: BillingInvoiceLicenceId(Uuid::new_v4()),
            charge_type: ChargeType::Standard,
            charge_category_code: category.into(),
            charge_category_description: "Medium loss, non-tidal".into(),
            description: "Water abstraction charge: Agriculture".into(),
            authorised_days: 365,
            billable_days,
            volume: 11.0,
            is_credit: false,
            is_new_licence: false,
            status: TransactionStatus::ChargeCreated,
            start_date: d(2022, 4, 1),
            end_date: d(2023, 3, 31),
            purposes: vec![json!([{ "description": "Spray irrigation" }])],
            invoice_account_id: Some("7b1c1c0a-5b1e-4f1a-9f3e-0d6c1c8d2a11".into()),
            invoice_account_number: Some("A12345678A".into()),
        }
    }

    fn new_transaction(category: &str, billable_days: i64, is_credit: bool) -> NewTransaction {
        let target = BillingInvoiceLicenceId(Uuid::new_v4());
        let mut transaction = persisted(category, billable_days).into_reversal(target);
        transaction.is_credit = is_credit;
        transaction
    }

    #[test]
    fn reversal_flips_to_credit_candidate_on_target() {
        let target = BillingInvoiceLicenceId(Uuid::new_v4());
        let source = persisted("4.10.1", 365);
        let source_id = source.id;
        let reversed = reverse_transactions(vec![source], target);

        assert_eq!(reversed.len(), 1);
        let credit = &reversed[0];
        assert!(credit.is_credit);
        assert_eq!(credit.status, TransactionStatus::Candidate);
        assert_eq!(credit.billing_invoice_licence_id, target);
        assert_ne!(credit.id, source_id);
        assert_eq!(credit.billable_days, 365);
        assert_eq!(credit.purposes, json!([{ "description": "Spray irrigation" }]));
    }

    #[test]
    fn reversal_strips_invoice_account_fields() {
        let target = BillingInvoiceLicenceId(Uuid::new_v4());
        let reversed = reverse_transactions(vec![persisted("4.10.1", 365)], target);
        let value = serde_json::to_value(&reversed[0]).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("invoiceAccountId"));
        assert!(!object.contains_key("invoiceAccountNumber"));
        assert!(object.contains_key("billingInvoiceLicenceId"));
    }

    #[test]
    fn reversal_ids_are_unique() {
        let target = BillingInvoiceLicenceId(Uuid::new_v4());
        let reversed = reverse_transactions(
            (0..500).map(|i| persisted("4.10.1", i)).collect(),
            target,
        );
        let ids: HashSet<_> = reversed.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn empty_purposes_unwrap_to_null() {
        let mut source = persisted("4.10.1", 365);
        source.purposes = vec![];
        let target = BillingInvoiceLicenceId(Uuid::new_v4());
        let reversed = reverse_transactions(vec![source], target);
        assert!(reversed[0].purposes.is_null());
    }

    #[test]
    fn multi_element_purposes_keep_the_first() {
        let mut source = persisted("4.10.1", 365);
        source.purposes = vec![
            json!({ "description": "first" }),
            json!({ "description": "second" }),
        ];
        let target = BillingInvoiceLicenceId(Uuid::new_v4());
        let reversed = reverse_transactions(vec![source], target);
        assert_eq!(reversed[0].purposes, json!({ "description": "first" }));
    }

    #[test]
    fn reversing_nothing_yields_nothing() {
        let target = BillingInvoiceLicenceId(Uuid::new_v4());
        assert!(reverse_transactions(vec![], target).is_empty());
    }

    #[test]
    fn matching_pairs_cancel_out() {
        let standard = vec![
            new_transaction("4.10.1", 365, false),
            new_transaction("5.11.2", 265, false),
            new_transaction("6.12.3", 100, false),
        ];
        let reversed = vec![
            new_transaction("4.10.1", 365, true),
            new_transaction("5.11.2", 265, true),
        ];
        let expected = standard[2].clone();

        let result = cancel_pairs(standard, reversed);
        assert_eq!(result, vec![expected]);
    }

    #[test]
    fn unmatched_reversals_are_appended() {
        let standard = vec![new_transaction("4.10.1", 365, false)];
        let reversed = vec![
            new_transaction("4.10.1", 200, true),
            new_transaction("5.11.2", 265, true),
        ];
        let result = cancel_pairs(standard.clone(), reversed.clone());
        assert_eq!(
            result,
            vec![standard[0].clone(), reversed[0].clone(), reversed[1].clone()]
        );
    }

    #[test]
    fn each_reversal_cancels_at_most_once() {
        let standard = vec![
            new_transaction("4.10.1", 365, false),
            new_transaction("4.10.1", 365, false),
        ];
        let reversed = vec![new_transaction("4.10.1", 365, true)];
        let second = standard[1].clone();
        let result = cancel_pairs(standard, reversed);
        assert_eq!(result, vec![second]);
    }

    #[test]
    fn charge_type_is_part_of_the_match() {
        let standard = vec![new_transaction("4.10.1", 365, false)];
        let mut compensation = new_transaction("4.10.1", 365, true);
        compensation.charge_type = ChargeType::Compensation;
        let result = cancel_pairs(standard.clone(), vec![compensation.clone()]);
        assert_eq!(result, vec![standard[0].clone(), compensation]);
    }

    #[test]
    fn reconcile_without_previous_keeps_calculated() {
        let calculated = vec![new_transaction("4.10.1", 365, false)];
        let target = BillingInvoiceLicenceId(Uuid::new_v4());
        assert_eq!(
            reconcile_with_previous(calculated.clone(), vec![], target),
            calculated
        );
    }

    #[test]
    fn reconcile_nets_unchanged_and_credits_changed() {
        let target = BillingInvoiceLicenceId(Uuid::new_v4());
        let calculated = vec![
            new_transaction("4.10.1", 365, false),
            new_transaction("5.11.2", 200, false),
        ];
        let previous = vec![persisted("4.10.1", 365), persisted("5.11.2", 265)];

        let result = reconcile_with_previous(calculated.clone(), previous, target);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], calculated[1]);
        assert!(result[1].is_credit);
        assert_eq!(result[1].billable_days, 265);
        assert_eq!(result[1].billing_invoice_licence_id, target);
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        assert!(cancel_pairs(vec![], vec![]).is_empty());
    }
}

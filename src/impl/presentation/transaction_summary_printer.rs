use crate::entities::NewTransaction;

pub(crate) struct TransactionSummaryPrinter;

impl TransactionSummaryPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// One line per transaction, e.g.
    /// `debit   standard      4.10.1    365/365 days  2022-04-01..2023-03-31`.
    pub(crate) fn print_summary(&self, transactions: &[NewTransaction]) -> String {
        if transactions.is_empty() {
            return "; no transactions\n".to_string();
        }
        let mut output = String::new();
        for t in transactions {
            output.push_str(&format!(
                "{:<7} {:<13} {:<9} {:>3}/{:<3} days  {}..{}\n",
                if t.is_credit { "credit" } else { "debit" },
                t.charge_type,
                t.charge_category_code,
                t.billable_days,
                t.authorised_days,
                t.start_date,
                t.end_date,
            ));
        }
        output
    }
}

// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod charge_references_csv_datasource;
        pub(crate) mod previous_transactions_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod abstraction_period_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod persisted_transaction_model;
        pub(crate) mod volume_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod billing_records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod abstraction_days;
        pub(crate) mod abstraction_period;
        pub(crate) mod billing_config;
        pub(crate) mod billing_context;
        pub(crate) mod billing_records;
        pub(crate) mod billing_transaction;
        pub(crate) mod charge_reference;
        pub(crate) mod date_range;
    }
    pub(crate) mod logic {
        pub(crate) mod abstraction_period_resolver;
        pub(crate) mod billable_days_calculator;
        pub(crate) mod billing_periods;
        pub(crate) mod date_range_consolidator;
        pub(crate) mod transaction_generator;
        pub(crate) mod transaction_reversal;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod billing_records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod process_transactions_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod abstraction_period_fmt;
    pub(crate) mod transaction_summary_printer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::abstraction_days::*;
        pub use crate::domain::entities::abstraction_period::*;
        pub use crate::domain::entities::billing_config::*;
        pub use crate::domain::entities::billing_context::*;
        pub use crate::domain::entities::billing_records::*;
        pub use crate::domain::entities::billing_transaction::*;
        pub use crate::domain::entities::charge_reference::*;
        pub use crate::domain::entities::date_range::*;
    }

    pub mod calculations {
        pub use crate::domain::logic::abstraction_period_resolver::resolve_abstraction_periods;
        pub use crate::domain::logic::billable_days_calculator::calculate_abstraction_days;
        pub use crate::domain::logic::billing_periods::{
            determine_billing_periods, determine_charge_period, financial_year,
        };
        pub use crate::domain::logic::date_range_consolidator::consolidate_date_ranges;
        pub use crate::domain::logic::transaction_reversal::{
            cancel_pairs, reconcile_with_previous, reverse_transactions,
        };
    }
}

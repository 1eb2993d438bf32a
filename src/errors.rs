use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidVolume,
    "Invalid volume: '{value}'.",
    { value: &str }
);

// Date-related.
define_client_error!(
    InvalidCalendarDayMonth,
    "Invalid calendar day/month: day {day}, month {month}.",
    { day: u32, month: u32 }
);
define_client_error!(
    InvalidDateRange,
    "Invalid date range: start date ({start_date}) is after end date ({end_date}).",
    { start_date: &NaiveDate, end_date: &NaiveDate }
);
define_internal_error!(
    DateOutOfRange,
    "Date calculation out of supported range: {details}.",
    { details: &str }
);

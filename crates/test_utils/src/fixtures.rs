//! Pre-built Test Fixtures
//!
//! Consistent, predictable test data shared across the suite.

use chrono::NaiveDate;

/// Tax identifier fixtures
pub struct TaxIdFixtures;

impl TaxIdFixtures {
    /// A shape-valid VAT number with the country prefix
    pub const VALID_WITH_PREFIX: &'static str = "IT12345678901";
    /// The same VAT number without the prefix
    pub const VALID_BARE: &'static str = "12345678901";
    /// Ten digits - one short of a valid VAT number
    pub const TOO_SHORT: &'static str = "IT1234567890";
    /// Right length, wrong characters
    pub const ALPHABETIC: &'static str = "ABCDEFGHIJK";
    /// A shape-valid personal fiscal code
    pub const FISCAL_CODE: &'static str = "RSSMRA80A01H501U";
}

/// Calendar fixtures
pub struct DateFixtures;

impl DateFixtures {
    /// Default issue date used by builders
    pub fn issue_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    /// A reference "today" for deadline tests
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    /// A due date before [`today`](Self::today)
    pub fn past_due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 30).unwrap()
    }

    /// A due date after [`today`](Self::today)
    pub fn future_due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
    }
}

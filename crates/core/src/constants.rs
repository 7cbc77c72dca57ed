/// Quantity threshold below which a lot or position is considered empty
pub const QUANTITY_THRESHOLD: &str = "0.00000001";

/// Holding period, in days, beyond which a realized gain is long-term
pub const LONG_TERM_HOLDING_DAYS: &str = "365.25";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

// Default tax rates. Placeholder estimates only, not tax advice.

/// Default rate applied to short-term capital gains
pub const DEFAULT_SHORT_TERM_CAPITAL_GAINS_RATE: &str = "0.24";

/// Default rate applied to long-term capital gains
pub const DEFAULT_LONG_TERM_CAPITAL_GAINS_RATE: &str = "0.15";

/// Default rate applied to qualified dividend income
pub const DEFAULT_QUALIFIED_DIVIDEND_RATE: &str = "0.15";

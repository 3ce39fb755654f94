use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Balances with an absolute value below this threshold are treated as
/// zero and dropped from tracking (absorbs floating-point noise in
/// upstream data).
pub const BALANCE_EPSILON: Decimal = dec!(0.000001);

/// Decimal precision for aggregate calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default refresh interval in minutes (twice a day)
pub const DEFAULT_REFRESH_INTERVAL_MINUTES: u64 = 720;

/// Stable identifier for the primary net worth aggregate
pub const NET_WORTH_ENTITY_ID: &str = "net_worth";

/// Identifier prefix for per-currency net worth aggregates
pub const NET_WORTH_CURRENCY_PREFIX: &str = "net_worth_";

pub mod equal_split;
pub mod rounding;
pub mod settlement_calculator;

pub use equal_split::{PERCENT_TOLERANCE, equal_split, is_whole};
pub use rounding::{round_money, share_of};
pub use settlement_calculator::SettlementCalculator;

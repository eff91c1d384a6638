pub mod lots;
pub mod sect;

pub use lots::{calculate_lot, calculate_lot_of_fortune, calculate_lot_of_spirit, Lot, LotName};
pub use sect::{is_day_chart_by_angles, Sect};

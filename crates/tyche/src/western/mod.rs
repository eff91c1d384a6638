pub mod bounds;
pub mod dignities;
pub mod rulers;
pub mod rulership;

pub use bounds::{bounds_for, get_bound_ruler, Bound, EGYPTIAN_BOUNDS};
pub use dignities::{get_dignity, Dignity, DignityType};
pub use rulers::get_dispositor;
pub use rulership::{
    get_chart_ruler_report, get_house_ruler, get_house_rulers_report, ChartRulerReport,
    HouseRulerReport, RulerPlacement,
};

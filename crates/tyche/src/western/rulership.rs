//! House rulers and the chart ruler.
//!
//! The chart ruler is the dispositor of the first house's sign. Reports are
//! pure functions of an assembled chart; a ruler missing from the chart's
//! placements yields a degraded report rather than an error.

use crate::chart::{Chart, HouseCusp};
use crate::western::dignities::{get_dignity, Dignity, DignityType};
use crate::western::rulers::get_dispositor;
use crate::zodiac::{Body, Sign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRulerReport {
    pub house_number: u8,
    pub sign: Sign,
    pub ruler: Body,
}

/// Where the chart ruler sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulerPlacement {
    pub sign: Sign,
    pub house: u8,
    pub dignity: Dignity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRulerReport {
    pub ruler: Body,
    pub ascendant_sign: Sign,
    /// `None` when the ruler has no placement in the chart
    pub placement: Option<RulerPlacement>,
    pub description: String,
}

/// Sign of a house, defaulting to Aries when the house is missing
fn house_sign(number: u8, houses: &[HouseCusp]) -> Sign {
    houses
        .iter()
        .find(|h| h.number == number)
        .map(|h| h.sign)
        .unwrap_or(Sign::Aries)
}

/// Dispositor of a house's cusp sign.
pub fn get_house_ruler(house_number: u8, houses: &[HouseCusp]) -> Body {
    get_dispositor(house_sign(house_number, houses))
}

/// One entry per house cusp in the chart, in chart order.
pub fn get_house_rulers_report(chart: &Chart) -> Vec<HouseRulerReport> {
    chart
        .houses()
        .iter()
        .map(|house| HouseRulerReport {
            house_number: house.number,
            sign: house.sign,
            ruler: get_dispositor(house.sign),
        })
        .collect()
}

pub fn get_chart_ruler_report(chart: &Chart) -> ChartRulerReport {
    let ascendant_sign = house_sign(1, chart.houses());
    let ruler = get_dispositor(ascendant_sign);

    let Some(found) = chart.placement(ruler) else {
        log::warn!("Chart ruler {} has no placement in the chart", ruler);
        return ChartRulerReport {
            ruler,
            ascendant_sign,
            placement: None,
            description: format!(
                "The ruler of your Ascendant ({}) is {}, but its position could not be calculated.",
                ascendant_sign, ruler
            ),
        };
    };

    let dignity = get_dignity(ruler, found.sign);
    let mut description = format!(
        "The ruler of your chart is {}, located in {} in House {}.",
        ruler, found.sign, found.house
    );
    if dignity.dignity_type != DignityType::Peregrine {
        description.push_str(&format!(
            " It is in {}, giving it extra strength/prominence.",
            dignity.dignity_type
        ));
    }

    ChartRulerReport {
        ruler,
        ascendant_sign,
        placement: Some(RulerPlacement {
            sign: found.sign,
            house: found.house,
            dignity,
        }),
        description,
    }
}

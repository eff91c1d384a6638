mod common;

use chrono::{TimeZone, Utc};
use common::{equal_cusps, StubProvider};
use std::sync::Arc;
use tyche::aspects::AspectType;
use tyche::chart::{ChartAssembler, ChartError, ChartMetadata};
use tyche::hellenistic::{LotName, Sect};
use tyche::houses::HouseSystem;
use tyche::zodiac::{Body, Sign};

fn birth() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(1990, 1, 1, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn test_whole_sign_chart_end_to_end() {
    let provider = StubProvider::whole_sign(270.0, 180.0).with_position(Body::Sun, 280.5, 1.0);
    let assembler = ChartAssembler::new(Arc::new(provider));

    let chart = assembler
        .calculate_chart(birth(), 51.5, -0.1, HouseSystem::WholeSign)
        .await
        .unwrap();

    let sun = chart.placement(Body::Sun).unwrap();
    assert_eq!(sun.sign, Sign::Capricorn);
    assert_eq!(sun.position.degrees, 10);
    assert!((sun.degree_in_sign - 10.5).abs() < 1e-9);
    assert_eq!(sun.house, 1);

    let angles = chart.angles();
    assert_eq!(angles.asc, 270.0);
    assert_eq!(angles.mc, 180.0);
    assert_eq!(angles.dsc, 90.0);
    assert_eq!(angles.ic, 0.0);

    assert_eq!(chart.houses().len(), 12);
    assert_eq!(chart.house(1).unwrap().sign, Sign::Capricorn);
    assert_eq!(chart.house(7).unwrap().sign, Sign::Cancer);
}

#[tokio::test]
async fn test_chart_lists_every_body_once() {
    let assembler = ChartAssembler::new(Arc::new(StubProvider::whole_sign(270.0, 180.0)));
    let chart = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await
        .unwrap();

    assert_eq!(chart.planets().len(), 12);
    for body in Body::TRACKED {
        assert_eq!(chart.planets().iter().filter(|p| p.body == body).count(), 1);
    }
    assert!(chart.placement(Body::SouthNode).is_some());
}

#[tokio::test]
async fn test_south_node_opposes_north_node() {
    let provider = StubProvider::whole_sign(270.0, 180.0).with_position(Body::NorthNode, 10.0, -0.05);
    let assembler = ChartAssembler::new(Arc::new(provider));
    let chart = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await
        .unwrap();

    let north = chart.placement(Body::NorthNode).unwrap();
    let south = chart.placement(Body::SouthNode).unwrap();
    assert_eq!(north.sign, Sign::Aries);
    assert_eq!(south.sign, Sign::Libra);
    assert!((south.position.total_degrees - 190.0).abs() < 1e-9);
    assert!(south.is_retrograde);
    // Aries is the 4th sign from Capricorn, Libra the 10th
    assert_eq!(north.house, 4);
    assert_eq!(south.house, 10);
}

#[tokio::test]
async fn test_placidus_houses_follow_cusps() {
    let provider = StubProvider::new(0.0, 270.0, equal_cusps(0.0))
        .with_position(Body::Sun, 15.0, 1.0)
        .with_position(Body::Moon, 350.0, 13.0)
        .with_position(Body::Mars, 45.0, 0.5);
    let assembler = ChartAssembler::new(Arc::new(provider));
    let chart = assembler
        .calculate_chart(birth(), 40.0, -74.0, HouseSystem::Placidus)
        .await
        .unwrap();

    assert_eq!(chart.placement(Body::Sun).unwrap().house, 1);
    assert_eq!(chart.placement(Body::Moon).unwrap().house, 12);
    assert_eq!(chart.placement(Body::Mars).unwrap().house, 2);
    assert_eq!(chart.meta().house_system, HouseSystem::Placidus);
}

#[tokio::test]
async fn test_placidus_uneven_cusps_wrap() {
    let cusps = [
        10.0, 35.0, 65.0, 100.0, 135.0, 165.0, 190.0, 215.0, 245.0, 280.0, 315.0, 345.0,
    ];
    let provider = StubProvider::new(10.0, 280.0, cusps)
        .with_position(Body::Sun, 5.0, 1.0)
        .with_position(Body::Moon, 100.0, 13.0)
        .with_position(Body::Venus, 359.9, 1.2);
    let assembler = ChartAssembler::new(Arc::new(provider));
    let chart = assembler
        .calculate_chart(birth(), 40.0, -74.0, HouseSystem::Placidus)
        .await
        .unwrap();

    assert_eq!(chart.placement(Body::Sun).unwrap().house, 12);
    assert_eq!(chart.placement(Body::Moon).unwrap().house, 4);
    assert_eq!(chart.placement(Body::Venus).unwrap().house, 12);
}

#[tokio::test]
async fn test_retrograde_flag_from_speed() {
    let provider = StubProvider::whole_sign(0.0, 270.0)
        .with_position(Body::Mercury, 200.0, -0.4)
        .with_position(Body::Venus, 210.0, 1.1);
    let assembler = ChartAssembler::new(Arc::new(provider));
    let chart = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await
        .unwrap();

    let mercury = chart.placement(Body::Mercury).unwrap();
    assert!(mercury.is_retrograde);
    assert_eq!(mercury.speed, -0.4);
    assert!(!chart.placement(Body::Venus).unwrap().is_retrograde);
}

#[tokio::test]
async fn test_aspects_skip_south_node() {
    let provider = StubProvider::whole_sign(270.0, 180.0).with_position(Body::Sun, 280.5, 1.0);
    let assembler = ChartAssembler::new(Arc::new(provider));
    let chart = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await
        .unwrap();

    // Ten bodies share 270° and the Sun is 10.5° away from all of them
    assert_eq!(chart.aspects().len(), 45);
    for aspect in chart.aspects() {
        assert_eq!(aspect.aspect_type(), AspectType::Conjunction);
        assert_eq!(aspect.orb(), 0.0);
        assert!(aspect.aspect.is_exact);
        assert!(!aspect.aspect.is_applying);
        assert_ne!(aspect.body1, Body::Sun);
        assert_ne!(aspect.body2, Body::Sun);
        assert_ne!(aspect.body1, Body::SouthNode);
        assert_ne!(aspect.body2, Body::SouthNode);
    }
    assert!(chart
        .aspects()
        .iter()
        .any(|a| a.involves(Body::NorthNode, Body::Moon)));
}

#[tokio::test]
async fn test_sect_and_lots_use_angles() {
    let provider = StubProvider::whole_sign(270.0, 180.0)
        .with_position(Body::Sun, 280.5, 1.0)
        .with_position(Body::Moon, 270.0, 13.0);
    let assembler = ChartAssembler::new(Arc::new(provider));
    let chart = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await
        .unwrap();

    assert_eq!(chart.sect(), Sect::Day);
    assert!(chart.meta().is_day_chart);

    let fortune = chart.lot(LotName::Fortune).unwrap();
    assert!((fortune.total_degrees - 259.5).abs() < 1e-9);
    assert_eq!(fortune.sign, Sign::Sagittarius);
    assert_eq!(fortune.degree, 19);
    assert_eq!(fortune.house, 12);

    let spirit = chart.lot(LotName::Spirit).unwrap();
    assert!((spirit.total_degrees - 280.5).abs() < 1e-9);
    assert_eq!(spirit.sign, Sign::Capricorn);
    assert_eq!(spirit.house, 1);
}

#[tokio::test]
async fn test_night_chart() {
    let provider = StubProvider::whole_sign(0.0, 270.0)
        .with_position(Body::Sun, 280.0, 1.0)
        .with_position(Body::Moon, 90.0, 13.0);
    let assembler = ChartAssembler::new(Arc::new(provider));
    let chart = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await
        .unwrap();

    assert_eq!(chart.sect(), Sect::Night);
    // Night Fortune: Asc + Sun - Moon
    assert!((chart.lot(LotName::Fortune).unwrap().total_degrees - 190.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_non_finite_provider_data_is_rejected() {
    let provider = StubProvider::new(0.0, 270.0, [f64::NAN; 12]);
    let assembler = ChartAssembler::new(Arc::new(provider));
    let result = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::Placidus)
        .await;
    assert!(matches!(result, Err(ChartError::InvalidProviderData { .. })));
}

#[tokio::test]
async fn test_failed_body_yields_error_not_partial_chart() {
    let provider = Arc::new(
        StubProvider::whole_sign(270.0, 180.0).with_position(Body::Sun, 280.5, 1.0),
    );
    provider.set_fail_on(Some(Body::Saturn));
    let assembler = ChartAssembler::new(provider.clone());

    let result = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await;
    match result {
        Err(ChartError::Ephemeris(e)) => assert!(e.to_string().contains("Saturn")),
        other => panic!("expected ephemeris error, got {:?}", other.map(|_| ())),
    }
    // Requests stop at the failing body
    assert_eq!(
        provider.position_calls.load(std::sync::atomic::Ordering::SeqCst),
        7
    );

    let healthy = ChartAssembler::new(Arc::new(StubProvider::whole_sign(270.0, 180.0)));
    let chart = healthy
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await
        .unwrap();
    assert_eq!(chart.planets().len(), 12);
}

#[tokio::test]
async fn test_metadata_is_merged_not_mutated() {
    let assembler = ChartAssembler::new(Arc::new(StubProvider::whole_sign(270.0, 180.0)));
    let chart = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await
        .unwrap();
    let original = chart.clone();

    let named = chart.with_metadata(ChartMetadata {
        name: Some("Ada".to_string()),
        ..Default::default()
    });
    let placed = named.clone().with_metadata(ChartMetadata {
        city: Some("London".to_string()),
        unknown_time: Some(true),
        ..Default::default()
    });

    assert_eq!(original.meta().details, ChartMetadata::default());
    assert_eq!(named.meta().details.city, None);
    assert_eq!(placed.meta().details.name.as_deref(), Some("Ada"));
    assert_eq!(placed.meta().details.city.as_deref(), Some("London"));
    assert_eq!(placed.meta().details.unknown_time, Some(true));
    assert_eq!(placed.planets(), original.planets());
}

#[tokio::test]
async fn test_chart_json_shape() {
    let provider = StubProvider::whole_sign(270.0, 180.0).with_position(Body::Sun, 280.5, 1.0);
    let assembler = ChartAssembler::new(Arc::new(provider));
    let chart = assembler
        .calculate_chart(birth(), 0.0, 0.0, HouseSystem::WholeSign)
        .await
        .unwrap()
        .with_metadata(ChartMetadata {
            name: Some("Ada".to_string()),
            ..Default::default()
        });

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["planets"][0]["name"], "Sun");
    assert_eq!(json["planets"][0]["sign"], "Capricorn");
    assert_eq!(json["planets"][0]["isRetrograde"], false);
    assert_eq!(json["angles"]["asc"], 270.0);
    assert_eq!(json["meta"]["isDayChart"], true);
    assert_eq!(json["meta"]["houseSystem"], "whole_sign");
    assert_eq!(json["meta"]["name"], "Ada");
    assert!(json["meta"].get("city").is_none());
    assert_eq!(json["aspects"][0]["type"], "Conjunction");
}

#![cfg(feature = "serde")]

use em_fields::prelude::*;

#[test]
fn bar_magnet_round_trips() {
    let magnet = BarMagnet::new(R3::new(2.0, 1.0, 0.0), R3::new(0.0, -1.0, 0.0), 3.0, 0.5).unwrap();
    let json = serde_json::to_string(&magnet).unwrap();
    assert_eq!(serde_json::from_str::<BarMagnet>(&json).unwrap(), magnet);
}

#[test]
fn bar_magnet_json_goes_through_validation() {
    let too_wide = r#"{"north":[0,1,0],"south":[0,-1,0],"height":1.0,"width":5.0}"#;
    let err = serde_json::from_str::<BarMagnet>(too_wide).unwrap_err();
    assert!(err.to_string().contains("taller than its width"));

    let coincident = r#"{"north":[0,1,0],"south":[0,1,0],"height":2.0,"width":0.5}"#;
    let err = serde_json::from_str::<BarMagnet>(coincident).unwrap_err();
    assert!(err.to_string().contains("poles coincide"));
}

#[test]
fn field_config_round_trips_and_rejects_bad_thresholds() {
    let cfg = FieldConfig::default().with_near_field_threshold(0.2).unwrap();
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(json, r#"{"near_field":{"threshold":0.2}}"#);
    assert_eq!(serde_json::from_str::<FieldConfig>(&json).unwrap(), cfg);

    for bad in ["-0.1", "0.0", "1e-300"] {
        let json = format!(r#"{{"near_field":{{"threshold":{bad}}}}}"#);
        assert!(serde_json::from_str::<FieldConfig>(&json).is_err(), "accepted {bad}");
    }
    assert!(serde_json::from_str::<NearFieldRule>(r#"{"threshold":0.0}"#).is_err());
}

#[test]
fn sampling_grid_round_trips_and_rejects_bad_steps() {
    let grid = SamplingGrid::new((-1.0, 1.0), (-2.0, 2.0), 0.25).unwrap().at_depth(0.5);
    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(serde_json::from_str::<SamplingGrid>(&json).unwrap(), grid);

    let zero_step = r#"{"x_range":[0.0,1.0],"y_range":[0.0,1.0],"step":0.0,"z":0.0}"#;
    assert!(serde_json::from_str::<SamplingGrid>(zero_step).is_err());
    let tiny_step = r#"{"x_range":[-7.0,7.0],"y_range":[-4.0,4.0],"step":1e-300,"z":0.0}"#;
    assert!(serde_json::from_str::<SamplingGrid>(tiny_step).is_err());
}

#[test]
fn electric_field_round_trips_with_its_config() {
    let field = ElectricField::with_config(
        [PointCharge::new(R3::new(1.0, 0.0, 0.0), -2.0)],
        FieldConfig::default().with_near_field_threshold(0.01).unwrap(),
    );
    let json = serde_json::to_string(&field).unwrap();
    let back: ElectricField = serde_json::from_str(&json).unwrap();
    assert_eq!(back.charges(), field.charges());
    assert_eq!(back.config(), field.config());
    assert_eq!(back.field_at(R3::new(3.0, 1.0, 0.0)), field.field_at(R3::new(3.0, 1.0, 0.0)));
}

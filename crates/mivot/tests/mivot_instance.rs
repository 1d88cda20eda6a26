//! Integration tests for building, updating and projecting MIVOT instances.

use mivot::{Field, InstanceBuilder, MivotConfig, MivotError, MivotInstance, MivotViewer};
use serde_json::{json, Map, Value};

fn builder() -> InstanceBuilder {
    InstanceBuilder::new(MivotConfig::activated())
}

/// Time series point as resolved from a Gaia light-curve annotation.
fn ts_point() -> Value {
    json!({
        "dmtype": "cube:NDPoint",
        "dmrole": "",
        "dmid": "_ts_data",
        "cube:NDPoint.observable": [
            {
                "dmtype": "cube:Observable",
                "cube:DataAxis.dependent": {"dmtype": "ivoa:boolean", "value": true},
                "cube:MeasurementAxis.measure": {
                    "dmtype": "meas:Time",
                    "meas:Time.coord": {
                        "dmtype": "coords:MJD",
                        "coords:MJD.date": {"dmtype": "ivoa:real", "ref": "time", "unit": "d", "value": null},
                    },
                },
            },
            {
                "dmtype": "cube:Observable",
                "cube:DataAxis.dependent": {"dmtype": "ivoa:boolean", "value": true},
                "cube:MeasurementAxis.measure": {
                    "dmtype": "meas:GenericMeasure",
                    "meas:GenericMeasure.coord": {
                        "dmtype": "coords:PhysicalCoordinate",
                        "coords:PhysicalCoordinate.cval": {"dmtype": "ivoa:real", "ref": "mag", "unit": "mag", "value": null},
                    },
                    "meas:Measure.error": {
                        "dmtype": "meas:Error",
                        "meas:Error.statError": {
                            "dmtype": "meas:Symmetrical",
                            "meas:Symmetrical.radius": {"dmtype": "ivoa:real", "ref": "mag_err", "unit": "mag", "value": null},
                        },
                    },
                },
            },
        ],
    })
}

fn ts_row() -> Value {
    json!({"time": 1705.9437360200984, "mag": "15.216320", "mag_err": 0.0041})
}

#[test]
fn builds_the_model_shape() {
    let point = builder().build(&ts_point()).unwrap();

    assert_eq!(point.dmtype(), Some("NDPoint"));
    assert_eq!(point.scalar("dmid"), Some(&json!("_ts_data")));
    let observables = point.collection("observable").unwrap();
    assert_eq!(observables.len(), 2);

    let time = &observables[0];
    assert!(time.instance("dependent").unwrap().is_leaf());
    let measure = time.instance("MeasurementAxis_measure").unwrap();
    let coord = measure.instance("Time_coord").unwrap();
    let date = coord.instance("date").unwrap();
    assert_eq!(date.dmtype(), Some("real"));
    assert_eq!(date.unit(), Some("d"));
    assert_eq!(date.astropy_unit().unwrap().physical_type, "time");

    let mag = &observables[1];
    let error = mag
        .instance("MeasurementAxis_measure")
        .and_then(|m| m.instance("Measure_error"))
        .and_then(|e| e.instance("Error_statError"))
        .and_then(|s| s.instance("radius"))
        .unwrap();
    assert_eq!(error.column_ref(), Some("mag_err"));
}

#[test]
fn updates_every_bound_attribute_in_place() {
    let mut point = builder().build(&ts_point()).unwrap();
    point.update(&ts_row(), None).unwrap();

    assert_eq!(
        point.dict()["observable"],
        json!([
            {
                "dmtype": "Observable",
                "dependent": {"value": true},
                "MeasurementAxis_measure": {
                    "dmtype": "Time",
                    "Time_coord": {
                        "dmtype": "MJD",
                        "date": {"unit": "d", "value": 1705.9437360200984},
                    },
                },
            },
            {
                "dmtype": "Observable",
                "dependent": {"value": true},
                "MeasurementAxis_measure": {
                    "dmtype": "GenericMeasure",
                    "GenericMeasure_coord": {
                        "dmtype": "PhysicalCoordinate",
                        "cval": {"unit": "mag", "value": 15.21632},
                    },
                    "Measure_error": {
                        "dmtype": "Error",
                        "Error_statError": {
                            "dmtype": "Symmetrical",
                            "radius": {"unit": "mag", "value": 0.0041},
                        },
                    },
                },
            },
        ])
    );
}

#[test]
fn float_attribute_bound_to_c1() {
    let mut root = builder()
        .build(&json!({
            "dmtype": "test:Root",
            "test:Root.x": {"dmtype": "float", "ref": "c1", "value": null},
        }))
        .unwrap();

    root.update(&json!({"c1": "3.5"}), None).unwrap();
    assert_eq!(root.instance("x").unwrap().value(), Some(&json!(3.5)));

    // Without a column reference the leaf is left alone
    let leaf = root.instance_mut("x").unwrap();
    leaf.update(&json!({"c1": "7.0"}), None).unwrap();
    assert_eq!(leaf.value(), Some(&json!(3.5)));
}

#[test]
fn collections_keep_order_and_propagate_updates() {
    let items: Vec<Value> = (0..5)
        .map(|i| json!({"dmtype": "ivoa:real", "ref": format!("c{i}"), "value": null}))
        .collect();
    let mut instance = builder()
        .build(&json!({"dmtype": "test:Bag", "test:Bag.items": items}))
        .unwrap();

    let refs: Vec<_> = instance
        .collection("items")
        .unwrap()
        .iter()
        .map(|item| item.column_ref().unwrap().to_string())
        .collect();
    assert_eq!(refs, vec!["c0", "c1", "c2", "c3", "c4"]);

    // Collection items are updated without a column reference: leaves
    // placed directly in a collection keep their value.
    let row = json!({"c0": 0.0, "c1": 1.0, "c2": 2.0, "c3": 3.0, "c4": 4.0});
    instance.update(&row, None).unwrap();
    assert!(instance
        .collection("items")
        .unwrap()
        .iter()
        .all(|item| item.value() == Some(&Value::Null)));

    // Items wrapping their attribute are refreshed
    let wrapped: Vec<Value> = (0..5)
        .map(|i| json!({"dmtype": "test:Item", "test:Item.v": {"dmtype": "ivoa:real", "ref": format!("c{i}"), "value": null}}))
        .collect();
    let mut instance = builder()
        .build(&json!({"dmtype": "test:Bag", "test:Bag.items": wrapped}))
        .unwrap();
    instance.update(&row, None).unwrap();
    let values: Vec<_> = instance
        .collection("items")
        .unwrap()
        .iter()
        .map(|item| item.instance("v").unwrap().value().cloned().unwrap())
        .collect();
    assert_eq!(values, vec![json!(0.0), json!(1.0), json!(2.0), json!(3.0), json!(4.0)]);
}

#[test]
fn full_projection_round_trips_the_dictionary() {
    let dict = json!({
        "dmtype": "mango:EpochPosition",
        "dmrole": "mango:MangoObject.propertyDock",
        "mango:EpochPosition.longitude": {"dmtype": "ivoa:real", "ref": "RAICRS", "unit": "deg", "value": 52.2},
        "mango:EpochPosition.parallax": {"dmtype": "ivoa:real", "ref": "null", "unit": "mas", "value": 6.2},
        "mango:EpochPosition.coordSys": {
            "dmtype": "coords:SpaceSys",
            "coords:PhysicalCoordSys.frame": {
                "dmtype": "coords:SpaceFrame",
                "coords:SpaceFrame.spaceRefFrame": {"dmtype": "ivoa:string", "ref": "null", "value": "ICRS"},
            },
        },
    });
    let instance = builder().build(&dict).unwrap();
    let projected = instance.hk_dict();
    assert_contains_normalized(&dict, &projected);

    // Projecting twice gives the same view
    assert_eq!(projected, instance.hk_dict());
    assert_eq!(instance.dict(), instance.dict());
}

/// Every key of `dict` is found, normalized, in `projected` with the same
/// (normalized) scalar value.
fn assert_contains_normalized(dict: &Value, projected: &Value) {
    let (Some(dict), Some(projected)) = (dict.as_object(), projected.as_object()) else {
        panic!("expected objects: {dict} / {projected}");
    };
    for (key, value) in dict {
        match value {
            Value::Object(inner) => {
                let name = if mivot::is_leaf_dict(inner) {
                    mivot_util::normalize(key)
                } else {
                    mivot_util::normalize_role(key)
                };
                let found = projected
                    .get(&*name)
                    .unwrap_or_else(|| panic!("missing `{name}` in {projected:?}"));
                assert_contains_normalized(value, found);
            }
            scalar => {
                let name = mivot_util::normalize(key);
                let found = projected
                    .get(&*name)
                    .unwrap_or_else(|| panic!("missing `{name}` in {projected:?}"));
                let expected = if key == "value" {
                    scalar.clone()
                } else {
                    mivot_util::normalize_value(scalar)
                };
                assert_eq!(found, &expected, "field `{key}`");
            }
        }
    }
}

#[test]
fn slim_projection_hides_housekeeping() {
    let instance = builder()
        .build(&json!({
            "dmtype": "mango:EpochPosition",
            "mango:EpochPosition.pmLatitude": {"dmtype": "ivoa:real", "ref": "pmDE", "unit": "mas/year", "value": -1.2},
            "mango:EpochPosition.epoch": {"dmtype": "ivoa:real", "ref": "null", "unit": "jyear", "value": 2016.0},
            "mango:EpochPosition.flag": {"dmtype": "ivoa:string", "ref": "flag", "unit": "", "value": "ok"},
        }))
        .unwrap();

    let slim = instance.dict();
    assert_eq!(
        slim,
        json!({
            "dmtype": "EpochPosition",
            "pmLatitude": {"unit": "mas/yr", "value": -1.2},
            "epoch": {"unit": "jyear", "value": 2016.0},
            "flag": {"value": "ok"},
        })
    );

    let full = instance.hk_dict();
    assert_eq!(full["pmLatitude"]["astropy_unit"], json!("mas / yr"));
    assert_eq!(full["epoch"]["astropy_unit_time"], json!("jyear"));
    assert_eq!(full["flag"]["unit"], json!(""));
    assert_eq!(full["flag"]["dmtype"], json!("string"));
}

#[test]
fn fields_are_exposed_as_a_closed_union() {
    let point = builder().build(&ts_point()).unwrap();
    let kinds: Map<String, Value> = point
        .fields()
        .map(|(name, field)| {
            let kind = match field {
                Field::Scalar(_) => "scalar",
                Field::Instance(_) => "instance",
                Field::Collection(_) => "collection",
            };
            (name.to_string(), json!(kind))
        })
        .collect();
    assert_eq!(
        Value::Object(kinds),
        json!({"dmtype": "scalar", "dmrole": "scalar", "dmid": "scalar", "observable": "collection"})
    );
}

#[test]
fn viewer_walks_a_table() {
    let rows = vec![
        ts_row(),
        json!({"time": 1706.0, "mag": 15.3, "mag_err": "0.005"}),
        json!({"time": 1707.5, "mag": "--", "mag_err": ""}),
    ];
    let mut viewer = MivotViewer::new(&builder(), &ts_point(), rows).unwrap();

    let mut mags = Vec::new();
    while let Some(point) = viewer.next_row_view().unwrap() {
        let cval = point.collection("observable").unwrap()[1]
            .instance("MeasurementAxis_measure")
            .and_then(|m| m.instance("GenericMeasure_coord"))
            .and_then(|c| c.instance("cval"))
            .and_then(MivotInstance::value)
            .cloned()
            .unwrap();
        mags.push(cval);
    }
    assert_eq!(mags, vec![json!(15.21632), json!(15.3), Value::Null]);
}

#[test]
fn errors_surface_to_the_caller() {
    let err = InstanceBuilder::new(MivotConfig::new())
        .build(&ts_point())
        .unwrap_err();
    assert_eq!(err.to_string(), "prototype feature `MIVOT` is not activated");

    let mut point = builder().build(&ts_point()).unwrap();
    let err = point
        .update(&json!({"time": "yesterday", "mag": 1.0, "mag_err": 1.0}), None)
        .unwrap_err();
    assert!(matches!(err, MivotError::Cast(_)));
    assert!(err.to_string().contains("not a number"));
}

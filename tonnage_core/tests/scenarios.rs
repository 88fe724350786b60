//! End-to-end scenarios through the public API: snapshot in, results out,
//! exercising the full/selective recalculation paths, the warning channel,
//! the display boundary and saved-calculation persistence together.

use std::fs;

use tonnage_core::coordinator::{
    full_recalculation, selective_recalculation, InputChange, Parameters, Snapshot,
};
use tonnage_core::errors::{Diagnostics, WarningCode};
use tonnage_core::file_io::{load_library, save_library, CalculationLibrary, SavedCalculation};
use tonnage_core::materials::catalog;
use tonnage_core::operations::{BendItem, BendType, DrawItem, FormItem, HoleItem, HoleShape};
use tonnage_core::temperature::TemperatureRegime;
use tonnage_core::units::{format_quantity, Quantity, UnitSystem};

fn mild_steel_snapshot(thickness: f64) -> Snapshot {
    Snapshot {
        material: Some(
            catalog::find("mild-steel")
                .unwrap()
                .select(TemperatureRegime::Room),
        ),
        parameters: Parameters {
            thickness,
            ..Parameters::default()
        },
        operations: Default::default(),
    }
}

#[test]
fn perimeter_cut_mild_steel() {
    // 500 mm cut in 2 mm mild steel at room temperature:
    // 500 × 2 × 400 / 1000 = 400 t forward, 280 t reverse at factor 0.7
    let mut snapshot = mild_steel_snapshot(2.0);
    snapshot.operations.perimeter.enabled = true;
    snapshot.operations.perimeter.length = 500.0;

    let mut diag = Diagnostics::new();
    let results = full_recalculation(&snapshot, &mut diag).unwrap();

    assert!((results.total_tonnage - 400.0).abs() < 1e-9);
    assert!((results.reverse_tonnage - 280.0).abs() < 1e-9);
    assert!(diag.is_empty());
}

#[test]
fn punched_holes_scale_with_quantity() {
    // three ø20 holes: π × 20 × 2 × 400 × 3 / 1000 ≈ 150.796 t
    let mut snapshot = mild_steel_snapshot(2.0);
    snapshot.operations.holes.enabled = true;
    snapshot.operations.holes.items.push(HoleItem {
        shape: HoleShape::Circular,
        diameter: 20.0,
        quantity: 3,
        ..HoleItem::new()
    });

    let mut diag = Diagnostics::new();
    let results = full_recalculation(&snapshot, &mut diag).unwrap();
    assert!((results.holes_tonnage - 150.796_447).abs() < 1e-3);
}

#[test]
fn bend_with_angle_and_radius_factors() {
    // 100 × 1² × 400 × 1.3 (120°) × 1.2 (r/t = 2) / 1000 = 62.4 t
    let mut snapshot = mild_steel_snapshot(1.0);
    snapshot.operations.bends.enabled = true;
    snapshot.operations.bends.items.push(BendItem {
        bend_type: BendType::VBend,
        length: 100.0,
        angle: 120.0,
        radius_to_thickness: 2.0,
        ..BendItem::new()
    });

    let mut diag = Diagnostics::new();
    let results = full_recalculation(&snapshot, &mut diag).unwrap();
    assert!((results.bend_tonnage - 62.4).abs() < 1e-9);

    // the bend also yields a springback estimate with an overbend target
    let springback = results.springback.unwrap();
    assert!(springback.angle > 0.0);
    assert!(springback.compensation_angle > 120.0);
}

#[test]
fn combined_job_totals_are_category_sums() {
    let mut snapshot = mild_steel_snapshot(2.0);
    snapshot.operations.perimeter.enabled = true;
    snapshot.operations.perimeter.length = 300.0;
    snapshot.operations.holes.enabled = true;
    snapshot.operations.holes.items.push(HoleItem::new());
    snapshot.operations.bends.enabled = true;
    snapshot.operations.bends.items.push(BendItem::new());
    snapshot.operations.forms.enabled = true;
    snapshot.operations.forms.items.push(FormItem::new());
    snapshot.operations.draws.enabled = true;
    snapshot.operations.draws.items.push(DrawItem::new());

    let mut diag = Diagnostics::new();
    let results = full_recalculation(&snapshot, &mut diag).unwrap();

    let sum = results.perimeter_tonnage
        + results.holes_tonnage
        + results.bend_tonnage
        + results.form_tonnage
        + results.draw_tonnage;
    assert!((results.total_tonnage - sum).abs() < 1e-9);
    assert!(results.per_piece_total_tonnage > 0.0);

    // every enabled operation gets a recommendation block and a wear entry
    assert_eq!(results.recommendations.len(), 5);
    assert_eq!(results.tool_wear.as_ref().unwrap().operation_data.len(), 5);
    assert!(results.surface_finish.is_some());
}

#[test]
fn no_material_or_thickness_yields_none() {
    let mut diag = Diagnostics::new();

    let mut snapshot = mild_steel_snapshot(2.0);
    snapshot.material = None;
    assert!(full_recalculation(&snapshot, &mut diag).is_none());

    let snapshot = mild_steel_snapshot(0.0);
    assert!(full_recalculation(&snapshot, &mut diag).is_none());
}

#[test]
fn selective_equals_full_for_each_category_change() {
    let mut snapshot = mild_steel_snapshot(2.0);
    snapshot.operations.perimeter.enabled = true;
    snapshot.operations.perimeter.length = 300.0;
    snapshot.operations.holes.enabled = true;
    snapshot.operations.holes.items.push(HoleItem::new());
    snapshot.operations.bends.enabled = true;
    snapshot.operations.bends.items.push(BendItem::new());

    let mut diag = Diagnostics::new();
    let baseline = full_recalculation(&snapshot, &mut diag).unwrap();

    // perimeter change
    snapshot.operations.perimeter.length = 450.0;
    let selective =
        selective_recalculation(&snapshot, Some(&baseline), InputChange::Perimeter, &mut diag)
            .unwrap();
    assert_eq!(selective, full_recalculation(&snapshot, &mut diag).unwrap());

    // bend change on top of that
    snapshot.operations.bends.items[0].angle = 135.0;
    let selective =
        selective_recalculation(&snapshot, Some(&selective), InputChange::Bends, &mut diag)
            .unwrap();
    assert_eq!(selective, full_recalculation(&snapshot, &mut diag).unwrap());
}

#[test]
fn selective_batch_rescale_uses_previous_quantity() {
    let mut snapshot = mild_steel_snapshot(2.0);
    snapshot.operations.perimeter.enabled = true;
    snapshot.operations.perimeter.length = 500.0;
    snapshot.parameters.batch_quantity = 5;

    let mut diag = Diagnostics::new();
    let baseline = full_recalculation(&snapshot, &mut diag).unwrap();
    assert!((baseline.total_tonnage - 2000.0).abs() < 1e-9);

    snapshot.parameters.batch_quantity = 2;
    let rescaled = selective_recalculation(
        &snapshot,
        Some(&baseline),
        InputChange::BatchQuantity,
        &mut diag,
    )
    .unwrap();
    assert!((rescaled.per_piece_total_tonnage - 400.0).abs() < 1e-9);
    assert!((rescaled.total_tonnage - 800.0).abs() < 1e-9);
    assert_eq!(rescaled, full_recalculation(&snapshot, &mut diag).unwrap());
}

#[test]
fn disabled_category_contributes_zero() {
    let mut snapshot = mild_steel_snapshot(2.0);
    snapshot.operations.perimeter.enabled = true;
    snapshot.operations.perimeter.length = 500.0;
    snapshot.operations.forms.enabled = true;
    snapshot.operations.forms.items.push(FormItem::new());

    let mut diag = Diagnostics::new();
    let baseline = full_recalculation(&snapshot, &mut diag).unwrap();
    assert!(baseline.form_tonnage > 0.0);

    snapshot.operations.forms.enabled = false;
    let updated =
        selective_recalculation(&snapshot, Some(&baseline), InputChange::Forms, &mut diag)
            .unwrap();
    assert_eq!(updated.form_tonnage, 0.0);
    assert!((updated.total_tonnage - updated.perimeter_tonnage).abs() < 1e-9);
    assert!(updated.surface_finish.is_none());
}

#[test]
fn tonnage_grows_with_thickness() {
    let mut diag = Diagnostics::new();
    let mut previous = 0.0;
    for thickness in [1.0, 2.0, 4.0, 8.0] {
        let mut snapshot = mild_steel_snapshot(thickness);
        snapshot.operations.perimeter.enabled = true;
        snapshot.operations.perimeter.length = 500.0;
        snapshot.operations.bends.enabled = true;
        snapshot.operations.bends.items.push(BendItem::new());

        let results = full_recalculation(&snapshot, &mut diag).unwrap();
        assert!(results.total_tonnage > previous);
        previous = results.total_tonnage;
    }
}

#[test]
fn tonnage_grows_with_hole_diameter() {
    let mut diag = Diagnostics::new();
    let mut previous = 0.0;
    for diameter in [5.0, 10.0, 20.0, 40.0] {
        let mut snapshot = mild_steel_snapshot(2.0);
        snapshot.operations.holes.enabled = true;
        snapshot.operations.holes.items.push(HoleItem {
            diameter,
            ..HoleItem::new()
        });

        let results = full_recalculation(&snapshot, &mut diag).unwrap();
        assert!(results.holes_tonnage > previous);
        previous = results.holes_tonnage;
    }
}

#[test]
fn tonnage_grows_with_draw_depth() {
    let mut diag = Diagnostics::new();
    let mut previous = 0.0;
    for depth in [5.0, 10.0, 20.0, 40.0] {
        let mut snapshot = mild_steel_snapshot(2.0);
        snapshot.operations.draws.enabled = true;
        snapshot.operations.draws.items.push(DrawItem {
            diameter: 50.0,
            depth,
            ..DrawItem::new()
        });

        let results = full_recalculation(&snapshot, &mut diag).unwrap();
        assert!(results.draw_tonnage > previous);
        previous = results.draw_tonnage;
    }
}

#[test]
fn imperial_snapshot_matches_metric_equivalent() {
    let mut metric = mild_steel_snapshot(2.0);
    metric.operations.perimeter.enabled = true;
    metric.operations.perimeter.length = 500.0;

    let mut imperial = metric.clone();
    imperial.parameters.unit_system = UnitSystem::Imperial;
    imperial.parameters.thickness = 2.0 / 25.4;
    imperial.parameters.temperature = 68.0;
    imperial.operations.perimeter.length = 500.0 / 25.4;

    let mut diag = Diagnostics::new();
    let metric_results = full_recalculation(&metric, &mut diag).unwrap();
    let imperial_results = full_recalculation(&imperial, &mut diag).unwrap();

    // both compute in metric tons; the unit system only moves the display
    assert!((metric_results.total_tonnage - imperial_results.total_tonnage).abs() < 1e-6);
    assert_eq!(
        format_quantity(metric_results.total_tonnage, Quantity::Tonnage, UnitSystem::Metric),
        "400.00 metric t"
    );
    assert_eq!(
        format_quantity(metric_results.total_tonnage, Quantity::Tonnage, UnitSystem::Imperial),
        "440.92 US ton"
    );
}

#[test]
fn invalid_geometry_warns_and_contributes_zero() {
    let mut snapshot = mild_steel_snapshot(2.0);
    snapshot.operations.perimeter.enabled = true;
    snapshot.operations.perimeter.length = 500.0;
    snapshot.operations.holes.enabled = true;
    snapshot.operations.holes.items.push(HoleItem {
        diameter: -5.0,
        ..HoleItem::new()
    });

    let mut diag = Diagnostics::new();
    let results = full_recalculation(&snapshot, &mut diag).unwrap();
    assert_eq!(results.holes_tonnage, 0.0);
    assert!((results.total_tonnage - 400.0).abs() < 1e-9);
    assert!(diag.has(WarningCode::InvalidGeometry));
}

#[test]
fn elevated_temperature_reduces_tonnage() {
    let mut room = mild_steel_snapshot(2.0);
    room.operations.perimeter.enabled = true;
    room.operations.perimeter.length = 500.0;

    let mut hot = room.clone();
    hot.parameters.temperature = 500.0;

    let mut diag = Diagnostics::new();
    let room_results = full_recalculation(&room, &mut diag).unwrap();
    let hot_results = full_recalculation(&hot, &mut diag).unwrap();

    assert_eq!(
        hot_results.temperature_effects.regime,
        TemperatureRegime::Hot
    );
    assert!(hot_results.total_tonnage < room_results.total_tonnage);
}

#[test]
fn saved_calculation_survives_roundtrip() {
    let mut snapshot = mild_steel_snapshot(2.0);
    snapshot.operations.perimeter.enabled = true;
    snapshot.operations.perimeter.length = 500.0;

    let mut diag = Diagnostics::new();
    let results = full_recalculation(&snapshot, &mut diag);

    let mut library = CalculationLibrary::new();
    library.add(SavedCalculation::new("end-to-end", snapshot.clone(), results));

    let path = std::env::temp_dir().join("tonnage_scenarios_roundtrip.json");
    save_library(&library, &path).unwrap();
    let loaded = load_library(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(loaded, library);

    // a reloaded snapshot recomputes to the same record
    let recomputed = full_recalculation(&loaded.calculations[0].snapshot, &mut diag).unwrap();
    assert_eq!(
        recomputed.total_tonnage,
        loaded.calculations[0].results.as_ref().unwrap().total_tonnage
    );
}

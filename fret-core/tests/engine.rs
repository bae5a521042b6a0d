//! Integration tests for the public calculation API:
//! fret tables, classification, gauge lookup and bridge compensation.

use fret_core::{
    compute_fret_positions, compute_recommendation, gauges, layout, string_spacing_at_fret,
    units, InstrumentCategory, NeckParams, RowMarker, StringKind, Unit,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

// ═══════════════════════════════════════════════════════════════════════
// Fret tables
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn strat_scale_fret_table() {
    init_logging();
    let positions = compute_fret_positions(25.5, 24).unwrap();

    assert_eq!(positions.len(), 24);
    assert_eq!(positions[0].distance_from_nut, 1.4312);
    assert!(close(positions[11].distance_from_nut, 12.75, 0.00005));
    assert!(positions.iter().all(|p| p.distance_from_nut < 25.5));
}

#[test]
fn metric_fret_table_is_the_inch_table_scaled() {
    let inches = compute_fret_positions(25.5, 22).unwrap();
    let mm = compute_fret_positions(units::convert(25.5, Unit::Inches, Unit::Millimeters), 22).unwrap();

    for (a, b) in inches.iter().zip(&mm) {
        assert_eq!(a.fret_number, b.fret_number);
        // Both sides are rounded to 4 decimals in their own unit.
        assert!(close(a.distance_from_nut * 25.4, b.distance_from_nut, 0.0051));
    }
}

#[test]
fn spacing_never_passes_the_bridge_width() {
    let params = NeckParams::default();
    let positions = compute_fret_positions(params.scale_length, 36).unwrap();

    assert_eq!(
        string_spacing_at_fret(0, params.nut_width, params.bridge_width, params.scale_length, &positions),
        params.nut_width
    );
    let last = string_spacing_at_fret(36, params.nut_width, params.bridge_width, params.scale_length, &positions);
    assert!(last < params.bridge_width);
    assert!(last > params.nut_width);
}

// ═══════════════════════════════════════════════════════════════════════
// Classification and catalog
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn ukulele_scenario() {
    assert_eq!(fret_core::classify(17.0, 15), InstrumentCategory::Ukulele);

    let set = gauges::default_set(InstrumentCategory::Ukulele);
    assert_eq!(set.id, "standard");
    assert_eq!(set.gauges, &[0.024, 0.031, 0.037, 0.026]);
}

#[test]
fn gauge_lookup_is_scoped_to_its_category() {
    assert!(gauges::set_by_id(InstrumentCategory::ElectricGuitar, "normalTension").is_none());
    assert!(gauges::set_by_id(InstrumentCategory::ClassicalGuitar, "normalTension").is_some());
}

// ═══════════════════════════════════════════════════════════════════════
// Bridge compensation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn range_bounds_every_string() {
    init_logging();
    for (scale, frets) in [(25.5, 24), (25.4, 20), (25.6, 19), (34.0, 21), (17.0, 18), (22.5, 21)] {
        let rec = compute_recommendation(scale, frets, Unit::Inches, None).unwrap();
        let range = rec.compensation_range;
        assert!(range.min <= range.max);
        for comp in &rec.compensations {
            assert!(range.min <= comp.compensation_amount && comp.compensation_amount <= range.max);
            assert!(comp.compensation_amount > 0.001 && comp.compensation_amount < 0.2);
            assert!(comp.explanation_text.contains("gauge"));
        }
        let indices: Vec<u32> = rec.compensations.iter().map(|c| c.string_index).collect();
        assert_eq!(indices, (1..=rec.compensations.len() as u32).collect::<Vec<_>>());
    }
}

#[test]
fn classical_uses_its_own_wound_threshold() {
    let rec = compute_recommendation(650.0, 19, Unit::Millimeters, None).unwrap();
    assert_eq!(rec.category, InstrumentCategory::ClassicalGuitar);

    let kinds: Vec<StringKind> = rec.compensations.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StringKind::Plain,
            StringKind::Wound,
            StringKind::Wound,
            StringKind::Wound,
            StringKind::Wound,
            StringKind::Wound,
        ]
    );
}

#[test]
fn ukulele_strings_are_all_plain() {
    let rec = compute_recommendation(17.0, 15, Unit::Inches, None).unwrap();
    assert!(rec.compensations.iter().all(|c| c.kind == StringKind::Plain));
    assert_eq!(rec.category_tips()[1], "Compensation is usually less than 1mm per string");
}

#[test]
fn metric_recommendation_scales_by_25_4() {
    let heavy = gauges::set_by_id(InstrumentCategory::ElectricGuitar, "heavy").unwrap();
    let inches = compute_recommendation(25.5, 24, Unit::Inches, Some(heavy.gauges)).unwrap();
    let mm = compute_recommendation(647.7, 24, Unit::Millimeters, Some(heavy.gauges)).unwrap();

    assert!(close(inches.compensation_range.min * 25.4, mm.compensation_range.min, 1e-9));
    assert!(close(inches.compensation_range.max * 25.4, mm.compensation_range.max, 1e-9));
    assert!(close(inches.recommended_bridge_position * 25.4, mm.recommended_bridge_position, 1e-9));
}

#[test]
fn custom_gauges_change_the_result() {
    let custom = [0.010, 0.013, 0.017, 0.026, 0.036, 0.046];
    let default = compute_recommendation(25.5, 24, Unit::Inches, None).unwrap();
    let chosen = compute_recommendation(25.5, 24, Unit::Inches, Some(&custom[..])).unwrap();

    assert_eq!(chosen.compensations.len(), 6);
    assert!(chosen.compensations[0].compensation_amount != default.compensations[0].compensation_amount);
}

// ═══════════════════════════════════════════════════════════════════════
// Combined layout and serialized shape
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn layout_combines_table_and_bridge() {
    let params = NeckParams::default();
    let result = layout(&params, Some("medium")).unwrap();

    assert_eq!(result.table.first().map(|row| row.marker), Some(RowMarker::Nut));
    assert_eq!(result.table.last().map(|row| row.marker), Some(RowMarker::Bridge));
    assert_eq!(result.bridge.compensations[5].gauge, 0.049);

    // An id the classified family does not offer falls back to its default.
    let fallback = layout(&params, Some("normalTension")).unwrap();
    assert_eq!(fallback.bridge.compensations[0].gauge, 0.009);
}

#[test]
fn layout_follows_unit_switches() {
    let inches = layout(&NeckParams::default(), None).unwrap();
    let mm = layout(&NeckParams::default().to_unit(Unit::Millimeters), None).unwrap();

    assert_eq!(mm.bridge.category, inches.bridge.category);
    assert_eq!(mm.table.len(), inches.table.len());
    assert!(close(mm.table[1].string_spacing, inches.table[1].string_spacing * 25.4, 0.01));
}

#[test]
fn results_serialize_with_camel_case_names() {
    let rec = compute_recommendation(25.5, 24, Unit::Inches, None).unwrap();
    let json = serde_json::to_value(&rec).unwrap();

    assert_eq!(json["category"], "electricGuitar");
    assert_eq!(json["unit"], "inches");
    assert_eq!(json["compensations"][0]["stringIndex"], 1);
    assert_eq!(json["compensations"][5]["kind"], "wound");
    assert!(json["compensationRange"]["min"].is_number());
    assert!(json["recommendedBridgePosition"].is_number());

    let table = fret_core::build_fret_table(&NeckParams::default()).unwrap();
    let rows = serde_json::to_value(&table).unwrap();
    assert_eq!(rows[0]["marker"], "nut");
    assert_eq!(rows[1]["marker"]["fret"], 1);
    assert_eq!(rows[12]["isOctave"], true);
}

#[test]
fn neck_params_deserialize_with_defaults() {
    let params: NeckParams = serde_json::from_str(r#"{ "scaleLength": 650, "unit": "mm" }"#).unwrap();
    assert_eq!(params.scale_length, 650.0);
    assert_eq!(params.unit, Unit::Millimeters);
    assert_eq!(params.fret_count, 24);
}

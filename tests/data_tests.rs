use salamanca::{Field, LogNormalData, ValidationError};

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_copy_update_leaves_original_untouched() {
    let original = LogNormalData::new(&[Field::inc(10.0), Field::gini(0.3)]);
    let updated = original.update(&[Field::inc(20.0), Field::mean(false)], true);

    assert_eq!(original.inc(), Some(10.0));
    assert_eq!(original.mean(), None);
    assert_eq!(updated.inc(), Some(20.0));
    assert_eq!(updated.mean(), Some(false));
    assert_eq!(updated.gini(), Some(0.3));
}

#[test]
fn test_in_place_update_returns_same_instance() {
    let mut data = LogNormalData::new(&[Field::gini(0.3)]);
    let ptr: *const LogNormalData = &data;
    let returned: *const LogNormalData = data.update_mut(&[Field::inc(5.0)], true);

    assert_eq!(ptr, returned);
    assert_eq!(data.inc(), Some(5.0));
}

#[test]
fn test_without_overwrite_only_fills_unset_fields() {
    let data = LogNormalData::new(&[Field::inc(10.0)]);
    let updated = data.update(&[Field::inc(99.0), Field::theil(0.2)], false);

    assert_eq!(updated.inc(), Some(10.0));
    assert_eq!(updated.theil(), Some(0.2));
}

#[test]
fn test_builder_setters() {
    let data = LogNormalData::default()
        .with_inc(3.0)
        .with_mean(false)
        .with_theil(0.1);
    assert_eq!(
        data,
        LogNormalData::new(&[Field::inc(3.0), Field::mean(false), Field::theil(0.1)])
    );
    assert_eq!(LogNormalData::default().with_gini(0.2).gini(), Some(0.2));
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_add_defaults_fills_gaps() {
    let data = LogNormalData::new(&[Field::gini(0.4)]).add_defaults();
    assert_eq!(data.inc(), Some(1.0));
    assert_eq!(data.mean(), Some(true));
    assert_eq!(data.gini(), Some(0.4));
    assert_eq!(data.theil(), None);
}

#[test]
fn test_add_defaults_keeps_explicit_values() {
    let explicit = LogNormalData::new(&[Field::inc(7.0), Field::mean(false), Field::theil(0.5)]);
    assert_eq!(explicit.add_defaults(), explicit);

    let mut in_place = explicit;
    in_place.add_defaults_mut();
    assert_eq!(in_place, explicit);
}

#[test]
fn test_add_defaults_copy_leaves_original_unset() {
    let data = LogNormalData::new(&[Field::gini(0.4)]);
    let _ = data.add_defaults();
    assert_eq!(data.inc(), None);
}

// ============================================================================
// Check
// ============================================================================

#[test]
fn test_check_accepts_complete_set() {
    let data = LogNormalData::new(&[Field::gini(0.4)]).add_defaults();
    assert_eq!(data.check(), Ok(&data));
}

#[test]
fn test_check_rejects_neither_and_both_measures() {
    let neither = LogNormalData::default().add_defaults();
    assert_eq!(neither.check(), Err(ValidationError::MissingMeasure));

    let both = neither.update(&[Field::gini(0.3), Field::theil(0.2)], true);
    assert_eq!(both.check(), Err(ValidationError::ConflictingMeasures));
}

#[test]
fn test_check_rejects_missing_inc() {
    let data = LogNormalData::new(&[Field::theil(0.2), Field::mean(true)]);
    assert_eq!(data.check(), Err(ValidationError::MissingField("inc")));
}

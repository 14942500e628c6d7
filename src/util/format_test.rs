use super::*;

#[test]
fn format_score_renders_four_decimals() {
    assert_eq!(format_score(Some(0.9812)), "0.9812");
    assert_eq!(format_score(Some(0.5)), "0.5000");
    assert_eq!(format_score(Some(0.0)), "0.0000");
}

#[test]
fn format_score_renders_dash_for_missing_values() {
    assert_eq!(format_score(None), "-");
    assert_eq!(format_score(Some(f64::NAN)), "-");
    assert_eq!(format_score(Some(f64::INFINITY)), "-");
}

#[test]
fn state_tone_buckets_by_substring_case_insensitively() {
    assert_eq!(state_tone("REAL"), StateTone::Authentic);
    assert_eq!(state_tone("looks real"), StateTone::Authentic);
    assert_eq!(state_tone("FAILURE"), StateTone::Failure);
    assert_eq!(state_tone("Zone D (fail)"), StateTone::Failure);
    assert_eq!(state_tone("Zone B"), StateTone::Review);
    assert_eq!(state_tone(""), StateTone::Review);
}

#[test]
fn tone_classes_are_distinct() {
    let authentic = tone_class(StateTone::Authentic);
    let failure = tone_class(StateTone::Failure);
    let review = tone_class(StateTone::Review);
    assert_ne!(authentic, failure);
    assert_ne!(failure, review);
    assert_ne!(authentic, review);
}

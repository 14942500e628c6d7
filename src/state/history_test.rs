use super::*;

fn record(id: i64) -> DetectionRecord {
    DetectionRecord {
        id,
        label_name: format!("label-{id}"),
        state: "Zone A".to_owned(),
        confidence: Some(0.9),
        ssim: None,
        lpips: None,
        rm: None,
        pvr: None,
        original_image_url: format!("https://cdn.example.com/{id}/original.png"),
        heatmap_image_url: format!("https://cdn.example.com/{id}/heatmap.png"),
    }
}

#[test]
fn apply_loaded_selects_first_record_by_default() {
    let mut state = HistoryState::default();
    state.loading = true;

    state.apply_loaded(vec![record(1), record(2)]);

    assert!(!state.loading);
    assert_eq!(state.selected.as_ref().map(|r| r.id), Some(1));
}

#[test]
fn apply_loaded_keeps_existing_selection_when_still_present() {
    let mut state = HistoryState::default();
    state.apply_loaded(vec![record(1), record(2), record(3)]);
    state.select(record(2));

    state.apply_loaded(vec![record(1), record(2)]);

    assert_eq!(state.selected.as_ref().map(|r| r.id), Some(2));
}

#[test]
fn apply_loaded_falls_back_to_first_when_selection_disappeared() {
    let mut state = HistoryState::default();
    state.apply_loaded(vec![record(1), record(2)]);
    state.select(record(2));

    state.apply_loaded(vec![record(3), record(4)]);

    assert_eq!(state.selected.as_ref().map(|r| r.id), Some(3));
}

#[test]
fn apply_loaded_with_empty_list_clears_selection() {
    let mut state = HistoryState::default();
    state.apply_loaded(vec![record(1)]);

    state.apply_loaded(Vec::new());

    assert!(state.selected.is_none());
    assert!(state.records.is_empty());
}

#[test]
fn remove_record_removes_exactly_that_record() {
    let mut state = HistoryState::default();
    state.apply_loaded(vec![record(1), record(2), record(3)]);

    state.remove_record(2);

    let ids: Vec<i64> = state.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn removing_selected_record_promotes_first_remaining() {
    let mut state = HistoryState::default();
    state.apply_loaded(vec![record(1), record(2), record(3)]);
    state.select(record(1));

    state.remove_record(1);

    assert_eq!(state.selected.as_ref().map(|r| r.id), Some(2));
}

#[test]
fn removing_unselected_record_keeps_selection() {
    let mut state = HistoryState::default();
    state.apply_loaded(vec![record(1), record(2), record(3)]);
    state.select(record(3));

    state.remove_record(1);

    assert_eq!(state.selected.as_ref().map(|r| r.id), Some(3));
}

#[test]
fn removing_last_record_clears_selection() {
    let mut state = HistoryState::default();
    state.apply_loaded(vec![record(1)]);

    state.remove_record(1);

    assert!(state.records.is_empty());
    assert!(state.selected.is_none());
}

#[test]
fn begin_delete_blocks_duplicates_but_not_other_records() {
    let mut state = HistoryState::default();

    assert!(state.begin_delete(1));
    assert!(!state.begin_delete(1));
    assert!(state.begin_delete(2));

    assert!(state.is_deleting(1));
    assert!(state.is_deleting(2));
}

#[test]
fn finish_delete_allows_a_new_attempt() {
    let mut state = HistoryState::default();
    assert!(state.begin_delete(1));

    state.finish_delete(1);

    assert!(!state.is_deleting(1));
    assert!(state.begin_delete(1));
}

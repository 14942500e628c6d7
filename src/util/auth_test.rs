use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn counting_subscription() -> (AuthSubscription, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let subscription = subscribe_auth(move || counter.set(counter.get() + 1));
    (subscription, count)
}

#[test]
fn get_reflects_most_recent_set_or_remove() {
    test_storage::clear();
    assert_eq!(get_access_token(), None);

    set_access_token("tok1");
    assert_eq!(get_access_token(), Some("tok1".to_owned()));
    assert!(is_logged_in());

    set_access_token("tok2");
    assert_eq!(get_access_token(), Some("tok2".to_owned()));

    remove_access_token();
    assert_eq!(get_access_token(), None);
    assert!(!is_logged_in());
}

#[test]
fn every_mutation_notifies_subscribers_exactly_once() {
    let (_subscription, count) = counting_subscription();

    set_access_token("tok1");
    assert_eq!(count.get(), 1);

    set_access_token("tok2");
    assert_eq!(count.get(), 2);

    remove_access_token();
    assert_eq!(count.get(), 3);
}

#[test]
fn get_does_not_notify() {
    let (_subscription, count) = counting_subscription();
    let _ = get_access_token();
    let _ = is_logged_in();
    assert_eq!(count.get(), 0);
}

#[test]
fn dropped_subscription_stops_receiving_notifications() {
    let (subscription, count) = counting_subscription();

    set_access_token("tok1");
    assert_eq!(count.get(), 1);

    drop(subscription);
    set_access_token("tok2");
    assert_eq!(count.get(), 1);
}

#[test]
fn multiple_subscribers_each_get_one_notification() {
    let (_first, first_count) = counting_subscription();
    let (_second, second_count) = counting_subscription();

    set_access_token("tok1");
    assert_eq!(first_count.get(), 1);
    assert_eq!(second_count.get(), 1);
}

#[test]
fn storage_event_for_token_key_notifies_subscribers() {
    let (_subscription, count) = counting_subscription();

    deliver_storage_event(Some(ACCESS_TOKEN_KEY));
    assert_eq!(count.get(), 1);
}

#[test]
fn storage_event_with_cleared_storage_notifies_subscribers() {
    let (_subscription, count) = counting_subscription();

    deliver_storage_event(None);
    assert_eq!(count.get(), 1);
}

#[test]
fn storage_event_for_unrelated_key_is_ignored() {
    let (_subscription, count) = counting_subscription();

    deliver_storage_event(Some("pixelproof_dark_mode"));
    deliver_storage_event(Some("some_other_app_key"));
    assert_eq!(count.get(), 0);
}

#[test]
fn storage_key_relevance_matches_token_key_and_clear() {
    assert!(storage_key_is_relevant(Some(ACCESS_TOKEN_KEY)));
    assert!(storage_key_is_relevant(None));
    assert!(!storage_key_is_relevant(Some("unrelated")));
}

#[test]
fn subscriber_may_unsubscribe_from_inside_its_callback() {
    let count = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<AuthSubscription>>> = Rc::new(RefCell::new(None));

    let counter = Rc::clone(&count);
    let inner_slot = Rc::clone(&slot);
    let subscription = subscribe_auth(move || {
        counter.set(counter.get() + 1);
        inner_slot.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(subscription);

    set_access_token("tok1");
    set_access_token("tok2");
    assert_eq!(count.get(), 1);
}

#[test]
fn server_snapshot_is_always_logged_out() {
    set_access_token("tok1");
    assert!(auth_snapshot());
    assert!(!auth_server_snapshot());
}

#[test]
fn redirect_needed_only_without_session() {
    use crate::state::auth::AuthState;

    assert!(should_redirect_unauth(&AuthState { logged_in: false }));
    assert!(!should_redirect_unauth(&AuthState { logged_in: true }));
}

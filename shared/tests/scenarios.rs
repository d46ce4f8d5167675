//! end-to-end flows through the store, as a view would drive them

use std::sync::{Arc, Mutex};

use shared::event::Event;
use shared::search::filter_menus;
use shared::{AppState, FormError, MenuRecord, MenuState, Route, Store, UploadForm};

fn record(name: &str) -> MenuRecord {
    MenuRecord::new(name, format!("{}.pdf", name.to_lowercase()))
}

#[test]
fn test_n_uploads_give_n_menus() {
    for n in [0usize, 1, 5, 32] {
        let mut store = Store::default();
        for i in 0..n {
            store.dispatch(Event::MenuUploaded(record(&format!("Menu {}", i))));
        }
        assert_eq!(store.state().menu.menus.len(), n);
    }
}

#[test]
fn test_upload_order_is_preserved() {
    let mut store = Store::default();
    store.dispatch(Event::MenuUploaded(record("A")));
    store.dispatch(Event::MenuUploaded(record("B")));

    assert_eq!(store.state().menu.menus, vec![record("A"), record("B")]);
}

#[test]
fn test_noop_leaves_state_unchanged() {
    let mut store = Store::new(AppState {
        menu: MenuState { menus: vec![record("x")] },
        ..AppState::default()
    });
    let before = store.snapshot();

    let noop: Event = serde_json::from_str(r#"{"type": "NOOP"}"#).unwrap();
    store.dispatch(noop);

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_submit_upload_dispatches_and_resets() {
    let mut store = Store::default();
    let mut form = UploadForm::default();
    form.set_name("Lunch Special");
    form.choose_file(Some("lunch.pdf".to_string()));

    let record = form.submit().unwrap();
    store.dispatch(Event::MenuUploaded(record));

    assert_eq!(
        store.state().menu.menus,
        vec![MenuRecord::new("Lunch Special", "lunch.pdf")]
    );
    assert!(form.name.is_empty());
    assert!(form.file.is_none());
}

#[test]
fn test_submit_without_name_does_not_dispatch() {
    let mut store = Store::default();
    let dispatched = Arc::new(Mutex::new(0));
    let sink = dispatched.clone();
    store.subscribe(move |_| *sink.lock().unwrap() += 1);

    let mut form = UploadForm::default();
    form.choose_file(Some("lunch.pdf".to_string()));

    match form.submit() {
        Ok(record) => store.dispatch(Event::MenuUploaded(record)),
        Err(e) => assert_eq!(e, FormError::MissingFields),
    }

    assert_eq!(*dispatched.lock().unwrap(), 0);
    assert_eq!(store.snapshot(), AppState::default());
}

#[test]
fn test_search_over_store_menus() {
    let mut store = Store::default();
    store.dispatch(Event::MenuUploaded(record("Pasta")));
    store.dispatch(Event::MenuUploaded(record("Pizza")));

    let menus = &store.state().menu.menus;
    let names: Vec<_> = filter_menus(menus, "piz").map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Pizza"]);
    assert_eq!(filter_menus(menus, "xyz").count(), 0);
}

#[test]
fn test_login_then_upload_keeps_slices_independent() {
    let mut store = Store::default();
    store.dispatch(Event::LoginSucceeded { username: "jo".to_string() });
    store.dispatch(Event::MenuUploaded(record("Tapas")));

    assert_eq!(store.state().user.display_name(), "jo");
    assert_eq!(store.state().menu.menus.len(), 1);
}

#[test]
fn test_nonexistent_path_renders_not_found() {
    assert_eq!(Route::resolve("/nonexistent"), Route::NotFound);
}

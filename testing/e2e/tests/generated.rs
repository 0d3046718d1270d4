//! Binders generated by `build.rs`, compiled into this test binary and
//! dispatched through the global registry.

include!(concat!(env!("OUT_DIR"), "/viewbind.rs"));

use viewbind::{
    core::{DispatchError, InjectError, naming::unit_name, registry::registry_read},
    prelude::*,
};
use viewbind_e2e::{
    ViewTable,
    screens::{CLOCK, DraftScreen, LoginScreen, StatusScreen, SUBMIT, TITLE},
    widgets::{Button, Clock, Label},
};

fn login_views() -> ViewTable {
    ViewTable::new()
        .with(TITLE, Label { text: "Sign in" })
        .with(SUBMIT, Button { caption: "Go" })
}

#[test]
fn every_generated_binder_is_registered() {
    let registry = registry_read();

    assert!(registry.contains(&unit_name(<LoginScreen as viewbind::core::traits::Path>::PATH)));
    assert!(registry.contains("viewbind_e2e::screens::StatusScreenViewBinder"));
    assert!(!registry.contains("viewbind_e2e::screens::DraftScreenViewBinder"));
}

#[test]
fn inject_binds_every_field() {
    let mut screen = LoginScreen {
        views: login_views(),
        ..LoginScreen::default()
    };

    assert!(viewbind::inject(&mut screen));
    assert_eq!(screen.title.get().map(|l| l.text), Some("Sign in"));
    assert_eq!(screen.submit.get().map(|b| b.caption), Some("Go"));
}

#[test]
fn missing_views_leave_fields_unbound() {
    let mut screen = LoginScreen {
        views: ViewTable::new().with(TITLE, Label { text: "Only title" }),
        ..LoginScreen::default()
    };

    assert!(viewbind::inject(&mut screen));
    assert!(screen.title.is_bound());
    assert!(!screen.submit.is_bound());
}

#[test]
fn view_of_another_type_is_a_cast_mismatch() {
    let mut screen = LoginScreen {
        views: ViewTable::new().with(TITLE, Button { caption: "wrong" }),
        ..LoginScreen::default()
    };

    let err = try_inject(&mut screen).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Injection {
            source: InjectError::CastMismatch {
                id: TITLE,
                field: "title",
                ..
            },
            ..
        }
    ));
    assert!(!viewbind::inject(&mut screen));
}

#[test]
fn fields_failing_the_type_check_are_never_assigned() {
    let mut screen = StatusScreen {
        views: ViewTable::new()
            .with(TITLE, Label { text: "Status" })
            .with(CLOCK, Clock),
        ..StatusScreen::default()
    };

    assert!(viewbind::inject(&mut screen));
    assert_eq!(screen.heading.get().map(|l| l.text), Some("Status"));
    assert!(!screen.clock.is_bound());
}

#[test]
fn host_without_binder_returns_normally() {
    let mut screen = DraftScreen {
        views: ViewTable::new().with(TITLE, Label { text: "Draft" }),
        ..DraftScreen::default()
    };

    assert!(!viewbind::inject(&mut screen));
    assert!(!screen.title.is_bound());
    assert_eq!(
        try_inject(&mut screen),
        Err(DispatchError::UnitNotFound {
            unit: "viewbind_e2e::screens::DraftScreenViewBinder".to_string()
        })
    );
}

#[test]
fn build_reported_the_invalid_binding() {
    let report = include_str!(concat!(env!("OUT_DIR"), "/diagnostics.txt"));
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 1, "{report}");
    assert!(lines[0].starts_with("error: "), "{report}");
    assert!(lines[0].contains("'clock'"), "{report}");
    assert!(lines[0].contains("viewbind_e2e::screens::StatusScreen"), "{report}");
    assert!(lines[0].contains("viewbind::ui::View"), "{report}");
}

#[test]
fn generated_sources_parse_and_import_only_valid_types() {
    let unit = viewbind_e2e_screens_status_screen_source();
    let file: syn::File = syn::parse_str(&unit).unwrap();

    assert_eq!(file.items.len(), 1);
    assert!(unit.contains("use ::viewbind_e2e::widgets::Label;"), "{unit}");
    assert!(!unit.contains("Clock"), "{unit}");
}

fn viewbind_e2e_screens_status_screen_source() -> String {
    let index = include_str!(concat!(env!("OUT_DIR"), "/viewbind.rs"));
    let path = index
        .lines()
        .filter_map(|line| line.strip_prefix("include!(")?.strip_suffix(");"))
        .map(|quoted| quoted.trim_matches('"').to_string())
        .find(|path| path.contains("status_screen"))
        .unwrap();

    std::fs::read_to_string(path).unwrap()
}

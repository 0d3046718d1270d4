//! The schema the attributes register at start-up must match the one
//! `build.rs` generates from.

#[path = "../schema.rs"]
mod schema;

use viewbind::{
    core::traits::Path,
    prelude::*,
    schema::{
        build::get_schema,
        node::{Component, Host},
    },
};
use viewbind_e2e::screens::{DraftScreen, LoginScreen, StatusScreen};

// keeps the fixture crate and its constructors in this binary
fn link_fixtures() {
    let screens = (
        LoginScreen::default(),
        StatusScreen::default(),
        DraftScreen::default(),
    );
    assert!(screens.0.find_view_by_id(0).is_none());
    assert!(screens.1.find_view_by_id(0).is_none());
    assert!(screens.2.find_view_by_id(0).is_none());
}

#[test]
fn registered_hosts_match_build_fixture() {
    link_fixtures();
    let fixture = schema::fixture();
    let registered = get_schema().unwrap();

    let mut hosts = 0;
    for (path, expected) in fixture.get_nodes::<Host>() {
        let actual = registered.cast_node::<Host>(path).unwrap();
        assert_eq!(actual.def, expected.def, "{path}");
        assert_eq!(actual.bindings, expected.bindings, "{path}");
        hosts += 1;
    }
    assert_eq!(hosts, 2);
}

#[test]
fn registered_components_match_build_fixture() {
    link_fixtures();
    let fixture = schema::fixture();
    let registered = get_schema().unwrap();

    for (path, expected) in fixture.get_nodes::<Component>() {
        let actual = registered.cast_node::<Component>(path).unwrap();
        assert_eq!(actual.extends, expected.extends, "{path}");
    }
}

#[test]
fn draft_screen_is_registered_but_left_out_of_fixture() {
    link_fixtures();
    let path = <DraftScreen as Path>::PATH;

    assert!(get_schema().unwrap().cast_node::<Host>(path).is_ok());
    assert!(schema::fixture().get_node(path).is_none());
}

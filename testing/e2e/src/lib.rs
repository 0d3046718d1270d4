//! Fixtures for the end-to-end tests: a small widget hierarchy and the
//! screens that bind it. `build.rs` generates their binders from the
//! matching hand-built schema in `schema.rs`.

use std::collections::BTreeMap;
use viewbind::prelude::*;

///
/// ViewTable
/// id-to-view lookup backing every fixture screen
///

#[derive(Default)]
pub struct ViewTable {
    views: BTreeMap<i32, ViewRef>,
}

impl ViewTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<T: 'static>(mut self, id: i32, view: T) -> Self {
        self.views.insert(id, view_ref(view));
        self
    }

    #[must_use]
    pub fn find(&self, id: i32) -> Option<ViewRef> {
        self.views.get(&id).cloned()
    }
}

pub mod widgets {
    use viewbind::prelude::*;

    #[component(extends = "viewbind::ui::View")]
    pub struct TextView;

    #[component(extends = "TextView")]
    #[derive(Debug)]
    pub struct Label {
        pub text: &'static str,
    }

    #[component(extends = "TextView")]
    #[derive(Debug)]
    pub struct Button {
        pub caption: &'static str,
    }

    /// Not a view: binding it is a type-check error.
    #[component]
    #[derive(Debug)]
    pub struct Clock;
}

pub mod screens {
    use crate::{
        ViewTable,
        widgets::{Button, Clock, Label},
    };
    use viewbind::prelude::*;

    pub const TITLE: i32 = 100;
    pub const SUBMIT: i32 = 101;
    pub const CLOCK: i32 = 102;

    #[host]
    #[derive(Default)]
    pub struct LoginScreen {
        #[bind(TITLE)]
        pub title: Bound<Label>,
        #[bind(SUBMIT)]
        pub submit: Bound<Button>,
        pub views: ViewTable,
    }

    impl FindView for LoginScreen {
        fn find_view_by_id(&self, id: i32) -> Option<ViewRef> {
            self.views.find(id)
        }
    }

    #[host]
    #[derive(Default)]
    pub struct StatusScreen {
        #[bind(TITLE)]
        pub heading: Bound<Label>,
        #[bind(CLOCK)]
        pub clock: Bound<Clock>,
        pub views: ViewTable,
    }

    impl FindView for StatusScreen {
        fn find_view_by_id(&self, id: i32) -> Option<ViewRef> {
            self.views.find(id)
        }
    }

    /// Declared without a generated binder.
    #[host]
    #[derive(Default)]
    pub struct DraftScreen {
        #[bind(TITLE)]
        pub title: Bound<Label>,
        pub views: ViewTable,
    }

    impl FindView for DraftScreen {
        fn find_view_by_id(&self, id: i32) -> Option<ViewRef> {
            self.views.find(id)
        }
    }
}

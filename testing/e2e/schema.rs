// The schema `src/lib.rs` registers, spelled out for the build script,
// which cannot link the crate it belongs to. DraftScreen is left out.

use viewbind_schema::node::{Binding, Component, Def, Host, Schema, SchemaNode};

const VIEW: &str = "viewbind::ui::View";
const TEXT_VIEW: &str = "viewbind_e2e::widgets::TextView";

fn component(ident: &'static str, extends: Option<&'static str>) -> SchemaNode {
    SchemaNode::Component(Component {
        def: Def::new("viewbind_e2e::widgets", ident),
        extends,
    })
}

pub fn fixture() -> Schema {
    let mut schema = Schema::new();

    schema.insert_node(SchemaNode::Component(Component {
        def: Def::new("viewbind::ui", "View"),
        extends: None,
    }));
    schema.insert_node(component("TextView", Some(VIEW)));
    schema.insert_node(component("Label", Some(TEXT_VIEW)));
    schema.insert_node(component("Button", Some(TEXT_VIEW)));
    schema.insert_node(component("Clock", None));

    schema.insert_node(SchemaNode::Host(Host {
        def: Def::new("viewbind_e2e::screens", "LoginScreen"),
        bindings: &[
            Binding {
                ident: "title",
                ty: "viewbind_e2e::widgets::Label",
                id: 100,
            },
            Binding {
                ident: "submit",
                ty: "viewbind_e2e::widgets::Button",
                id: 101,
            },
        ],
    }));
    schema.insert_node(SchemaNode::Host(Host {
        def: Def::new("viewbind_e2e::screens", "StatusScreen"),
        bindings: &[
            Binding {
                ident: "heading",
                ty: "viewbind_e2e::widgets::Label",
                id: 100,
            },
            Binding {
                ident: "clock",
                ty: "viewbind_e2e::widgets::Clock",
                id: 102,
            },
        ],
    }));

    schema
}

use viewbind::prelude::*;

#[component(extends = "viewbind::ui::View")]
pub struct Panel;

#[component(extends = "Panel")]
pub struct Toolbar {
    pub buttons: u8,
}

fn main() {
    use viewbind::core::traits::Path;

    assert!(Toolbar::PATH.ends_with("::Toolbar"));
    let _ = Panel;
}

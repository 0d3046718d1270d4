use viewbind::prelude::*;

#[component]
pub struct Badge;

const BADGE: i32 = 7;

#[host]
#[derive(Default)]
pub struct Profile {
    #[bind(BADGE)]
    pub badge: Bound<Badge>,
    #[doc = "not bound"]
    pub name: String,
    #[bind(-3)]
    pub r#type: Bound<viewbind::ui::View>,
}

impl FindView for Profile {
    fn find_view_by_id(&self, _id: i32) -> Option<ViewRef> {
        None
    }
}

fn main() {
    let mut profile = Profile::default();

    // nothing generated a binder for this host
    assert!(!viewbind::inject(&mut profile));
    assert!(!profile.badge.is_bound());
    let _ = &profile.name;
    let _ = &profile.r#type;
}

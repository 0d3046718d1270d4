use crate::{MAX_TYPE_NAME_LEN, err, prelude::*, validate::naming::validate_type_ident};
use std::any::Any;

///
/// Component
///
/// A UI component type and its single supertype edge. `extends` holds the
/// fully-qualified path of the parent component, `None` for a hierarchy root.
///

#[derive(Clone, Debug)]
pub struct Component {
    pub def: Def,
    pub extends: Option<&'static str>,
}

impl Component {
    #[must_use]
    pub fn path(&self) -> String {
        self.def.path()
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.extends.is_none()
    }
}

impl MacroNode for Component {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ValidateNode for Component {
    fn validate(&self, _schema: &Schema) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(msg) = validate_type_ident(self.def.ident, MAX_TYPE_NAME_LEN) {
            errs.add(msg);
        }

        if let Some(parent) = self.extends {
            if parent.is_empty() {
                err!(errs, "component '{}' extends an empty path", self.def.ident);
            } else if parent == self.path() {
                err!(errs, "component '{}' cannot extend itself", self.def.ident);
            }
        }

        errs.result()
    }
}

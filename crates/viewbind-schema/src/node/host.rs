use crate::{MAX_TYPE_NAME_LEN, err, prelude::*, validate::naming};
use std::{any::Any, collections::BTreeSet};

///
/// Host
///
/// A type with one or more fields marked `#[bind(..)]`. Bindings keep the
/// declaration order of the fields.
///

#[derive(Clone, Debug)]
pub struct Host {
    pub def: Def,
    pub bindings: &'static [Binding],
}

impl Host {
    #[must_use]
    pub fn path(&self) -> String {
        self.def.path()
    }

    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.ident == ident)
    }
}

impl MacroNode for Host {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ValidateNode for Host {
    fn validate(&self, _schema: &Schema) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(msg) = naming::validate_type_ident(self.def.ident, MAX_TYPE_NAME_LEN) {
            errs.add(msg);
        }

        let mut seen = BTreeSet::new();
        for binding in self.bindings {
            let mut field_errs = ErrorTree::new();

            if let Err(msg) = naming::validate_field_ident(binding.ident) {
                field_errs.add(msg);
            }
            if binding.ty.is_empty() {
                err!(field_errs, "field '{}' has no declared type", binding.ident);
            }
            if !seen.insert(binding.ident) {
                err!(field_errs, "field '{}' is bound more than once", binding.ident);
            }

            errs.add_child(binding.ident, field_errs);
        }

        errs.result()
    }
}

///
/// Binding
///
/// One field marked for generated injection. `ty` is the fully-qualified
/// path of the declared component type; `id` is what the identifier lookup
/// is called with.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    pub ident: &'static str,
    pub ty: &'static str,
    pub id: i32,
}

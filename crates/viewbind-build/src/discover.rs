use std::collections::BTreeMap;
use viewbind_schema::node::{Host, Schema};

///
/// AnnotatedDeclaration
///
/// One marked field, flattened out of its host node. `package` is the
/// host's module path, `ty` the fully-qualified component path.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AnnotatedDeclaration {
    pub package: String,
    pub host: String,
    pub field: String,
    pub ty: String,
    pub id: i32,
}

impl AnnotatedDeclaration {
    #[must_use]
    pub fn host_path(&self) -> String {
        format!("{}::{}", self.package, self.host)
    }

    /// Last segment of the component path.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.ty.rsplit("::").next().unwrap_or(&self.ty)
    }
}

///
/// HostGroup
/// every declaration of one host, in field order
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HostGroup {
    pub package: String,
    pub host: String,
    pub declarations: Vec<AnnotatedDeclaration>,
}

impl HostGroup {
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}::{}", self.package, self.host)
    }
}

/// Flatten every host's bindings, hosts in path order and bindings in
/// field order.
#[must_use]
pub fn discover(schema: &Schema) -> Vec<AnnotatedDeclaration> {
    schema
        .get_nodes::<Host>()
        .flat_map(|(_, host)| declarations(host))
        .collect()
}

fn declarations(host: &Host) -> impl Iterator<Item = AnnotatedDeclaration> + '_ {
    host.bindings.iter().map(|binding| AnnotatedDeclaration {
        package: host.def.module_path.to_string(),
        host: host.def.ident.to_string(),
        field: binding.ident.to_string(),
        ty: binding.ty.to_string(),
        id: binding.id,
    })
}

/// Partition declarations by `(package, host)`.
///
/// Groups come out in order of first appearance and keep the relative order
/// of their members.
#[must_use]
pub fn group(declarations: Vec<AnnotatedDeclaration>) -> Vec<HostGroup> {
    let mut groups: Vec<HostGroup> = Vec::new();
    let mut index: BTreeMap<(String, String), usize> = BTreeMap::new();

    for decl in declarations {
        let key = (decl.package.clone(), decl.host.clone());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(HostGroup {
                package: decl.package.clone(),
                host: decl.host.clone(),
                declarations: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].declarations.push(decl);
    }

    groups
}

///
/// TESTS
///

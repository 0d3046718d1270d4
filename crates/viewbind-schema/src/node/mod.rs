mod component;
mod def;
mod host;

pub use self::component::*;
pub use self::def::*;
pub use self::host::*;

use crate::error::ErrorTree;
use std::{any::Any, collections::BTreeMap};
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("node '{0}' not found")]
    NotFound(String),

    #[error("node '{path}' is not a {expected}")]
    IncorrectNodeType {
        path: String,
        expected: &'static str,
    },
}

///
/// MacroNode
/// a node registered by one of the marker attributes
///

pub trait MacroNode: Any {
    fn as_any(&self) -> &dyn Any;
}

///
/// ValidateNode
/// node-local invariants, checked against the full schema
///

pub trait ValidateNode {
    fn validate(&self, _schema: &Schema) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// SchemaNode
///

#[derive(Clone, Debug)]
#[remain::sorted]
pub enum SchemaNode {
    Component(Component),
    Host(Host),
}

impl SchemaNode {
    #[must_use]
    pub const fn def(&self) -> &Def {
        match self {
            Self::Component(node) => &node.def,
            Self::Host(node) => &node.def,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Component(_) => "component",
            Self::Host(_) => "host",
        }
    }

    fn as_macro_node(&self) -> &dyn MacroNode {
        match self {
            Self::Component(node) => node,
            Self::Host(node) => node,
        }
    }

    fn validate(&self, schema: &Schema) -> Result<(), ErrorTree> {
        match self {
            Self::Component(node) => node.validate(schema),
            Self::Host(node) => node.validate(schema),
        }
    }
}

///
/// Schema
///
/// All registered nodes keyed by their fully-qualified path. Iteration is
/// path-ordered, which keeps every generation pass deterministic.
///

#[derive(Clone, Debug, Default)]
pub struct Schema {
    nodes: BTreeMap<String, SchemaNode>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    /// Insert a node under its path, replacing any earlier registration.
    pub fn insert_node(&mut self, node: SchemaNode) {
        self.nodes.insert(node.def().path(), node);
    }

    #[must_use]
    pub fn get_node(&self, path: &str) -> Option<&SchemaNode> {
        self.nodes.get(path)
    }

    pub fn try_get_node(&self, path: &str) -> Result<&SchemaNode, NodeError> {
        self.get_node(path)
            .ok_or_else(|| NodeError::NotFound(path.to_string()))
    }

    /// Resolve a node and downcast it to a concrete node type.
    pub fn cast_node<T: MacroNode>(&self, path: &str) -> Result<&T, NodeError> {
        let node = self.try_get_node(path)?;

        node.as_macro_node()
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| NodeError::IncorrectNodeType {
                path: path.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// All nodes of one concrete type, in path order.
    pub fn get_nodes<T: MacroNode>(&self) -> impl Iterator<Item = (&str, &T)> {
        self.nodes.iter().filter_map(|(path, node)| {
            node.as_macro_node()
                .as_any()
                .downcast_ref::<T>()
                .map(|node| (path.as_str(), node))
        })
    }

    pub fn filter_nodes<'a, T: MacroNode>(
        &'a self,
        predicate: impl Fn(&T) -> bool + 'a,
    ) -> impl Iterator<Item = (&'a str, &'a T)> + 'a {
        self.get_nodes::<T>().filter(move |(_, node)| predicate(node))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.nodes.iter().map(|(path, node)| (path.as_str(), node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Run node-local validation, routing each node's errors by its path.
    pub(crate) fn validate_nodes(&self) -> ErrorTree {
        let mut errs = ErrorTree::new();

        for (path, node) in &self.nodes {
            if let Err(node_errs) = node.validate(self) {
                errs.add_child(path.clone(), node_errs);
            }
        }

        errs
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn label() -> Component {
        Component {
            def: Def::new("app::widgets", "Label"),
            extends: Some("viewbind::ui::View"),
        }
    }

    fn screen() -> Host {
        Host {
            def: Def::new("app::screens", "MainScreen"),
            bindings: &[Binding {
                ident: "title_label",
                ty: "app::widgets::Label",
                id: 100,
            }],
        }
    }

    #[test]
    fn cast_node_resolves_concrete_type() {
        let mut schema = Schema::new();
        schema.insert_node(SchemaNode::Component(label()));
        schema.insert_node(SchemaNode::Host(screen()));

        let host = schema.cast_node::<Host>("app::screens::MainScreen").unwrap();
        assert_eq!(host.bindings.len(), 1);

        let err = schema
            .cast_node::<Host>("app::widgets::Label")
            .expect_err("a component is not a host");
        assert!(matches!(err, NodeError::IncorrectNodeType { .. }));

        let err = schema.cast_node::<Host>("app::Missing").unwrap_err();
        assert!(matches!(err, NodeError::NotFound(_)));
    }

    #[test]
    fn get_nodes_filters_by_kind_in_path_order() {
        let mut schema = Schema::new();
        schema.insert_node(SchemaNode::Host(screen()));
        schema.insert_node(SchemaNode::Component(label()));
        schema.insert_node(SchemaNode::Component(Component {
            def: Def::new("app::widgets", "Button"),
            extends: Some("viewbind::ui::View"),
        }));

        let components: Vec<&str> = schema.get_nodes::<Component>().map(|(p, _)| p).collect();
        assert_eq!(
            components,
            vec!["app::widgets::Button", "app::widgets::Label"]
        );
        assert_eq!(schema.get_nodes::<Host>().count(), 1);
    }

    #[test]
    fn reinserting_a_path_replaces_the_node() {
        let mut schema = Schema::new();
        schema.insert_node(SchemaNode::Component(label()));
        schema.insert_node(SchemaNode::Component(Component {
            extends: None,
            ..label()
        }));

        assert_eq!(schema.len(), 1);
        let node = schema.cast_node::<Component>("app::widgets::Label").unwrap();
        assert_eq!(node.extends, None);
    }
}

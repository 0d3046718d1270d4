use crate::node::{Component, Schema};
use std::collections::{BTreeMap, BTreeSet};

///
/// TypeGraph
///
/// Type-to-supertype edges for every registered component, resolved once
/// per pass. A type with no entry (or an entry of `None`) has no further
/// ancestor.
///

#[derive(Clone, Debug, Default)]
pub struct TypeGraph {
    edges: BTreeMap<String, Option<String>>,
}

impl TypeGraph {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }

    /// Build the edge table from the schema's component nodes.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        let mut graph = Self::new();
        for (path, component) in schema.get_nodes::<Component>() {
            graph.insert(path, component.extends);
        }

        graph
    }

    /// Record `ty`'s immediate supertype, replacing any earlier edge.
    pub fn insert(&mut self, ty: &str, supertype: Option<&str>) {
        self.edges
            .insert(ty.to_string(), supertype.map(ToString::to_string));
    }

    #[must_use]
    pub fn contains(&self, ty: &str) -> bool {
        self.edges.contains_key(ty)
    }

    #[must_use]
    pub fn supertype(&self, ty: &str) -> Option<&str> {
        self.edges.get(ty).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Reflexive-transitive ancestry of `ty`, starting with `ty` itself.
    #[must_use]
    pub fn ancestors<'a>(&'a self, ty: &'a str) -> Ancestors<'a> {
        Ancestors {
            graph: self,
            next: Some(ty),
            remaining: self.edges.len() + 1,
        }
    }

    /// Whether `base` appears among `ty`'s reflexive-transitive ancestors.
    ///
    /// Walks one edge at a time: a match by qualified path succeeds, reaching
    /// a type with no recorded ancestor fails.
    #[must_use]
    pub fn conforms(&self, ty: &str, base: &str) -> bool {
        self.ancestors(ty).any(|ancestor| ancestor == base)
    }

    /// First supertype cycle found, as the looping path with its entry
    /// point repeated at the end.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut settled = BTreeSet::new();

        for start in self.edges.keys() {
            let mut trail: Vec<&str> = Vec::new();
            let mut current = Some(start.as_str());

            while let Some(ty) = current {
                if settled.contains(ty) {
                    break;
                }
                if let Some(pos) = trail.iter().position(|seen| *seen == ty) {
                    let mut cycle: Vec<String> =
                        trail[pos..].iter().map(ToString::to_string).collect();
                    cycle.push(ty.to_string());

                    return Some(cycle);
                }

                trail.push(ty);
                current = self.supertype(ty);
            }

            settled.extend(trail);
        }

        None
    }
}

///
/// Ancestors
///
/// Bounded by the edge count, so a malformed cyclic table still ends.
///

pub struct Ancestors<'a> {
    graph: &'a TypeGraph,
    next: Option<&'a str>,
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.next?;
        self.next = self.graph.supertype(current);

        Some(current)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEW: &str = "viewbind::ui::View";

    fn widgets() -> TypeGraph {
        let mut graph = TypeGraph::new();
        graph.insert(VIEW, None);
        graph.insert("app::TextView", Some(VIEW));
        graph.insert("app::Label", Some("app::TextView"));
        graph.insert("app::Button", Some("app::TextView"));
        graph.insert("app::Timer", None);
        graph.insert("app::Ticker", Some("app::Timer"));

        graph
    }

    #[test]
    fn conforms_through_intermediate_supertypes() {
        let graph = widgets();

        assert!(graph.conforms("app::Label", VIEW));
        assert!(graph.conforms("app::Label", "app::TextView"));
        assert!(graph.conforms(VIEW, VIEW));
    }

    #[test]
    fn root_without_match_does_not_conform() {
        let graph = widgets();

        assert!(!graph.conforms("app::Ticker", VIEW));
        assert!(!graph.conforms(VIEW, "app::Label"));
    }

    #[test]
    fn unknown_type_only_conforms_to_itself() {
        let graph = widgets();

        assert!(!graph.conforms("std::string::String", VIEW));
        assert!(graph.conforms("std::string::String", "std::string::String"));
    }

    #[test]
    fn unregistered_base_is_still_matched_by_path() {
        let mut graph = TypeGraph::new();
        graph.insert("app::Label", Some(VIEW));

        assert!(graph.conforms("app::Label", VIEW));
    }

    #[test]
    fn ancestors_lists_the_chain() {
        let graph = widgets();
        let chain: Vec<&str> = graph.ancestors("app::Label").collect();

        assert_eq!(chain, vec!["app::Label", "app::TextView", VIEW]);
    }

    #[test]
    fn cyclic_edges_still_terminate() {
        let mut graph = TypeGraph::new();
        graph.insert("a", Some("b"));
        graph.insert("b", Some("a"));

        assert!(!graph.conforms("a", VIEW));
        assert_eq!(graph.ancestors("a").count(), 3);
        assert_eq!(
            graph.find_cycle(),
            Some(vec!["a".to_string(), "b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn acyclic_graph_has_no_cycle() {
        assert_eq!(widgets().find_cycle(), None);
    }

    // A random forest: node i may point at any node j < i, which keeps the
    // edge table acyclic by construction.
    fn arb_forest() -> impl Strategy<Value = Vec<Option<usize>>> {
        prop::collection::vec(any::<prop::sample::Index>(), 1..24).prop_map(|picks| {
            picks
                .iter()
                .enumerate()
                .map(|(i, pick)| {
                    if i == 0 || pick.index(4) == 0 {
                        None
                    } else {
                        Some(pick.index(i))
                    }
                })
                .collect()
        })
    }

    fn name(i: usize) -> String {
        format!("t{i}")
    }

    fn build(parents: &[Option<usize>]) -> TypeGraph {
        let mut graph = TypeGraph::new();
        for (i, parent) in parents.iter().enumerate() {
            graph.insert(&name(i), parent.map(name).as_deref());
        }

        graph
    }

    fn is_ancestor(parents: &[Option<usize>], ty: usize, base: usize) -> bool {
        let mut current = Some(ty);
        while let Some(i) = current {
            if i == base {
                return true;
            }
            current = parents[i];
        }

        false
    }

    proptest! {
        #[test]
        fn conforms_iff_base_is_an_ancestor(
            parents in arb_forest(),
            ty in any::<prop::sample::Index>(),
            base in any::<prop::sample::Index>(),
        ) {
            let graph = build(&parents);
            let ty = ty.index(parents.len());
            let base = base.index(parents.len());

            prop_assert_eq!(
                graph.conforms(&name(ty), &name(base)),
                is_ancestor(&parents, ty, base)
            );
        }

        #[test]
        fn ancestry_never_exceeds_depth(parents in arb_forest(), ty in any::<prop::sample::Index>()) {
            let graph = build(&parents);
            let ty = ty.index(parents.len());

            let mut depth = 0;
            let mut current = Some(ty);
            while let Some(i) = current {
                depth += 1;
                current = parents[i];
            }

            prop_assert_eq!(graph.ancestors(&name(ty)).count(), depth);
            prop_assert!(graph.find_cycle().is_none());
        }
    }
}

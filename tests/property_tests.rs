//! Property-based tests for scope resolution
//!
//! These tests use proptest to check the resolution laws over randomly generated import graphs (cycles
//! included) and registration sequences.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use modscope::{Config, DeclCompiler, Function, ModuleScope, ScopeRef, ScopeRegistry, TypeConstructor, Value};
use proptest::prelude::*;

// =============================================================================
// Import graphs
// =============================================================================

/// A graph of `n` scopes: which ones declare a type, and the import edges between them.
#[derive(Debug, Clone)]
struct Graph {
    declares: Vec<bool>,
    edges: Vec<(usize, usize)>,
}

fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec((0..n, 0..n), 0..(n * 3)),
        )
            .prop_map(|(declares, edges)| Graph { declares, edges })
    })
}

/// Build the scopes: scope `i` is named `S{i}` and, if it declares, owns constructor `T{i}`.
fn build(graph: &Graph) -> (Vec<ScopeRef>, Vec<Option<TypeConstructor>>) {
    let scopes: Vec<ScopeRef> = (0..graph.declares.len())
        .map(|i| ModuleScope::new(format!("S{i}")))
        .collect();
    let constructors = scopes
        .iter()
        .zip(&graph.declares)
        .enumerate()
        .map(|(i, (scope, &declares))| {
            declares.then(|| {
                let constructor = TypeConstructor::new(format!("T{i}"), scope);
                scope.register_constructor(constructor.clone());
                constructor
            })
        })
        .collect();
    for &(from, to) in &graph.edges {
        scopes[from].add_import(Arc::clone(&scopes[to]));
    }
    (scopes, constructors)
}

/// Scope indices reachable from `start` through imports, `start` included.
fn reachable(graph: &Graph, start: usize) -> HashSet<usize> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for &(from, to) in &graph.edges {
            if from == current && seen.insert(to) {
                queue.push_back(to);
            }
        }
    }
    seen
}

fn direct_imports(graph: &Graph, start: usize) -> HashSet<usize> {
    graph
        .edges
        .iter()
        .filter(|&&(from, _)| from == start)
        .map(|&(_, to)| to)
        .collect()
}

proptest! {
    /// Property: constructor lookup terminates on any graph and finds exactly the reachable declarations
    #[test]
    fn constructor_lookup_matches_reachability(graph in graph_strategy()) {
        let (scopes, constructors) = build(&graph);

        for (start, scope) in scopes.iter().enumerate() {
            let visible = reachable(&graph, start);
            for (target, constructor) in constructors.iter().enumerate() {
                let found = scope.resolve_constructor(&format!("T{target}"));
                match constructor {
                    Some(expected) if visible.contains(&target) => prop_assert_eq!(found.as_ref(), Some(expected)),
                    _ => prop_assert!(found.is_none()),
                }
            }
            prop_assert_eq!(
                scope.resolve_constructor(&format!("S{start}")),
                Some(scope.associated_type().clone())
            );
        }
    }

    /// Property: method lookup sees the home scope, the calling scope and its direct imports, nothing further
    #[test]
    fn method_lookup_is_shallow(graph in graph_strategy(), home in 0usize..8, definer in 0usize..8) {
        let (scopes, _) = build(&graph);
        let home = home % scopes.len();
        let definer = definer % scopes.len();

        let receiver = TypeConstructor::new("Receiver", &scopes[home]);
        let method = Function::new("Receiver.m", |_| Value::Int(1));
        scopes[definer].register_method(&receiver, "m", method.clone());

        for (start, scope) in scopes.iter().enumerate() {
            let expected = definer == home || definer == start || direct_imports(&graph, start).contains(&definer);
            let found = scope.resolve_method(&receiver, "m");
            prop_assert_eq!(found.is_some(), expected, "start {} home {} definer {}", start, home, definer);
            if let Some(found) = found {
                prop_assert!(found.ptr_eq(&method));
            }
        }
    }

    /// Property: only the last registration for a `(type, name)` pair remains
    #[test]
    fn last_registration_wins(values in prop::collection::vec(any::<i64>(), 1..10)) {
        let scope = ModuleScope::new("Main");
        let receiver = TypeConstructor::new("T", &scope);
        for &v in &values {
            scope.register_method(&receiver, "m", Function::new("T.m", move |_| Value::Int(v)));
        }

        let found = scope.resolve_method(&receiver, "m").unwrap();
        prop_assert_eq!(found.call(&[]), Value::Int(*values.last().unwrap()));
        let table = scope.method_table(&receiver).unwrap();
        prop_assert_eq!(table.names(), vec!["m"]);
    }
}

// =============================================================================
// Generated sources
// =============================================================================

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("Not a keyword", |s| !matches!(s.as_str(), "import" | "type"))
}

fn type_name_strategy() -> impl Strategy<Value = String> {
    // `Main` is the scope's own name and resolves to its associated type.
    "[A-Z][a-zA-Z0-9]{0,8}".prop_filter("Not the module name", |s| s != "Main")
}

proptest! {
    /// Property: a declared type with an integer method always compiles and dispatches
    #[test]
    fn generated_declarations_dispatch(ty in type_name_strategy(), method in ident_strategy(), value in 0i64..=i64::MAX) {
        let registry = Arc::new(ScopeRegistry::new());
        let context = DeclCompiler::new(Arc::clone(&registry), Config::default()).into_context();
        let scope = registry.get_or_create("Main");

        let source = format!("type {ty}\n{ty}.{method} self = {value}\n");
        modscope::patch(&scope, &source, &context).unwrap();

        let receiver = scope.resolve_constructor(&ty).unwrap();
        let found = scope.resolve_method(&receiver, &method).unwrap();
        prop_assert_eq!(found.call(&[Value::Nothing]), Value::Int(value));
    }
}

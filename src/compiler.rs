//! Reference compiler for the declaration language.
//!
//! [`DeclCompiler`] parses a source with `modscope_syntax`, resolves every name against the target scope and the
//! [`ScopeRegistry`], and only then registers anything. A source with errors leaves the target scope untouched.
//!
//! ```text
//! import Lib
//! type Point
//! Point.to_string self = "a point"
//! answer = 42
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use modscope_syntax::ast::{Declaration, Expr, MethodDecl, Program, Spanned};
use modscope_syntax::diagnostics::CompileError;

use crate::config::Config;
use crate::error::CompileFailure;
use crate::patch::{Compiler, Context, Source};
use crate::registry::ScopeRegistry;
use crate::resolve::resolve_through_imports;
use crate::scope::{ScopeRef, TypeConstructor};
use crate::value::{Function, Value};

/// Compiles declaration-language sources into module scopes.
#[derive(Debug, Clone)]
pub struct DeclCompiler {
    registry: Arc<ScopeRegistry>,
    config: Config,
}

impl DeclCompiler {
    pub fn new(registry: Arc<ScopeRegistry>, config: Config) -> Self {
        Self { registry, config }
    }

    /// A [`Context`] that patches with this compiler and shares its [`Config`].
    pub fn into_context(self) -> Context {
        let config = self.config.clone();
        Context::new(Arc::new(self), config)
    }
}

impl Compiler for DeclCompiler {
    #[tracing::instrument(skip_all, fields(module = %source.name, scope = scope.name()))]
    fn compile(&self, source: &Source, scope: &ScopeRef) -> Result<(), CompileFailure> {
        let program = modscope_syntax::parse_source(&source.text)
            .map_err(|errors| CompileFailure::new(&source.name, &source.text, errors))?;

        let plan = Planner::new(self, scope).plan(&program);
        if !plan.errors.is_empty() {
            tracing::debug!(errors = plan.errors.len(), "declarations rejected");
            return Err(CompileFailure::new(&source.name, &source.text, plan.errors));
        }

        plan.apply(scope);
        Ok(())
    }
}

/// Everything a source registers, fully resolved.
#[derive(Default)]
struct Plan {
    imports: Vec<ScopeRef>,
    constructors: Vec<TypeConstructor>,
    methods: Vec<(TypeConstructor, String, Function)>,
    errors: Vec<CompileError>,
}

impl Plan {
    fn apply(self, scope: &ScopeRef) {
        let (imports, constructors, methods) = (self.imports.len(), self.constructors.len(), self.methods.len());
        for import in self.imports {
            scope.add_import(import);
        }
        for constructor in self.constructors {
            scope.register_constructor(constructor);
        }
        for (constructor, name, function) in self.methods {
            scope.register_method(&constructor, name, function);
        }
        tracing::debug!(imports, constructors, methods, "declarations registered");
    }
}

type MethodBody = Box<dyn Fn(&[Value]) -> Value + Send + Sync>;

struct Planner<'a> {
    compiler: &'a DeclCompiler,
    scope: &'a ScopeRef,
    /// Types declared by this source, by name
    declared: HashMap<String, TypeConstructor>,
    plan: Plan,
}

impl<'a> Planner<'a> {
    fn new(compiler: &'a DeclCompiler, scope: &'a ScopeRef) -> Self {
        Self {
            compiler,
            scope,
            declared: HashMap::new(),
            plan: Plan::default(),
        }
    }

    fn plan(mut self, program: &Program) -> Plan {
        // Imports and types first, so methods may precede the declarations they use.
        for decl in &program.declarations {
            match &decl.node {
                Declaration::Import(import) => self.import(&import.module),
                Declaration::Type(ty) => self.declare_type(&ty.name),
                Declaration::Method(_) => {}
            }
        }
        for decl in &program.declarations {
            if let Declaration::Method(method) = &decl.node {
                self.method(method);
            }
        }
        self.plan
    }

    fn import(&mut self, module: &Spanned<String>) {
        let name = module.node.as_str();
        let target = match self.compiler.registry.get(name) {
            Some(found) => found,
            None if self.compiler.config.create_missing_imports => self.compiler.registry.get_or_create(name),
            None => {
                self.plan.errors.push(
                    CompileError::name(format!("module `{name}` not found"), module.span)
                        .with_hint("compile the module first, or enable `create_missing_imports`"),
                );
                return;
            }
        };
        if target.id() == self.scope.id() || self.plan.imports.iter().any(|s| s.id() == target.id()) {
            return;
        }
        self.plan.imports.push(target);
    }

    fn declare_type(&mut self, name: &Spanned<String>) {
        if self.declared.contains_key(&name.node) {
            self.plan
                .errors
                .push(CompileError::name(format!("type `{}` is declared twice", name.node), name.span));
            return;
        }
        if name.node == self.scope.associated_type().name() {
            self.plan.errors.push(
                CompileError::name(
                    format!("type `{}` would be shadowed by the module itself", name.node),
                    name.span,
                )
                .with_hint("the module name already resolves to the module's associated type"),
            );
            return;
        }
        // Redeclaring keeps the existing constructor so methods attached to it stay attached.
        let constructor = match self.scope.local_constructor(&name.node) {
            Some(existing) => existing,
            None => {
                let fresh = TypeConstructor::new(name.node.as_str(), self.scope);
                self.plan.constructors.push(fresh.clone());
                fresh
            }
        };
        self.declared.insert(name.node.clone(), constructor);
    }

    fn method(&mut self, method: &MethodDecl) {
        let receiver = match &method.receiver {
            None => Some(self.scope.associated_type().clone()),
            Some(receiver) => {
                let found = self.receiver(&receiver.node);
                if found.is_none() {
                    self.plan.errors.push(
                        CompileError::name(format!("unknown type `{}`", receiver.node), receiver.span)
                            .with_hint("declare it with `type`, or import the module that declares it"),
                    );
                }
                found
            }
        };

        let mut seen = HashSet::new();
        let mut params_ok = true;
        for param in &method.params {
            if !seen.insert(param.node.as_str()) {
                params_ok = false;
                self.plan.errors.push(CompileError::name(
                    format!("duplicate parameter `{}` in `{}`", param.node, method.name.node),
                    param.span,
                ));
            }
        }

        let body = self.body(method);

        if let (Some(receiver), true, Some(body)) = (receiver, params_ok, body) {
            let qualified = format!("{}.{}", receiver.name(), method.name.node);
            let function = Function::new(qualified, body);
            self.plan.methods.push((receiver, method.name.node.clone(), function));
        }
    }

    /// Resolve `name` the way the scope will once the plan is applied: associated type, local types (existing or
    /// declared by this source), then imports breadth-first with the new imports appended.
    fn receiver(&self, name: &str) -> Option<TypeConstructor> {
        if self.scope.associated_type().name() == name {
            return Some(self.scope.associated_type().clone());
        }
        if let Some(declared) = self.declared.get(name) {
            return Some(declared.clone());
        }
        if let Some(local) = self.scope.local_constructor(name) {
            return Some(local);
        }
        resolve_through_imports(self.scope, &self.plan.imports, name)
    }

    fn body(&mut self, method: &MethodDecl) -> Option<MethodBody> {
        let body: MethodBody = match &method.body.node {
            Expr::Int(n) => {
                let n = *n;
                Box::new(move |_: &[Value]| Value::Int(n))
            }
            Expr::Text(text) => {
                let text = text.clone();
                Box::new(move |_: &[Value]| Value::Text(text.clone()))
            }
            Expr::Name(name) => match method.params.iter().position(|p| &p.node == name) {
                Some(index) => Box::new(move |args: &[Value]| args.get(index).cloned().unwrap_or_default()),
                None => {
                    self.plan.errors.push(
                        CompileError::name(format!("unknown name `{name}`"), method.body.span)
                            .with_hint("method bodies may only refer to their parameters"),
                    );
                    return None;
                }
            },
        };
        Some(body)
    }
}

/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     interpreter/environment.rs
 * Purpose:  Arena of lexical scopes addressed by EnvId handles.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the MONKEY programming language project.
 *
 * MONKEY is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::collections::HashMap;

use crate::value::Value;

/// Handle to one scope inside an [`Environments`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvId(usize);

/// A single scope: its own bindings plus an optional enclosing scope.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    pub values: HashMap<String, Value>,
    outer: Option<EnvId>,
}

/// Arena of scopes for one interpreter session.
///
/// Scopes refer to their parent by handle, and a parent is always allocated
/// before its children, so every scope's ancestors sit at lower indices.
/// That makes the arena a stack: scopes allocated after a [`mark`] can be
/// released with [`release`] once nothing refers to them any more.
///
/// [`mark`]: Environments::mark
/// [`release`]: Environments::release
#[derive(Debug, Clone)]
pub struct Environments {
    scopes: Vec<Scope>,
}

impl Default for Environments {
    fn default() -> Self {
        Self::new()
    }
}

impl Environments {
    /// Creates an arena holding only the root scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }

    /// The outermost scope.
    pub fn root(&self) -> EnvId {
        EnvId(0)
    }

    /// Allocates a new empty scope whose parent is `outer`.
    pub fn enclosed(&mut self, outer: EnvId) -> EnvId {
        self.scopes.push(Scope {
            values: HashMap::new(),
            outer: Some(outer),
        });
        EnvId(self.scopes.len() - 1)
    }

    /// Position to [`release`](Environments::release) back to later.
    pub fn mark(&self) -> usize {
        self.scopes.len()
    }

    /// Frees every scope allocated since `mark`. The root is always kept.
    pub fn release(&mut self, mark: usize) {
        self.scopes.truncate(mark.max(1));
    }

    /// Whether `env` was allocated at or after `mark`.
    pub fn allocated_since(&self, env: EnvId, mark: usize) -> bool {
        env.0 >= mark
    }

    /// Looks `name` up starting at `env` and walking outward.
    pub fn get(&self, env: EnvId, name: &str) -> Option<&Value> {
        let mut current = Some(env);

        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(value) = scope.values.get(name) {
                return Some(value);
            }
            current = scope.outer;
        }

        None
    }

    /// Binds `name` in `env` itself, shadowing any outer binding.
    pub fn set(&mut self, env: EnvId, name: impl Into<String>, value: Value) {
        self.scopes[env.0].values.insert(name.into(), value);
    }

    pub fn outer(&self, env: EnvId) -> Option<EnvId> {
        self.scopes[env.0].outer
    }

    /// Number of scopes allocated so far.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

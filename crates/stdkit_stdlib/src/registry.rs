//! Name-based dispatch for the host evaluator.

use std::collections::HashMap;

use stdkit_foundation::{Arity, Error, Result, Value};

use crate::collection::native_first;
use crate::config::StdlibConfig;
use crate::range::{self, native_range};
use crate::string::{native_chomp, native_is_upcase};

/// Signature shared by every builtin.
pub type BuiltinFn = fn(&StdlibConfig, &[Value]) -> Result<Value>;

/// A function the host can call by name.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// Name the host calls the function by.
    pub name: &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// One-line description.
    pub summary: &'static str,
    /// Implementation.
    pub func: BuiltinFn,
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Builtin({}/{})", self.name, self.arity)
    }
}

/// The builtins registered by [`FunctionRegistry::new`].
pub const BUILTINS: [Builtin; 4] = [
    Builtin {
        name: range::NAME,
        arity: range::ARITY,
        summary: "Expands start and stop into the list of values between them",
        func: native_range,
    },
    Builtin {
        name: "first",
        arity: Arity::Exact(1),
        summary: "Returns the first element of an array",
        func: |_, args| native_first(args),
    },
    Builtin {
        name: "chomp",
        arity: Arity::Exact(1),
        summary: "Removes one trailing line terminator from a string or array of strings",
        func: |_, args| native_chomp(args),
    },
    Builtin {
        name: "is_upcase",
        arity: Arity::Exact(1),
        summary: "Returns true if a string contains no lowercase characters",
        func: |_, args| native_is_upcase(args),
    },
];

/// Table of builtins plus the configuration they run with.
#[derive(Clone, Debug)]
pub struct FunctionRegistry {
    functions: HashMap<&'static str, Builtin>,
    config: StdlibConfig,
}

impl FunctionRegistry {
    /// Creates a registry with every builtin and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StdlibConfig::default())
    }

    /// Creates a registry with every builtin and the given configuration.
    #[must_use]
    pub fn with_config(config: StdlibConfig) -> Self {
        let mut registry = Self {
            functions: HashMap::with_capacity(BUILTINS.len()),
            config,
        };
        for builtin in BUILTINS {
            registry.register(builtin);
        }
        registry
    }

    /// Adds or replaces a builtin.
    pub fn register(&mut self, builtin: Builtin) {
        self.functions.insert(builtin.name, builtin);
    }

    /// Looks up a builtin by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.functions.get(name)
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered builtins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if no builtins are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Returns the configuration builtins run with.
    #[must_use]
    pub const fn config(&self) -> &StdlibConfig {
        &self.config
    }

    /// Calls a builtin by name.
    ///
    /// # Errors
    ///
    /// Returns [`stdkit_foundation::ErrorKind::UndefinedFunction`] for an
    /// unknown name, otherwise whatever the builtin returns, with the
    /// builtin's name pushed onto the error's call trace.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let builtin = self
            .get(name)
            .ok_or_else(|| Error::undefined_function(name))?;
        log::debug!("calling {}() with {} argument(s)", builtin.name, args.len());
        (builtin.func)(&self.config, args).map_err(|err| err.with_frame(builtin.name))
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

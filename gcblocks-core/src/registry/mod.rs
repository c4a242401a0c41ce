use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::catalog;
use crate::types::{OperationDescriptor, Service};

static BUILTIN: LazyLock<Registry> = LazyLock::new(Registry::build);

/// Read-only lookup table of every supported operation, keyed by name.
/// Built once at first use; entries are independent and never mutated.
pub struct Registry {
    ops: BTreeMap<&'static str, OperationDescriptor>,
}

impl Registry {
    /// The full built-in catalogue.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    fn build() -> Self {
        let mut ops = BTreeMap::new();
        for descriptor in catalog::all() {
            let prior = ops.insert(descriptor.name, descriptor);
            debug_assert!(prior.is_none(), "duplicate operation name in catalogue");
        }
        Self { ops }
    }

    pub fn get(&self, name: &str) -> Option<&OperationDescriptor> {
        self.ops.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ops.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.ops.values()
    }

    pub fn for_service(&self, service: Service) -> impl Iterator<Item = &OperationDescriptor> {
        self.ops.values().filter(move |op| op.service == service)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

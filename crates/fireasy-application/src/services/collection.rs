//! Service collection over the dill catalog
//!
//! Deployers register into a [`ServiceCollection`]; once every deployer has
//! run it is turned into an immutable [`ServiceProvider`].
//!
//! ## Pattern
//!
//! ```text
//! deployers ──add_singleton / configure──▶ ServiceCollection
//!                                               │ build()
//!                                               ▼
//!                           dill::CatalogBuilder::add_value(...)
//!                                               │
//!                                               ▼
//!                           ServiceProvider::get::<T>() → Arc<T>
//! ```
//!
//! A second registration of the same type replaces the first one, so
//! resolution never sees two implementations of a type.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dill::{Catalog, CatalogBuilder};
use fireasy_domain::error::{Error, Result};
use tracing::debug;

type Registration = Box<dyn FnOnce(&mut CatalogBuilder) + Send>;

trait OptionSlot: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn register(self: Box<Self>, builder: &mut CatalogBuilder);
}

struct OptionValue<T>(T);

impl<T> OptionSlot for OptionValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        &self.0
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.0
    }

    fn register(self: Box<Self>, builder: &mut CatalogBuilder) {
        builder.add_value(self.0);
    }
}

/// Mutable registration surface used by deployers
#[derive(Default)]
pub struct ServiceCollection {
    singletons: Vec<(TypeId, &'static str, Registration)>,
    options: HashMap<TypeId, (&'static str, Box<dyn OptionSlot>)>,
}

impl ServiceCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a singleton value
    ///
    /// Replaces any earlier registration of the same type.
    pub fn add_singleton<T>(&mut self, value: T) -> &mut Self
    where
        T: Clone + Send + Sync + 'static,
    {
        let id = TypeId::of::<T>();
        let name = type_name::<T>();
        let registration: Registration = Box::new(move |builder: &mut CatalogBuilder| {
            builder.add_value(value);
        });

        if let Some(slot) = self.singletons.iter_mut().find(|(t, _, _)| *t == id) {
            debug!(service = name, "Replacing singleton registration");
            slot.2 = registration;
        } else {
            debug!(service = name, "Registering singleton");
            self.singletons.push((id, name, registration));
        }
        self
    }

    /// Seed an options object, replacing any previous value
    pub fn add_options<T>(&mut self, value: T) -> &mut Self
    where
        T: Clone + Send + Sync + 'static,
    {
        let slot: Box<dyn OptionSlot> = Box::new(OptionValue(value));
        self.options
            .insert(TypeId::of::<T>(), (type_name::<T>(), slot));
        self
    }

    /// Mutate an options object, creating it from `Default` when absent
    pub fn configure<T, F>(&mut self, f: F) -> &mut Self
    where
        T: Default + Clone + Send + Sync + 'static,
        F: FnOnce(&mut T),
    {
        let (_, slot) = self
            .options
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                let slot: Box<dyn OptionSlot> = Box::new(OptionValue(T::default()));
                (type_name::<T>(), slot)
            });
        if let Some(value) = slot.as_any_mut().downcast_mut::<T>() {
            f(value);
        }
        self
    }

    /// Current value of an options object
    pub fn options<T: 'static>(&self) -> Option<&T> {
        self.options
            .get(&TypeId::of::<T>())
            .and_then(|(_, slot)| slot.as_any().downcast_ref::<T>())
    }

    /// Whether a singleton or options object of type `T` is registered
    pub fn contains<T: 'static>(&self) -> bool {
        let id = TypeId::of::<T>();
        self.options.contains_key(&id) || self.singletons.iter().any(|(t, _, _)| *t == id)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.registered_types().len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.singletons.is_empty() && self.options.is_empty()
    }

    /// Names of every registered type, sorted
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .singletons
            .iter()
            .filter(|(id, _, _)| !self.options.contains_key(id))
            .map(|(_, name, _)| *name)
            .chain(self.options.values().map(|(name, _)| *name))
            .collect();
        names.sort_unstable();
        names
    }

    /// Build the immutable service provider
    ///
    /// An options object shadows a singleton of the same type.
    pub fn build(self) -> ServiceProvider {
        let registered = self.registered_types();
        let mut builder = CatalogBuilder::new();

        for (id, _, registration) in self.singletons {
            if !self.options.contains_key(&id) {
                registration(&mut builder);
            }
        }
        for (_, (_, slot)) in self.options {
            slot.register(&mut builder);
        }

        debug!(services = registered.len(), "Built service provider");
        ServiceProvider {
            catalog: Arc::new(builder.build()),
            registered: Arc::new(registered),
        }
    }
}

impl fmt::Debug for ServiceCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCollection")
            .field("registered", &self.registered_types())
            .finish()
    }
}

/// Immutable, shareable service container
#[derive(Clone)]
pub struct ServiceProvider {
    catalog: Arc<Catalog>,
    registered: Arc<Vec<&'static str>>,
}

impl ServiceProvider {
    /// Resolve a registered service
    pub fn get<T>(&self) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.catalog
            .get_one::<T>()
            .map_err(|e| Error::injection(format!("{}: {e}", type_name::<T>())))
    }

    /// Resolve a service, returning `None` when it is not registered
    pub fn try_get<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.get::<T>().ok()
    }

    /// Names of the registered types
    pub fn registered_types(&self) -> &[&'static str] {
        &self.registered
    }
}

impl fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("registered", &self.registered)
            .finish()
    }
}

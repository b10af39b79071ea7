use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use productsapp_core::{DomainError, DomainResult, Validate};

use crate::product::Product;

/// Identity of a single [`ProductRegistry`] instance.
///
/// Uses UUIDv7 (time-ordered), generated once per registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RegistryId(Uuid);

impl RegistryId {
    fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for RegistryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Handle to a product stored in a [`ProductRegistry`].
///
/// Only the registry that issued a handle accepts it; handles cannot be built
/// or deserialized outside this module.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProductHandle {
    registry: RegistryId,
    index: usize,
}

impl ProductHandle {
    pub fn registry(&self) -> RegistryId {
        self.registry
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl core::fmt::Display for ProductHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "product #{} in registry {}", self.index, self.registry)
    }
}

/// In-memory product registry.
///
/// Products are owned by the registry once added and are never removed; a
/// sold product stays stored and only drops out of [`ProductRegistry::items`].
///
/// Not `Clone`: a copy would share the identity and accept the same handles.
/// No internal locking. Callers sharing a registry across threads wrap it in a
/// `Mutex`.
#[derive(Debug)]
pub struct ProductRegistry {
    id: RegistryId,
    products: Vec<Product>,
}

impl Default for ProductRegistry {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: RegistryId::new(),
            products: Vec::with_capacity(capacity),
        }
    }

    /// Validate and store a product.
    ///
    /// `None` is rejected with [`DomainError::ArgumentNull`] before anything
    /// else; a product without a name is rejected with
    /// [`DomainError::NameRequired`]. On either failure the registry is left
    /// untouched.
    pub fn add_new(&mut self, product: Option<Product>) -> DomainResult<ProductHandle> {
        let product = product.ok_or_else(|| DomainError::argument_null("product"))?;
        product.validate()?;

        let handle = ProductHandle {
            registry: self.id,
            index: self.products.len(),
        };
        debug!(handle = handle.index(), name = product.name(), "product registered");
        self.products.push(product);
        Ok(handle)
    }

    /// Mark a stored product as sold. Selling an already sold product is a no-op.
    ///
    /// A handle issued by another registry is rejected with
    /// [`DomainError::NotFound`] even when its index is in range here.
    pub fn sold(&mut self, handle: ProductHandle) -> DomainResult<()> {
        if handle.registry != self.id {
            return Err(DomainError::not_found(handle.to_string()));
        }
        let product = self
            .products
            .get_mut(handle.index)
            .ok_or_else(|| DomainError::not_found(handle.to_string()))?;

        product.mark_sold();
        debug!(handle = handle.index(), name = product.name(), "product sold");
        Ok(())
    }

    /// Unsold products in insertion order.
    ///
    /// Recomputed on every call, so a sale is reflected by the next call
    /// without any invalidation step. Do not cache the result across
    /// mutations.
    pub fn items(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(|p| !p.is_sold())
    }

    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// Look up a product by handle. `None` for handles from another registry.
    pub fn get(&self, handle: ProductHandle) -> Option<&Product> {
        if handle.registry != self.id {
            return None;
        }
        self.products.get(handle.index)
    }

    /// Every stored product, sold or not, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    /// Total number of stored products, including sold ones.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn unsold_count(&self) -> usize {
        self.items().count()
    }
}

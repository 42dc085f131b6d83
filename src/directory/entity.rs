//! Generic directory plus the user and product projections.

use crate::catalog::domain::{Product, ProductId, User, UserId};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Values that carry a human-readable name.
pub trait DisplayName {
    /// Returns the name shown in place of the identifier.
    fn display_name(&self) -> &str;
}

impl DisplayName for String {
    fn display_name(&self) -> &str {
        self
    }
}

/// Ordered id-keyed lookup built from a list response.
///
/// Iteration follows the order in which the backend returned the items. A
/// repeated key replaces the earlier value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDirectory<K, V>
where
    K: Eq + Hash,
{
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for EntityDirectory<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> EntityDirectory<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Projects every item into a directory entry.
    pub fn build<T, I, F>(items: I, project: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(T) -> (K, V),
    {
        let mut directory = Self::default();
        for item in items {
            let (key, value) = project(item);
            directory.insert(key, value);
        }
        directory
    }

    fn insert(&mut self, key: K, value: V) {
        if let Some(slot) = self
            .index
            .get(&key)
            .and_then(|position| self.entries.get_mut(*position))
        {
            slot.1 = value;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }

    /// Looks up an entry.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index
            .get(key)
            .and_then(|position| self.entries.get(*position))
            .map(|(_, value)| value)
    }

    /// Returns whether the key is present.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the directory holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in backend order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<K, V> EntityDirectory<K, V>
where
    K: Eq + Hash + Clone + fmt::Display,
    V: DisplayName,
{
    /// Resolves a reference to its display name, falling back to the raw
    /// identifier when the entry is missing or unnamed.
    #[must_use]
    pub fn label(&self, key: &K) -> String {
        self.get(key)
            .map(DisplayName::display_name)
            .filter(|name| !name.trim().is_empty())
            .map_or_else(|| key.to_string(), str::to_owned)
    }
}

/// Customer names by id.
pub type UserDirectory = EntityDirectory<UserId, String>;

impl UserDirectory {
    /// Builds the directory from a user list.
    #[must_use]
    pub fn from_users(users: &[User]) -> Self {
        Self::build(users, |user| (user.id().clone(), user.name().to_owned()))
    }
}

/// Product fields needed by the order screens.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    /// Package name.
    pub name: String,
    /// Monthly price in rupiah.
    pub price: f64,
    /// Bandwidth in Mbps.
    pub speed: f64,
}

impl DisplayName for ProductSummary {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Product summaries by id.
pub type ProductDirectory = EntityDirectory<ProductId, ProductSummary>;

impl ProductDirectory {
    /// Builds the directory from a product list.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        Self::build(products, |product| {
            (
                product.id().clone(),
                ProductSummary {
                    name: product.name().to_owned(),
                    price: product.price(),
                    speed: product.speed(),
                },
            )
        })
    }
}

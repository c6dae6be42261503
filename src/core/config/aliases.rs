use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub target: String,
}

impl Alias {
    pub fn new(name: &str, target: &str) -> Self {
        Self {
            name: name.to_owned(),
            target: target.to_owned(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AliasError {
    CapacityExceeded(usize),
    NotFound(String),
}

impl fmt::Display for AliasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasError::CapacityExceeded(max) => {
                write!(f, "maximum number of aliases reached ({})", max)
            }
            AliasError::NotFound(name) => write!(f, "alias not found: {}", name),
        }
    }
}

impl std::error::Error for AliasError {}

/// Ordered, bounded alias storage.
///
/// Entries keep insertion order. Duplicate names are accepted and lookups
/// return the first match, so a later `add` of an existing name is shadowed
/// until the earlier entry is removed.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<Alias>,
    capacity: usize,
}

impl AliasTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, name: &str, target: &str) -> Result<(), AliasError> {
        if self.is_full() {
            return Err(AliasError::CapacityExceeded(self.capacity));
        }
        self.entries.push(Alias::new(name, target));
        Ok(())
    }

    /// Removes the first entry named `name`, shifting later entries down.
    pub fn remove(&mut self, name: &str) -> Result<Alias, AliasError> {
        let index = self
            .entries
            .iter()
            .position(|alias| alias.name == name)
            .ok_or_else(|| AliasError::NotFound(name.to_owned()))?;
        Ok(self.entries.remove(index))
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|alias| alias.name == name)
            .map(|alias| alias.target.as_str())
    }

    pub fn list(&self) -> &[Alias] {
        &self.entries
    }

    /// Appends as many pairs as fit; the rest are dropped. Returns the
    /// number of pairs accepted.
    pub fn extend_lenient<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = Alias>,
    {
        let mut accepted = 0;
        for alias in pairs {
            if self.is_full() {
                continue;
            }
            self.entries.push(alias);
            accepted += 1;
        }
        accepted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

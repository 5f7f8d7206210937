/// State of a single slot in the table
///
/// A slot starts out `Empty`, becomes `Occupied` on insert,
/// turns into a `Tombstone` on remove and may be reused by a later insert.
/// A `Tombstone` never goes back to `Empty`, only a rehash gets rid of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    #[default]
    Empty,
    Tombstone,
    Occupied(i32),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// Returns the stored key, if the slot holds one
    pub fn key(&self) -> Option<i32> {
        match self {
            Slot::Occupied(key) => Some(*key),
            _ => None,
        }
    }

    /// Shorthand for `self.key() == Some(key)`
    pub fn holds(&self, key: i32) -> bool {
        self.key() == Some(key)
    }

    /// Insert may place a key here
    pub(crate) fn is_free(&self) -> bool {
        !matches!(self, Slot::Occupied(_))
    }

    /// Token used when dumping the table, `-` for anything without a key
    pub fn token(&self) -> String {
        match self {
            Slot::Occupied(key) => key.to_string(),
            _ => "-".to_string(),
        }
    }
}

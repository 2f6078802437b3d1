//! The category registry maps category keys to their display metadata.
//!
//! Transactions store their category as free text. The registry is consulted
//! only when rendering, and unknown keys resolve to a fallback entry instead
//! of being rejected.

/// Display metadata for a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    /// The lowercase key stored on transactions, e.g. "food".
    pub key: &'static str,
    /// The human readable label used in charts and menus.
    pub label: &'static str,
    /// Tailwind classes for the category badge.
    pub badge_style: &'static str,
    /// The colour used for this category in charts.
    pub chart_color: &'static str,
    /// A single glyph shown next to the category name.
    pub icon: &'static str,
}

/// The result of looking up a category key in the [CategoryRegistry].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLookup<'a> {
    /// The key matched a registered category.
    Found(&'a CategoryEntry),
    /// The key was not registered, so the fallback entry applies.
    Fallback(&'a CategoryEntry),
}

impl<'a> CategoryLookup<'a> {
    /// The entry to render, regardless of whether the lookup fell back.
    pub fn entry(self) -> &'a CategoryEntry {
        match self {
            CategoryLookup::Found(entry) | CategoryLookup::Fallback(entry) => entry,
        }
    }

    /// Whether the lookup used the fallback entry.
    pub fn is_fallback(self) -> bool {
        matches!(self, CategoryLookup::Fallback(_))
    }
}

/// The category assigned to new expenses when none is chosen.
pub const DEFAULT_CATEGORY: &str = "food";

const FOOD: CategoryEntry = CategoryEntry {
    key: "food",
    label: "Food",
    badge_style: "text-green-600 bg-green-100 dark:text-green-400 dark:bg-gray-900",
    chart_color: "hsl(0, 84%, 60%)",
    icon: "🥗",
};

const WORK: CategoryEntry = CategoryEntry {
    key: "work",
    label: "Work",
    badge_style: "text-blue-600 bg-blue-100 dark:text-blue-500 dark:bg-gray-900",
    chart_color: "hsl(221, 83%, 53%)",
    icon: "💼",
};

const ENTERTAINMENT: CategoryEntry = CategoryEntry {
    key: "entertainment",
    label: "Personal",
    badge_style: "text-amber-600 bg-amber-100 dark:text-amber-300 dark:bg-gray-900",
    chart_color: "hsl(262, 83%, 58%)",
    icon: "🎬",
};

const OTHER: CategoryEntry = CategoryEntry {
    key: "other",
    label: "Other",
    badge_style: "text-gray-600 bg-gray-100 dark:text-gray-300 dark:bg-gray-900",
    chart_color: "hsl(0, 0%, 60%)",
    icon: "💳",
};

/// A static lookup from category key to [CategoryEntry] with a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    entries: Vec<CategoryEntry>,
    fallback: CategoryEntry,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(vec![FOOD, WORK, ENTERTAINMENT], OTHER)
    }
}

impl CategoryRegistry {
    /// Create a registry from `entries`, using `fallback` for unknown keys.
    ///
    /// Entry keys are expected to be lowercase since lookups lowercase the
    /// key before matching.
    pub fn new(entries: Vec<CategoryEntry>, fallback: CategoryEntry) -> Self {
        Self { entries, fallback }
    }

    /// Find the entry for `key`, ignoring case and surrounding whitespace.
    pub fn lookup(&self, key: &str) -> CategoryLookup<'_> {
        let normalized = key.trim().to_lowercase();

        match self.entries.iter().find(|entry| entry.key == normalized) {
            Some(entry) => CategoryLookup::Found(entry),
            None => CategoryLookup::Fallback(&self.fallback),
        }
    }

    /// The registered entries in registration order, excluding the fallback.
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// The entry used for unknown category keys.
    pub fn fallback(&self) -> &CategoryEntry {
        &self.fallback
    }
}

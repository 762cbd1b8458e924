//! Fixed-column grid formatting
//!
//! The page builder's CSS assumes every row is exactly `columns` wide, so
//! short rows are padded with empty placeholder slots. Layout never pages:
//! a list splits into at most two groups, the second holding the whole
//! remainder.

use crate::model::{visible, Visibility};

/// Number of columns used by every grid on the site
pub const DEFAULT_COLUMNS: usize = 4;

/// One-bit image loading hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPriority {
    /// Eager, `fetchpriority="high"`
    High,
    /// Deferred, `loading="lazy"`
    Lazy,
}

impl LoadPriority {
    /// Attribute rendered on the `<img>` tag
    #[inline]
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::High => r#"fetchpriority="high""#,
            Self::Lazy => r#"loading="lazy""#,
        }
    }
}

/// A cell of a grid group
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, T> {
    /// Occupied by a record
    Filled {
        /// The record
        item: &'a T,
        /// Loading hint for the record's image
        priority: LoadPriority,
    },
    /// Empty padding cell
    Placeholder,
}

impl<'a, T> Slot<'a, T> {
    /// The record, if the slot is filled
    #[inline]
    #[must_use]
    pub fn item(&self) -> Option<&'a T> {
        match self {
            Self::Filled { item, .. } => Some(*item),
            Self::Placeholder => None,
        }
    }
}

/// One row of slots
#[derive(Debug, PartialEq, Eq)]
pub struct Group<'a, T> {
    slots: Vec<Slot<'a, T>>,
}

impl<'a, T> Group<'a, T> {
    fn padded(items: &[&'a T], first_high: bool, width: usize) -> Self {
        let mut slots: Vec<Slot<'a, T>> = items
            .iter()
            .enumerate()
            .map(|(i, &item)| Slot::Filled {
                item,
                priority: if first_high && i == 0 {
                    LoadPriority::High
                } else {
                    LoadPriority::Lazy
                },
            })
            .collect();
        let padding = width.saturating_sub(slots.len());
        slots.extend((0..padding).map(|_| Slot::Placeholder));
        Self { slots }
    }

    /// All slots in order, placeholders last
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot<'a, T>] {
        &self.slots
    }

    /// Total number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the group has no slots at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Records in the group, in order
    pub fn items(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.slots.iter().filter_map(Slot::item)
    }

    /// Number of padding slots
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Placeholder))
            .count()
    }
}

/// Split records into at most two groups padded to `columns`
///
/// Only the first record of the first group loads eagerly. An empty input
/// yields no groups. A zero column count is treated as one.
#[must_use]
pub fn layout<'a, T>(items: &[&'a T], columns: usize) -> Vec<Group<'a, T>> {
    let columns = columns.max(1);
    if items.is_empty() {
        return Vec::new();
    }

    let split = columns.min(items.len());
    let (first, rest) = items.split_at(split);
    let mut groups = vec![Group::padded(first, true, columns)];
    if !rest.is_empty() {
        groups.push(Group::padded(rest, false, columns));
    }
    groups
}

/// [`layout`] after dropping hidden records
#[must_use]
pub fn layout_visible<T: Visibility>(records: &[T], columns: usize) -> Vec<Group<'_, T>> {
    layout(&visible(records), columns)
}

/// A single group padded up to `columns`; longer lists are not padded
#[must_use]
pub fn single_row<'a, T>(items: &[&'a T], columns: usize) -> Group<'a, T> {
    Group::padded(items, false, columns.max(1))
}

/// A single group padded to the next multiple of `columns`
#[must_use]
pub fn wrapped_rows<'a, T>(items: &[&'a T], columns: usize) -> Group<'a, T> {
    let columns = columns.max(1);
    let width = items.len().div_ceil(columns) * columns;
    Group::padded(items, false, width)
}

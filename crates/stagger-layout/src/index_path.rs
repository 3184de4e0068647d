//! Addressing for laid-out elements.
//!
//! Body items are addressed by [`IndexPath`]. Headers and footers have no
//! item index of their own, so the engine keys everything by
//! [`ElementPath`], whose ordering is the layout order of a pass:
//! sections in increasing order, and within a section the header, then the
//! items, then the footer.

use std::fmt;

/// Position of a body item inside the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

/// The kind of element an attribute describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Header,
    Item,
    Footer,
}

/// Slot of an element within its section.
///
/// The derived ordering places the header first and the footer last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Header,
    Item(usize),
    Footer,
}

/// Totally ordered key of a header, item or footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementPath {
    pub section: usize,
    pub slot: Slot,
}

impl ElementPath {
    /// The first element of any content: the header of section 0.
    pub const FIRST: ElementPath = ElementPath {
        section: 0,
        slot: Slot::Header,
    };

    pub const fn header(section: usize) -> Self {
        Self {
            section,
            slot: Slot::Header,
        }
    }

    pub const fn item(index_path: IndexPath) -> Self {
        Self {
            section: index_path.section,
            slot: Slot::Item(index_path.item),
        }
    }

    pub const fn footer(section: usize) -> Self {
        Self {
            section,
            slot: Slot::Footer,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self.slot {
            Slot::Header => ElementKind::Header,
            Slot::Item(_) => ElementKind::Item,
            Slot::Footer => ElementKind::Footer,
        }
    }

    /// Returns the index path of a body item, `None` for headers and footers.
    pub fn index_path(&self) -> Option<IndexPath> {
        match self.slot {
            Slot::Item(item) => Some(IndexPath::new(self.section, item)),
            Slot::Header | Slot::Footer => None,
        }
    }
}

impl From<IndexPath> for ElementPath {
    fn from(index_path: IndexPath) -> Self {
        ElementPath::item(index_path)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Slot::Header => write!(f, "header of section {}", self.section),
            Slot::Item(item) => write!(f, "item [{}, {}]", self.section, item),
            Slot::Footer => write!(f, "footer of section {}", self.section),
        }
    }
}

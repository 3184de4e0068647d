use crate::index_path::{ElementPath, IndexPath};

/// Error a [`LayoutDataSource`](crate::LayoutDataSource) reports for a
/// single section or item.
///
/// The engine never fails a pass because of one of these; the affected
/// element degrades to a fallback and the rest of the content is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    SectionOutOfRange {
        section: usize,
        section_count: usize,
    },
    ItemOutOfRange {
        index_path: IndexPath,
        item_count: usize,
    },
    Unavailable {
        element: ElementPath,
        reason: String,
    },
}

impl LayoutError {
    pub fn unavailable(element: impl Into<ElementPath>, reason: impl Into<String>) -> Self {
        LayoutError::Unavailable {
            element: element.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::SectionOutOfRange {
                section,
                section_count,
            } => write!(
                f,
                "section {section} out of range; content has {section_count} sections"
            ),
            LayoutError::ItemOutOfRange {
                index_path,
                item_count,
            } => write!(
                f,
                "item {index_path} out of range; section has {item_count} items"
            ),
            LayoutError::Unavailable { element, reason } => {
                write!(f, "layout input for {element} unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        let error = LayoutError::unavailable(IndexPath::new(1, 4), "image metadata missing");
        assert_eq!(
            error.to_string(),
            "layout input for item [1, 4] unavailable: image metadata missing"
        );

        let error = LayoutError::ItemOutOfRange {
            index_path: IndexPath::new(0, 9),
            item_count: 3,
        };
        assert_eq!(
            error.to_string(),
            "item [0, 9] out of range; section has 3 items"
        );
    }
}

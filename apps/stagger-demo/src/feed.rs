//! Mock feed content.
//!
//! One block per section: a cover image, a self-sizing text paragraph,
//! horizontal color strips, a color grid and a waterfall of tiles.

use stagger_geometry::{EdgeInsets, Size};
use stagger_layout::{
    ElementPath, IndexPath, ItemSize, LayoutDataSource, LayoutError, SectionLayout,
};

const HEADER_HEIGHT: f32 = 44.0;
const SPACING: f32 = 8.0;
const TEXT_LINE_HEIGHT: f32 = 20.0;
const TEXT_CHAR_WIDTH: f32 = 8.0;
const TEXT_PADDING: f32 = 24.0;

#[derive(Clone, Debug)]
pub enum Block {
    Cover { image: Size },
    Text { title: String, body: String },
    Strip { title: String, height: f32 },
    Grid { title: String, columns: usize, tiles: usize },
    Waterfall { title: String, columns: usize, tiles: Vec<Size> },
}

impl Block {
    fn title(&self) -> Option<&str> {
        match self {
            Block::Cover { .. } => None,
            Block::Text { title, .. }
            | Block::Strip { title, .. }
            | Block::Grid { title, .. }
            | Block::Waterfall { title, .. } => Some(title),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Feed {
    blocks: Vec<Block>,
}

impl Feed {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn mock() -> Self {
        let strips = ["Reds", "Greens", "Blues"].map(|title| Block::Strip {
            title: title.to_string(),
            height: 120.0,
        });
        let tiles = (0..14)
            .map(|i| Size::new(300.0, 220.0 + (i * 67 % 260) as f32))
            .collect();

        let mut blocks = vec![
            Block::Cover {
                image: Size::new(1200.0, 800.0),
            },
            Block::Text {
                title: "About".to_string(),
                body: "Every section picks its own arrangement. Text cells size \
                       themselves after they are rendered, and only the cells below \
                       a resized one move."
                    .to_string(),
            },
        ];
        blocks.extend(strips);
        blocks.push(Block::Grid {
            title: "Palette".to_string(),
            columns: 3,
            tiles: 9,
        });
        blocks.push(Block::Waterfall {
            title: "Gallery".to_string(),
            columns: 2,
            tiles,
        });
        Self::new(blocks)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Height a text cell needs at `width`, as a renderer would report it.
    pub fn measure(&self, index_path: IndexPath, width: f32) -> Option<Size> {
        match self.blocks.get(index_path.section)? {
            Block::Text { body, .. } => {
                let per_line = ((width - TEXT_PADDING) / TEXT_CHAR_WIDTH).floor().max(1.0);
                let lines = (body.chars().count() as f32 / per_line).ceil();
                Some(Size::new(width, lines * TEXT_LINE_HEIGHT + TEXT_PADDING))
            }
            _ => None,
        }
    }

    fn block(&self, index_path: IndexPath) -> Result<&Block, LayoutError> {
        self.blocks
            .get(index_path.section)
            .ok_or(LayoutError::SectionOutOfRange {
                section: index_path.section,
                section_count: self.blocks.len(),
            })
    }
}

impl LayoutDataSource for Feed {
    fn section_count(&self) -> usize {
        self.blocks.len()
    }

    fn item_count(&self, section: usize) -> usize {
        match self.blocks.get(section) {
            Some(Block::Grid { tiles, .. }) => *tiles,
            Some(Block::Waterfall { tiles, .. }) => tiles.len(),
            Some(_) => 1,
            None => 0,
        }
    }

    fn section_layout(&self, section: usize) -> Result<SectionLayout, LayoutError> {
        match self.blocks.get(section) {
            Some(Block::Grid { columns, .. }) => Ok(SectionLayout::flow(*columns)),
            Some(Block::Waterfall { columns, .. }) => Ok(SectionLayout::waterfall(*columns)),
            Some(_) => Ok(SectionLayout::flow(1)),
            None => Err(LayoutError::unavailable(
                ElementPath::header(section),
                "no such block",
            )),
        }
    }

    fn item_size(&self, index_path: IndexPath) -> Result<ItemSize, LayoutError> {
        let size = match self.block(index_path)? {
            Block::Cover { image } => ItemSize::Explicit(*image),
            Block::Text { .. } => ItemSize::Automatic,
            Block::Strip { height, .. } => ItemSize::explicit(375.0, *height),
            Block::Grid { .. } => ItemSize::explicit(1.0, 1.0),
            Block::Waterfall { tiles, .. } => match tiles.get(index_path.item) {
                Some(tile) => ItemSize::Explicit(*tile),
                None => {
                    return Err(LayoutError::ItemOutOfRange {
                        index_path,
                        item_count: tiles.len(),
                    })
                }
            },
        };
        Ok(size)
    }

    fn header_height(&self, section: usize) -> f32 {
        match self.blocks.get(section).and_then(Block::title) {
            Some(_) => HEADER_HEIGHT,
            None => 0.0,
        }
    }

    fn section_inset(&self, section: usize) -> EdgeInsets {
        match self.blocks.get(section) {
            Some(Block::Cover { .. }) | None => EdgeInsets::ZERO,
            Some(_) => EdgeInsets::horizontal(16.0),
        }
    }

    fn line_spacing(&self, section: usize) -> f32 {
        match self.blocks.get(section) {
            Some(Block::Grid { .. } | Block::Waterfall { .. }) => SPACING,
            _ => 0.0,
        }
    }

    fn inter_item_spacing(&self, section: usize) -> f32 {
        self.line_spacing(section)
    }
}

//! Group and row partitioning for an ordered strip of gallery images.
//!
//! The strip is split into *groups* (maximal runs of images whose
//! containers are immediate siblings — the caller evaluates that adjacency
//! and sets [`GalleryImage::connected`]). Each group is packed greedily
//! into rows: the smallest prefix whose exact-fill height drops below the
//! max-height cap becomes a row, and the remainder continues. A group
//! whose full remainder never drops below the cap becomes one final row
//! clamped to the cap.
//!
//! # Example
//!
//! ```
//! use rowfill::{GalleryImage, Justify, NaturalSize};
//!
//! let justify = Justify::new(10, 200);
//! let strip = [
//!     GalleryImage::new(NaturalSize::new(300, 200)), // 1.5
//!     GalleryImage::new(NaturalSize::new(400, 400)), // 1.0
//!     GalleryImage::new(NaturalSize::new(133, 100)), // 1.33
//!     GalleryImage::new(NaturalSize::new(177, 100)), // 1.77
//!     GalleryImage::new(NaturalSize::new(300, 400)), // 0.75
//! ];
//!
//! let placements = justify.align(Some(630), &strip).unwrap();
//! assert_eq!(placements.len(), 5);
//! // First row: images 0–2 at the height that fills 630 px.
//! assert_eq!(placements[0].row, 0);
//! assert_eq!(placements[2].row, 0);
//! assert!(placements[0].height < 200.0);
//! ```

use alloc::vec::Vec;

use crate::row::{Justify, LayoutError, NaturalSize, Spacing};

/// One image in the input strip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GalleryImage {
    /// Intrinsic dimensions, `(0, 0)` while undecoded.
    pub size: NaturalSize,
    /// Whether this image's container is an immediate sibling of the
    /// previous image's container. A `false` value starts a new group.
    /// Ignored for the first image in the strip.
    pub connected: bool,
}

impl GalleryImage {
    /// An image connected to its predecessor.
    pub const fn new(size: NaturalSize) -> Self {
        Self {
            size,
            connected: true,
        }
    }

    /// An image that starts a new group.
    pub const fn detached(size: NaturalSize) -> Self {
        Self {
            size,
            connected: false,
        }
    }
}

/// One image within a finalized row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowItem {
    /// Position of the image in the original strip.
    pub index: usize,
    /// Rendered width in pixels (`height · aspect`).
    pub width: f64,
}

/// A finalized row of images at a common height.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Index of the group this row belongs to.
    pub group: usize,
    /// Common rendered height in pixels.
    pub height: f64,
    /// Whether this row was clamped to the max height because no prefix of
    /// the remaining group dropped below the cap. A clamped row may
    /// underfill (or, for a single oversized image, overflow) the
    /// container width.
    pub clamped: bool,
    /// Images in this row, in strip order.
    pub items: Vec<RowItem>,
}

impl Row {
    /// Total rendered width including per-image margins.
    ///
    /// For an unclamped row this equals the container width to within
    /// millipixel flooring error.
    pub fn fill_width(&self, margin: u32) -> f64 {
        let widths: f64 = self.items.iter().map(|item| item.width).sum();
        widths + self.items.len() as f64 * margin as f64
    }
}

/// Computed size and spacing for one image, ready for the host to apply.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Position of the image in the original strip.
    pub index: usize,
    /// Group the image belongs to.
    pub group: usize,
    /// Row the image landed in, numbered across the whole strip.
    pub row: usize,
    /// Rendered width in pixels.
    pub width: f64,
    /// Rendered height in pixels (uniform per row).
    pub height: f64,
    /// Style margins to apply alongside the size.
    pub spacing: Spacing,
}

impl Justify {
    /// Partition a single pre-grouped strip into justified rows.
    ///
    /// Greedy prefix search per the fill-height formula: the smallest
    /// prefix whose exact-fill height is below `max_height` becomes a row;
    /// if no prefix qualifies, the entire remainder becomes one row
    /// clamped to `max_height`.
    pub fn rows(
        &self,
        container_width: u32,
        images: &[NaturalSize],
    ) -> Result<Vec<Row>, LayoutError> {
        if self.max_height == 0 {
            return Err(LayoutError::ZeroMaxHeight);
        }
        let mut rows = Vec::new();
        self.pack_group(0, 0, container_width, images, &mut rows);
        Ok(rows)
    }

    /// Lay out a full strip: split into groups, pack each into rows, and
    /// emit one [`Placement`] per image in strip order.
    ///
    /// `container_width` is the container's *content* width, measured
    /// fresh by the caller for every pass; `None` (container not found)
    /// yields an empty placement list rather than an error.
    pub fn align(
        &self,
        container_width: Option<u32>,
        images: &[GalleryImage],
    ) -> Result<Vec<Placement>, LayoutError> {
        if self.max_height == 0 {
            return Err(LayoutError::ZeroMaxHeight);
        }
        let Some(width) = container_width else {
            return Ok(Vec::new());
        };

        let mut rows = Vec::new();
        let mut sizes = Vec::with_capacity(images.len());
        let mut group = 0;
        let mut start = 0;
        for (i, img) in images.iter().enumerate() {
            if i > 0 && !img.connected {
                self.pack_group(group, start, width, &sizes[start..], &mut rows);
                group += 1;
                start = i;
            }
            sizes.push(img.size);
        }
        if start < sizes.len() {
            self.pack_group(group, start, width, &sizes[start..], &mut rows);
        }

        let spacing = self.spacing();
        let mut placements = Vec::with_capacity(images.len());
        for (row_index, row) in rows.iter().enumerate() {
            for item in &row.items {
                placements.push(Placement {
                    index: item.index,
                    group: row.group,
                    row: row_index,
                    width: item.width,
                    height: row.height,
                    spacing,
                });
            }
        }
        Ok(placements)
    }

    /// Pack one group into rows, appending to `rows`. `base` is the strip
    /// index of the group's first image.
    fn pack_group(
        &self,
        group: usize,
        base: usize,
        container_width: u32,
        images: &[NaturalSize],
        rows: &mut Vec<Row>,
    ) {
        let cap = self.max_height as f64;
        let mut rest = images;
        let mut offset = base;
        while !rest.is_empty() {
            let mut take = rest.len();
            let mut height = 0.0;
            let mut fits = false;
            for k in 1..=rest.len() {
                height = self.fill_height(&rest[..k], container_width);
                if height < cap {
                    take = k;
                    fits = true;
                    break;
                }
            }
            if !fits {
                // No prefix drops below the cap: the whole remainder
                // becomes one row at the cap rather than staying unsized.
                height = height.min(cap);
            }
            let items = rest[..take]
                .iter()
                .enumerate()
                .map(|(i, img)| RowItem {
                    index: offset + i,
                    width: height * img.aspect(),
                })
                .collect();
            rows.push(Row {
                group,
                height,
                clamped: !fits,
                items,
            });
            rest = &rest[take..];
            offset += take;
        }
    }
}

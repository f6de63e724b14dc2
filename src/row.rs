//! Fill-height math and layout constraints for justified image rows.
//!
//! A justified row takes k images at a common height `h` and fills the
//! container width `W` exactly:
//!
//! ```text
//! W = h·a_1 + h·a_2 + … + h·a_k + k·margin
//! h = (W − k·margin) / Σ a_i
//! ```
//!
//! where `a_i` is each image's aspect ratio (width/height). Pure geometry —
//! no pixel operations, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use rowfill::{Justify, NaturalSize};
//!
//! let justify = Justify::new(10, 200);
//! let strip = [NaturalSize::new(300, 200), NaturalSize::new(400, 400)];
//!
//! // Two images (aspects 1.5 and 1.0) filling 510 px: h = (510 − 20) / 2.5
//! let h = justify.fill_height(&strip, 510);
//! assert_eq!(h, 196.0);
//! ```

/// Intrinsic pixel dimensions of an image, as reported once decoded.
///
/// A zero on either axis means the image has not been decoded yet (still
/// loading, or failed to load).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalSize {
    /// Intrinsic width in pixels. Zero when unknown.
    pub width: u32,
    /// Intrinsic height in pixels. Zero when unknown.
    pub height: u32,
}

impl NaturalSize {
    /// Create a natural size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of an image whose dimensions are not known yet.
    pub const fn undecoded() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// Whether both dimensions are known.
    pub const fn is_decoded(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Aspect ratio (width / height), or `1.0` when not decoded.
    ///
    /// The square fallback keeps the aspect-ratio sum of any non-empty
    /// prefix ≥ 1, so the fill-height division can never hit zero. Once
    /// the real dimensions arrive the caller re-aligns and the layout
    /// corrects itself.
    pub fn aspect(self) -> f64 {
        if self.is_decoded() {
            self.width as f64 / self.height as f64
        } else {
            1.0
        }
    }
}

/// Per-image style margins applied after sizing.
///
/// `left`/`top` form a small visual gutter; `right`/`bottom` reserve the
/// inter-image spacing, reduced by the inline rendering gap the host
/// contributes between adjacent inline elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Spacing {
    /// Left margin in pixels.
    pub left: u32,
    /// Top margin in pixels.
    pub top: u32,
    /// Right margin in pixels.
    pub right: u32,
    /// Bottom margin in pixels.
    pub bottom: u32,
}

/// Justified-row layout constraint.
///
/// Fixed for the lifetime of one layout pass: the spacing reserved per
/// image and the cap on row height. Container width is *not* part of the
/// constraint — it changes with the viewport and is passed fresh to each
/// compute call.
///
/// # Example
///
/// ```
/// use rowfill::Justify;
///
/// let justify = Justify::new(10, 200).gutter(3);
/// let spacing = justify.spacing();
/// assert_eq!(spacing.left, 3);
/// assert_eq!(spacing.right, 3); // margin − inline gap
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Justify {
    /// Horizontal pixels reserved per image in the fill-height formula.
    pub margin: u32,
    /// Upper bound on any row's height, in pixels. Must be positive.
    pub max_height: u32,
    /// Fixed left/top gutter in pixels.
    pub gutter: u32,
    /// Inline rendering gap compensated out of the right/bottom margin.
    pub inline_gap: u32,
}

impl Justify {
    /// Default left/top gutter in pixels.
    pub const DEFAULT_GUTTER: u32 = 3;
    /// Default inline-element rendering gap in pixels.
    pub const DEFAULT_INLINE_GAP: u32 = 7;

    /// Create a constraint with the default gutter and inline gap.
    pub const fn new(margin: u32, max_height: u32) -> Self {
        Self {
            margin,
            max_height,
            gutter: Self::DEFAULT_GUTTER,
            inline_gap: Self::DEFAULT_INLINE_GAP,
        }
    }

    /// Set the left/top gutter.
    pub const fn gutter(mut self, gutter: u32) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set the inline rendering gap compensated out of right/bottom margins.
    pub const fn inline_gap(mut self, gap: u32) -> Self {
        self.inline_gap = gap;
        self
    }

    /// Per-image style margins for this constraint.
    ///
    /// Right/bottom is `margin − inline_gap` (saturating), so total
    /// inter-image spacing stays consistent with the `margin` used in the
    /// fill-height formula.
    pub const fn spacing(&self) -> Spacing {
        let trailing = self.margin.saturating_sub(self.inline_gap);
        Spacing {
            left: self.gutter,
            top: self.gutter,
            right: trailing,
            bottom: trailing,
        }
    }

    /// Height that makes `images` exactly fill `container_width`.
    ///
    /// `h = (W − k·margin) / Σ aspect_i`, with the square fallback for
    /// undecoded images. The result is floored to millipixels so a host
    /// that rounds style values up cannot overflow the row.
    ///
    /// Degenerate inputs are absorbed rather than signaled: an empty slice
    /// yields `0.0`, and a container narrower than the reserved margins
    /// yields a non-positive height (which trivially satisfies the
    /// max-height cut and produces a zero-area row).
    pub fn fill_height(&self, images: &[NaturalSize], container_width: u32) -> f64 {
        if images.is_empty() {
            return 0.0;
        }
        let reserved = images.len() as f64 * self.margin as f64;
        let ratio_sum: f64 = images.iter().map(|img| img.aspect()).sum();
        floor_millis((container_width as f64 - reserved) / ratio_sum)
    }
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The constraint's `max_height` is zero.
    ZeroMaxHeight,
}

/// Floor to millipixel precision.
///
/// `f64::floor` is std-only; route through num-traits (libm) so `no_std`
/// builds work.
fn floor_millis(v: f64) -> f64 {
    num_traits::Float::floor(v * 1000.0) / 1000.0
}

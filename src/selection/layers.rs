// Selectable layer mask - the explicit filter passed into every spatial query

/// 32-bit layer mask. An object matches a filter when the two masks share a bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectionLayers(pub u32);

impl SelectionLayers {
    pub const NONE: Self = Self(0);
    pub const DEFAULT: Self = Self(1);
    pub const ALL: Self = Self(u32::MAX);

    /// Mask containing only `layer` (0..32)
    pub const fn layer(layer: u8) -> Self {
        Self(1 << (layer as u32 & 31))
    }

    pub const fn with(self, layer: u8) -> Self {
        Self(self.0 | Self::layer(layer).0)
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for SelectionLayers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

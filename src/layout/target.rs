//! Injected configuration for layout derivation.

use crate::error::ConfigError;
use crate::format::FormatTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Packing {
    /// C rules: members aligned to their own alignment, tail padded to the aggregate alignment.
    #[default]
    Natural,
    /// Every member at alignment one, no padding anywhere.
    Packed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutTarget {
    formats: FormatTable,
    pointer_width: u32,
    packing: Packing,
}

impl LayoutTarget {
    pub fn host() -> Self {
        Self {
            formats: FormatTable::standard(),
            pointer_width: std::mem::size_of::<usize>() as u32,
            packing: Packing::Natural,
        }
    }

    pub fn with_formats(mut self, formats: FormatTable) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_pointer_width(mut self, bytes: u32) -> Result<Self, ConfigError> {
        if !(1..=16).contains(&bytes) || !bytes.is_power_of_two() {
            return Err(ConfigError::InvalidPointerWidth(bytes));
        }
        self.pointer_width = bytes;
        Ok(self)
    }

    pub fn with_packing(mut self, packing: Packing) -> Self {
        self.packing = packing;
        self
    }

    pub fn formats(&self) -> &FormatTable {
        &self.formats
    }

    pub fn pointer_width(&self) -> u32 {
        self.pointer_width
    }

    pub fn packing(&self) -> Packing {
        self.packing
    }

    /// Alignment a member of natural alignment `natural` receives under this target.
    pub(crate) fn member_align(&self, natural: u32) -> u32 {
        match self.packing {
            Packing::Natural => natural.max(1),
            Packing::Packed => 1,
        }
    }
}

impl Default for LayoutTarget {
    fn default() -> Self {
        Self::host()
    }
}

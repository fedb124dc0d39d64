use std::{error::Error, fmt};

use smallvec::SmallVec;

use crate::format::{Endianness, FormatCode};
use crate::types::TypeKind;

pub type MappingResult<T> = Result<T, MappingError>;

/// Names of the nodes walked from the root of a descriptor tree down to the one that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePath {
    segments: SmallVec<[String; 4]>,
}

impl NodePath {
    pub fn root(name: &str) -> Self {
        let mut path = Self::default();
        path.push(name);
        path
    }

    pub fn push(&mut self, name: &str) {
        self.segments.push(name.to_owned());
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            if segment.is_empty() {
                f.write_str("<anon>")?;
            } else {
                f.write_str(segment)?;
            }
        }
        Ok(())
    }
}

/// A field referenced a code the injected format table does not know.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownFormatCode {
    pub endianness: Endianness,
    pub code: FormatCode,
}

impl fmt::Display for UnknownFormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown format code '{}{}'", self.endianness.tag(), self.code)
    }
}

/// Context shared by every "no mapping" failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingMapping {
    pub path: NodePath,
    pub kind: TypeKind,
    pub unknown_format: Option<UnknownFormatCode>,
    /// The node's extent or offset does not fit in a `u64` byte count.
    pub size_overflow: bool,
}

impl MissingMapping {
    pub fn new(path: NodePath, kind: TypeKind) -> Self {
        Self {
            path,
            kind,
            unknown_format: None,
            size_overflow: false,
        }
    }

    pub fn with_unknown_format(mut self, endianness: Endianness, code: FormatCode) -> Self {
        self.unknown_format = Some(UnknownFormatCode { endianness, code });
        self
    }

    pub fn with_size_overflow(mut self) -> Self {
        self.size_overflow = true;
        self
    }
}

/// Which derived representation a failed translation was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingTarget {
    Native,
    Element,
    Compiled,
}

impl fmt::Display for MappingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MappingTarget::Native => "native",
            MappingTarget::Element => "element",
            MappingTarget::Compiled => "compiled",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MappingError {
    NoNativeMapping(MissingMapping),
    NoElementMapping(MissingMapping),
    NoCompiledMapping(MissingMapping),
}

impl MappingError {
    pub fn target(&self) -> MappingTarget {
        match self {
            MappingError::NoNativeMapping(_) => MappingTarget::Native,
            MappingError::NoElementMapping(_) => MappingTarget::Element,
            MappingError::NoCompiledMapping(_) => MappingTarget::Compiled,
        }
    }

    pub fn missing(&self) -> &MissingMapping {
        match self {
            MappingError::NoNativeMapping(missing)
            | MappingError::NoElementMapping(missing)
            | MappingError::NoCompiledMapping(missing) => missing,
        }
    }

    pub fn path(&self) -> &NodePath {
        &self.missing().path
    }

    pub fn kind(&self) -> TypeKind {
        self.missing().kind
    }

    pub fn unknown_format(&self) -> Option<UnknownFormatCode> {
        self.missing().unknown_format
    }

    pub fn is_unknown_format_code(&self) -> bool {
        self.missing().unknown_format.is_some()
    }

    pub fn is_size_overflow(&self) -> bool {
        self.missing().size_overflow
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = self.missing();
        write!(
            f,
            "no {} mapping for {} ({})",
            self.target(),
            missing.path,
            missing.kind
        )?;
        if let Some(unknown) = &missing.unknown_format {
            write!(f, ": {unknown}")?;
        }
        if missing.size_overflow {
            f.write_str(": layout size exceeds u64")?;
        }
        Ok(())
    }
}

impl Error for MappingError {}

/// Raised by named-member access on a derived aggregate layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberLookupError {
    Missing { aggregate: String, member: String },
    Ambiguous { aggregate: String, member: String, count: usize },
}

impl fmt::Display for MemberLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberLookupError::Missing { aggregate, member } => {
                write!(f, "aggregate '{aggregate}' has no member '{member}'")
            }
            MemberLookupError::Ambiguous { aggregate, member, count } => {
                write!(f, "aggregate '{aggregate}' declares member '{member}' {count} times")
            }
        }
    }
}

impl Error for MemberLookupError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPointerWidth(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPointerWidth(width) => {
                write!(f, "pointer width {width} must be a power of two between 1 and 16 bytes")
            }
        }
    }
}

impl Error for ConfigError {}

//! Derived native memory layouts.

use std::fmt;

use crate::error::MemberLookupError;
use crate::format::{ByteOrder, NumericKind, ScalarRepr};

use super::walker::MemberWalker;

#[derive(Clone, Debug, PartialEq)]
pub enum NativeLayout {
    Scalar(ScalarLayout),
    Aggregate(AggregateLayout),
    Repeated(RepeatedLayout),
    Address(AddressLayout),
}

impl NativeLayout {
    pub fn size(&self) -> u64 {
        match self {
            NativeLayout::Scalar(scalar) => scalar.repr.byte_width as u64,
            NativeLayout::Aggregate(aggregate) => aggregate.size,
            NativeLayout::Repeated(repeated) => repeated.size(),
            NativeLayout::Address(address) => address.width as u64,
        }
    }

    pub fn align(&self) -> u32 {
        match self {
            NativeLayout::Scalar(scalar) => scalar.repr.byte_width.max(1),
            NativeLayout::Aggregate(aggregate) => aggregate.align,
            NativeLayout::Repeated(repeated) => repeated.element.align(),
            NativeLayout::Address(address) => address.width,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            NativeLayout::Scalar(_) => "scalar",
            NativeLayout::Aggregate(_) => "aggregate",
            NativeLayout::Repeated(_) => "repeated",
            NativeLayout::Address(_) => "address",
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarLayout> {
        if let NativeLayout::Scalar(value) = self { Some(value) } else { None }
    }

    pub fn as_aggregate(&self) -> Option<&AggregateLayout> {
        if let NativeLayout::Aggregate(value) = self { Some(value) } else { None }
    }

    pub fn as_repeated(&self) -> Option<&RepeatedLayout> {
        if let NativeLayout::Repeated(value) = self { Some(value) } else { None }
    }

    pub fn as_address(&self) -> Option<&AddressLayout> {
        if let NativeLayout::Address(value) = self { Some(value) } else { None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarLayout {
    pub repr: ScalarRepr,
    pub byte_order: ByteOrder,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberLayout {
    pub name: String,
    pub offset: u64,
    pub layout: NativeLayout,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AggregateLayout {
    pub name: String,
    pub members: Vec<MemberLayout>,
    pub size: u64,
    pub align: u32,
}

impl AggregateLayout {
    pub fn members(&self) -> &[MemberLayout] {
        &self.members
    }

    pub fn member_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(|member| member.name.as_str())
    }

    /// Named access. Duplicate names are kept in the layout and only rejected here.
    pub fn member(&self, name: &str) -> Result<&MemberLayout, MemberLookupError> {
        let mut matches = self.members.iter().filter(|member| member.name == name);
        let Some(first) = matches.next() else {
            return Err(MemberLookupError::Missing {
                aggregate: self.name.clone(),
                member: name.to_owned(),
            });
        };
        let extra = matches.count();
        if extra > 0 {
            return Err(MemberLookupError::Ambiguous {
                aggregate: self.name.clone(),
                member: name.to_owned(),
                count: extra + 1,
            });
        }
        Ok(first)
    }

    pub fn walk(&self) -> MemberWalker<'_> {
        MemberWalker::new(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RepeatedLayout {
    pub element: Box<NativeLayout>,
    pub count: u32,
    pub stride: u64,
}

impl RepeatedLayout {
    /// Compiled layouts are checked to fit; hand-built ones saturate.
    pub fn size(&self) -> u64 {
        self.stride.saturating_mul(self.count as u64)
    }
}

/// Opaque address. Its size is the target pointer width regardless of the pointee.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressLayout {
    pub pointee: Box<NativeLayout>,
    pub width: u32,
}

impl fmt::Display for ScalarLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = u64::from(self.repr.byte_width) * 8;
        match self.repr.kind {
            NumericKind::Unsigned => write!(f, "u{bits}")?,
            NumericKind::Signed => write!(f, "i{bits}")?,
            NumericKind::Floating => write!(f, "f{bits}")?,
            NumericKind::Boolean => f.write_str("bool")?,
        }
        if self.repr.byte_width > 1 {
            let suffix = match self.byte_order {
                ByteOrder::Little => "le",
                ByteOrder::Big => "be",
            };
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

impl fmt::Display for NativeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeLayout::Scalar(scalar) => write!(f, "{scalar}"),
            NativeLayout::Aggregate(aggregate) => {
                write!(f, "struct {} {{", aggregate.name)?;
                for (idx, member) in aggregate.members.iter().enumerate() {
                    let sep = if idx == 0 { " " } else { ", " };
                    write!(f, "{sep}{}: {} @{}", member.name, member.layout, member.offset)?;
                }
                if aggregate.members.is_empty() {
                    f.write_str("}")
                } else {
                    f.write_str(" }")
                }
            }
            NativeLayout::Repeated(repeated) => write!(f, "[{}; {}]", repeated.element, repeated.count),
            NativeLayout::Address(address) => write!(f, "*{}", address.pointee),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Size and lookup helpers on hand-built layouts.
    use super::*;

    fn scalar(width: u32, kind: NumericKind) -> NativeLayout {
        NativeLayout::Scalar(ScalarLayout {
            repr: ScalarRepr::new(width, kind),
            byte_order: ByteOrder::Little,
        })
    }

    fn aggregate(names: &[&str]) -> AggregateLayout {
        AggregateLayout {
            name: "agg".into(),
            members: names
                .iter()
                .enumerate()
                .map(|(idx, name)| MemberLayout {
                    name: (*name).into(),
                    offset: idx as u64,
                    layout: scalar(1, NumericKind::Unsigned),
                })
                .collect(),
            size: names.len() as u64,
            align: 1,
        }
    }

    #[test]
    fn member_lookup_distinguishes_missing_and_ambiguous() {
        // duplicates only become an error once a caller asks for them by name
        let agg = aggregate(&["a", "b", "a"]);
        assert_eq!(agg.member("b").map(|m| m.offset), Ok(1));
        assert_eq!(
            agg.member("a"),
            Err(MemberLookupError::Ambiguous { aggregate: "agg".into(), member: "a".into(), count: 2 })
        );
        assert!(matches!(agg.member("z"), Err(MemberLookupError::Missing { .. })));
    }

    #[test]
    fn repeated_size_is_stride_times_count() {
        let seq = RepeatedLayout {
            element: Box::new(scalar(4, NumericKind::Floating)),
            count: 3,
            stride: 4,
        };
        assert_eq!(NativeLayout::Repeated(seq).size(), 12);
    }

    #[test]
    fn display_uses_c_like_notation() {
        // rendering is used in diagnostics, keep it compact
        let layout = NativeLayout::Aggregate(AggregateLayout {
            name: "pt".into(),
            members: vec![
                MemberLayout { name: "x".into(), offset: 0, layout: scalar(4, NumericKind::Signed) },
                MemberLayout {
                    name: "tag".into(),
                    offset: 4,
                    layout: NativeLayout::Repeated(RepeatedLayout {
                        element: Box::new(scalar(1, NumericKind::Unsigned)),
                        count: 2,
                        stride: 1,
                    }),
                },
            ],
            size: 8,
            align: 4,
        });
        assert_eq!(layout.to_string(), "struct pt { x: i32le @0, tag: [u8; 2] @4 }");
        let empty = NativeLayout::Aggregate(aggregate(&[]));
        assert_eq!(empty.to_string(), "struct agg {}");
    }

    #[test]
    fn display_handles_oversized_custom_widths() {
        // table overrides may carry widths whose bit count exceeds u32
        let huge = ScalarLayout {
            repr: ScalarRepr::new(1 << 30, NumericKind::Unsigned),
            byte_order: ByteOrder::Big,
        };
        assert_eq!(huge.to_string(), "u8589934592be");
    }
}

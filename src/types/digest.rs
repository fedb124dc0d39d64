//! Structural SHA-256 fingerprint of a descriptor tree.

use std::fmt;

use sha2::{Digest, Sha256};

use super::Type;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn of(ty: &Type) -> Self {
        let mut hasher = Sha256::new();
        feed(&mut hasher, ty);
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

// Every variable-length item is length-prefixed so adjacent names cannot alias.
fn feed_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn feed_children<'a>(hasher: &mut Sha256, children: impl ExactSizeIterator<Item = &'a Type>) {
    hasher.update((children.len() as u64).to_le_bytes());
    for child in children {
        feed(hasher, child);
    }
}

fn feed(hasher: &mut Sha256, ty: &Type) {
    hasher.update([ty.kind() as u8]);
    match ty {
        Type::Field(field) => {
            feed_str(hasher, &field.name);
            hasher.update([field.endianness.tag() as u8, field.format.as_byte()]);
        }
        Type::Struct(aggregate) => {
            feed_str(hasher, &aggregate.name);
            feed_children(hasher, aggregate.fields.iter());
        }
        Type::Enum(enumeration) => {
            feed_str(hasher, &enumeration.name);
            hasher.update((enumeration.variants.len() as u64).to_le_bytes());
            for variant in &enumeration.variants {
                feed_str(hasher, &variant.label);
                hasher.update([variant.value]);
            }
        }
        Type::Union(union) => {
            feed_str(hasher, &union.name);
            feed(hasher, &union.tag);
            feed_children(hasher, union.options.iter());
        }
        Type::Vector(vector) => {
            hasher.update(vector.width.to_le_bytes());
            feed_children(hasher, vector.options.iter());
        }
        Type::Pointer(pointer) => feed(hasher, pointer.pointee()),
        Type::Sequence(sequence) => {
            feed_str(hasher, &sequence.name);
            hasher.update(sequence.length.to_le_bytes());
            feed(hasher, sequence.element());
        }
        Type::VariableString(string) => {
            feed_str(hasher, &string.name);
            feed(hasher, &string.ptr);
            feed(hasher, &string.length);
        }
        Type::TerminatedString(string) => {
            feed_str(hasher, &string.name);
            hasher.update([string.terminator]);
        }
    }
}

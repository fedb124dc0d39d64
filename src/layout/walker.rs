//! Depth-first traversal over nested aggregate members with absolute offsets.

use smallvec::SmallVec;

use super::native::{AggregateLayout, MemberLayout, NativeLayout};

#[derive(Clone, Debug)]
pub struct WalkedMember<'a> {
    pub member: &'a MemberLayout,
    pub path: String,
    pub absolute_offset: u64,
    pub depth: usize,
}

#[derive(Clone, Debug)]
struct WalkFrame<'a> {
    members: &'a [MemberLayout],
    index: usize,
    base_offset: u64,
    prefix: String,
}

/// Visits every member, descending into nested aggregates before moving on. Pointers and
/// repeated elements are reported but not entered.
pub struct MemberWalker<'a> {
    stack: SmallVec<[WalkFrame<'a>; 4]>,
}

impl<'a> MemberWalker<'a> {
    pub fn new(root: &'a AggregateLayout) -> Self {
        let mut walker = Self { stack: SmallVec::new() };
        walker.stack.push(WalkFrame {
            members: &root.members,
            index: 0,
            base_offset: 0,
            prefix: String::new(),
        });
        walker
    }
}

impl<'a> Iterator for MemberWalker<'a> {
    type Item = WalkedMember<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.last_mut() {
            if frame.index >= frame.members.len() {
                self.stack.pop();
                continue;
            }
            let members: &'a [MemberLayout] = frame.members;
            let member = &members[frame.index];
            frame.index += 1;
            let Some(absolute_offset) = frame.base_offset.checked_add(member.offset) else {
                // only reachable with hand-built layouts; compiled ones are bounded
                self.stack.clear();
                return None;
            };
            let path = if frame.prefix.is_empty() {
                member.name.clone()
            } else {
                format!("{}.{}", frame.prefix, member.name)
            };
            let depth = self.stack.len() - 1;
            if let NativeLayout::Aggregate(nested) = &member.layout {
                self.stack.push(WalkFrame {
                    members: &nested.members,
                    index: 0,
                    base_offset: absolute_offset,
                    prefix: path.clone(),
                });
            }
            return Some(WalkedMember {
                member,
                path,
                absolute_offset,
                depth,
            });
        }
        None
    }
}

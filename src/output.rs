use crate::rect::Rect;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OutputId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OutputInfo {
    pub id: OutputId,
    /// The position and size of the output in global coordinates.
    pub rect: Rect,
}

/// Resolves global positions to outputs.
pub trait OutputRegistry {
    fn output_at(&self, x: i32, y: i32) -> Option<OutputInfo>;
}

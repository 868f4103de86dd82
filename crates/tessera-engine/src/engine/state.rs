/// Where the engine is in its per-frame cycle.
///
/// `Idle -(submit)-> Accumulating -(render)-> Executing -> Idle`
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FrameState {
    #[default]
    Idle,
    Accumulating,
    Executing,
}

impl FrameState {
    /// Commands may be submitted in this state.
    #[inline]
    pub fn accepts_commands(self) -> bool {
        !matches!(self, Self::Executing)
    }
}

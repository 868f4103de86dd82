use super::RenderCommand;

/// Pending commands for the current frame, in submission order.
///
/// `push()` is O(1); `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default)]
pub struct CommandList {
    items: Vec<RenderCommand>,
}

impl CommandList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, cmd: RenderCommand) {
        self.items.push(cmd);
    }

    /// Returns commands in submission order.
    #[inline]
    pub fn items(&self) -> &[RenderCommand] {
        &self.items
    }

    #[inline]
    pub fn items_mut(&mut self) -> &mut [RenderCommand] {
        &mut self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::CommandKind;

    #[test]
    fn keeps_submission_order() {
        let mut list = CommandList::new();
        list.push(RenderCommand::clear(Color::black()));
        list.push(RenderCommand::clear(Color::white()));

        let colors: Vec<_> = list
            .items()
            .iter()
            .map(|c| match c.kind() {
                CommandKind::Clear(color) => *color,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(colors, vec![Color::black(), Color::white()]);
    }

    #[test]
    fn clear_empties() {
        let mut list = CommandList::new();
        list.push(RenderCommand::clear(Color::black()));
        list.clear();
        assert!(list.is_empty());
    }
}

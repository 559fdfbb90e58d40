/// Chooses which canned reply to send.
pub trait ReplyPicker: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

pub(crate) trait OptionExtension<T> {
    fn occupied(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps a slot that the owning collection's bookkeeping says is occupied. Reaching the
    /// [`None`] branch means that bookkeeping is broken, which is a bug in this crate rather than a
    /// misuse by the caller.
    #[track_caller]
    fn occupied(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("live slot of a collection held no value"),
        }
    }
}

/// Anything with a total order can rank heap entries.
pub trait Priority: Ord {}

impl<P: Ord> Priority for P {}

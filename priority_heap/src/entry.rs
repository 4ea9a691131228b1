use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Entry<T, P> {
    pub(crate) value: T,
    pub(crate) priority: P,
}

impl<T, P> Entry<T, P> {
    pub(crate) fn new(value: T, priority: P) -> Self {
        Self { value, priority }
    }

    pub(crate) fn into_parts(self) -> (T, P) {
        (self.value, self.priority)
    }
}

pub(crate) mod alpha;
pub(crate) mod frame;

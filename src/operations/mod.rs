mod boundary;

pub use boundary::EdgeOutline;

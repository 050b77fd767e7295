pub mod brep;
mod canonicalize;
mod iter;
pub mod types;
mod validate;

pub use brep::Brep;
pub use iter::FaceIter;

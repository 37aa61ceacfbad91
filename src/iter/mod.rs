mod owned_iter;
mod postorder;
mod preorder;
mod ref_iter;

pub use owned_iter::*;
pub(crate) use postorder::*;
pub(crate) use preorder::*;
pub(crate) use ref_iter::*;

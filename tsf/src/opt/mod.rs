mod radii;
mod tsf_packer;

#[doc(inline)]
pub use radii::generate_instance;
#[doc(inline)]
pub use tsf_packer::{TSFPacker, TSFSolution};

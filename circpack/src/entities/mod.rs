mod instance;
mod packed_set;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use packed_set::PackedSet;
#[doc(inline)]
pub use packed_set::PackingSnapshot;

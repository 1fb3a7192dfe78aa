#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use rigid3d_algebra as algebra;

#[doc(inline)]
pub use rigid3d_frames as frames;

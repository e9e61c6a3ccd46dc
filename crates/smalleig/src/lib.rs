#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use smalleig_algebra as algebra;

#[doc(inline)]
pub use smalleig_roots as roots;

#[doc(inline)]
pub use smalleig_eigen as eigen;

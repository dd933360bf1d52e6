//! DNS Provider 实现

#[cfg(feature = "mydnsjp")]
pub mod mydnsjp;

#[cfg(feature = "mydnsjp")]
pub use mydnsjp::MyDnsJpProvider;

//! Module discovery: enumerating candidate source files for completion.

pub mod cross_product;
pub mod listings;

pub use cross_product::{Triple, cross_product, cross_product3};
pub use listings::{FileListing, generate_listings, generate_local_listings};

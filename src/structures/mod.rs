pub mod ext;
pub mod fp;
pub mod irreducible;
pub mod poly;

pub mod pagination;
pub mod promotion;
pub mod summary;

pub use pagination::*;
pub use promotion::*;
pub use summary::*;

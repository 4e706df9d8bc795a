mod random;
mod sequential;

pub use random::*;
pub use sequential::*;

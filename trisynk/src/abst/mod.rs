mod add_mon;

pub use add_mon::*;

pub use self::{board::*, mark::*, square::*};

pub(crate) mod board;
pub(crate) mod mark;
pub(crate) mod square;

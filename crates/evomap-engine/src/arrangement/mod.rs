pub use self::{scenario::*, state::*};

pub(crate) mod scenario;
pub(crate) mod state;

//! Wire entities of the CoralFS platform API and the codecs that keep their
//! optional-field semantics intact across encode and decode.

mod codec;
mod export;
mod mapping;
mod persona;
mod quota;
mod snapshot;
mod volume;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use codec::*;
pub use export::*;
pub use mapping::*;
pub use persona::*;
pub use quota::*;
pub use snapshot::*;
pub use volume::*;

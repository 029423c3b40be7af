pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod memory;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use memory::{MemoryAuth, MemoryBackend, MemoryStorage, MemoryStore, StoreRequest};
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::factory, MemoryBackend, StoreRequest, TestBuilder, TestError, TestSetup,
    };
}

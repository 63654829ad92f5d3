pub use crate::error::*;

mod config;
mod entity;
mod error;
mod modify;
mod query;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
    pub mod config {
        pub use crate::config::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}

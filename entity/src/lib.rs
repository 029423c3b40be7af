//! Rows, queries and backend traits shared by the Kalendo front-end and its test utilities.
//!
//! The hosted backend owns the tables; this crate only describes how they look on the wire
//! ([`event`], [`comment`], [`user`]), how a filtered read is expressed ([`query`]) and the
//! narrow interfaces the front-end consumes ([`backend`]).

pub mod backend;
pub mod comment;
pub mod event;
pub mod query;
pub mod timestamp;
pub mod user;

pub mod prelude {
    pub use crate::{
        backend::{AuthProvider, AuthUser, DataStore, FileUpload, ObjectStorage, SignUp, StoreError},
        comment::Model as CommentModel,
        event::Model as EventModel,
        query::{Direction, Filter, Select},
        user::Model as UserModel,
    };
}

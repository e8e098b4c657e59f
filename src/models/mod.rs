//! Data models for VirtualBook

pub mod book;
pub mod user;

pub use book::{Book, BookPayload};
pub use user::{LoginUser, RegisterUser, User, UserResponse, UserSummary};

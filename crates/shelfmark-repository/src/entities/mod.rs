//! [`Persist`](crate::Persist) implementations for every catalogue entity.

mod book;
mod catalog;
mod event;
mod review;
mod user;
mod wishlist;

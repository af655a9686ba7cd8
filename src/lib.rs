//! Client core of the document-management admin front end.
//!
//! [`resource::ResourceEngine`] turns a remote call into an observable
//! `{data, loading, error}` value; [`view::compute_view`] derives the
//! filtered, paginated page a list screen shows. The [`screens`] wire both
//! to the [`api`] endpoints and the shared [`session::SessionStore`].

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod resource;
pub mod screens;
pub mod session;
pub mod view;

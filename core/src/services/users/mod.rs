//! User registration

mod service;

#[cfg(test)]
mod tests;

pub use service::UserService;

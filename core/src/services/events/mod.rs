//! Event catalogue: creation and filtered listing

mod service;

#[cfg(test)]
mod tests;

pub use service::EventService;

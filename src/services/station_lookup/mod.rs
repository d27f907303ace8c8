#[cfg(test)]
pub mod fakes;
pub mod lookup;
pub mod policy;
pub mod session;
pub mod sources;

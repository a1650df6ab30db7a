//! End-to-end tests against loopback UDP fixtures.

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod integration;

//! A set of utility structs and functions used when operating the core.

#[cfg(test)]
pub(crate) mod test;

pub mod sign_in;
pub mod sign_up;

#[cfg(test)]
pub(crate) mod test_support;

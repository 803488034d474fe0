pub mod projects;
pub mod tasks;

#[cfg(test)]
pub(crate) mod test_support;

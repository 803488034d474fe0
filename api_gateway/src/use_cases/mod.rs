pub mod normalize_error;

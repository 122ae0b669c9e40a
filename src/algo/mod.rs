pub mod extract;
pub mod inject;
pub mod keys;
pub mod param_string;
pub mod sanitize;
pub mod sections;

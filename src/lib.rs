pub mod algo;
pub mod error;
pub mod ops;

pub use algo::extract::{extract_params_from_website_url, ExtractedParams};
pub use algo::inject::add_params_to_url;
pub use algo::keys::CAMPAIGN_KEYS;
pub use algo::param_string::ParamMap;
pub use algo::sanitize::{sanitize_params, SanitizeOptions};
pub use error::ParamsError;

mod masking;

pub use masking::{mask_customer_code, FULL_MASK};

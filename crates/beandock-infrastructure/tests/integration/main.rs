mod common;
mod test_feishu;
mod test_sign_in_api;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::account::mask_customer_code;

// Remote payloads. Every field the platform may omit (or send as null) is an
// Option with a documented default; a field of the wrong JSON type is a decode
// error rather than a silent default.

/// Response of the personal asset info endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    /// `None` when the platform sent no data, `null` or `{}`
    #[serde(default, deserialize_with = "non_empty_assets")]
    pub data: Option<AssetsInfo>,
}

// Any non-empty object counts as a payload, even without the known fields
fn non_empty_assets<'de, D>(deserializer: D) -> Result<Option<AssetsInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Map<String, Value>>::deserialize(deserializer)? {
        Some(map) if !map.is_empty() => AssetsInfo::deserialize(Value::Object(map))
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsInfo {
    #[serde(default)]
    pub customer_code: Option<String>,
    #[serde(default)]
    pub integral_voucher: Option<i64>,
}

impl AssetsInfo {
    /// Customer code, "" when absent
    pub fn customer_code(&self) -> &str {
        self.customer_code.as_deref().unwrap_or("")
    }

    /// Bean balance, 0 when absent
    pub fn integral_voucher(&self) -> i64 {
        self.integral_voucher.unwrap_or(0)
    }
}

impl AssetsEnvelope {
    pub fn payload(&self) -> Option<&AssetsInfo> {
        self.data.as_ref()
    }
}

/// Response of the daily sign-in endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<SignInData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInData {
    #[serde(default)]
    pub gain_num: Option<i64>,
    #[serde(default)]
    pub status: Option<i64>,
}

impl SignInEnvelope {
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false)
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Beans granted by this sign-in, 0 when absent
    pub fn gain_num(&self) -> i64 {
        self.data.as_ref().and_then(|d| d.gain_num).unwrap_or(0)
    }

    /// Sign-in status code, 0 when absent
    pub fn status(&self) -> i64 {
        self.data.as_ref().and_then(|d| d.status).unwrap_or(0)
    }
}

/// Response of the streak voucher endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoucherEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl VoucherEnvelope {
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false)
    }
}

/// Account state captured before signing in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    /// Masked customer code, display only
    pub masked_account: String,
    pub balance: i64,
}

impl AccountSnapshot {
    pub fn from_assets(info: &AssetsInfo) -> Self {
        Self {
            masked_account: mask_customer_code(info.customer_code()),
            balance: info.integral_voucher(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_envelope_decodes_platform_payload() {
        let json = r#"{"success":true,"code":200,"data":{"customerCode":"AB1234CD","integralVoucher":100}}"#;
        let envelope: AssetsEnvelope = serde_json::from_str(json).unwrap();
        let info = envelope.payload().unwrap();

        assert_eq!(info.customer_code(), "AB1234CD");
        assert_eq!(info.integral_voucher(), 100);
    }

    #[test]
    fn test_assets_envelope_missing_fields_default() {
        let envelope: AssetsEnvelope =
            serde_json::from_str(r#"{"data":{"customerCode":"XY99"}}"#).unwrap();
        let info = envelope.payload().unwrap();
        assert_eq!(info.integral_voucher(), 0);

        let snapshot = AccountSnapshot::from_assets(info);
        assert_eq!(snapshot.masked_account, "XY****99");
        assert_eq!(snapshot.balance, 0);
    }

    #[test]
    fn test_assets_payload_without_known_fields_uses_defaults() {
        let envelope: AssetsEnvelope =
            serde_json::from_str(r#"{"success":true,"data":{"nickName":"x"}}"#).unwrap();
        let info = envelope.payload().unwrap();

        let snapshot = AccountSnapshot::from_assets(info);
        assert_eq!(snapshot.masked_account, "****");
        assert_eq!(snapshot.balance, 0);
    }

    #[test]
    fn test_assets_payload_with_null_fields_is_present() {
        let envelope: AssetsEnvelope =
            serde_json::from_str(r#"{"data":{"customerCode":null}}"#).unwrap();
        assert!(envelope.payload().is_some());
    }

    #[test]
    fn test_assets_envelope_without_payload() {
        for json in [
            r#"{"success":false,"message":"登录过期"}"#,
            r#"{"success":false,"message":"登录过期","data":null}"#,
            r#"{"data":{}}"#,
        ] {
            let envelope: AssetsEnvelope = serde_json::from_str(json).unwrap();
            assert!(envelope.payload().is_none(), "payload expected empty: {json}");
        }
    }

    #[test]
    fn test_wrongly_typed_field_is_rejected() {
        let result: Result<AssetsEnvelope, _> =
            serde_json::from_str(r#"{"data":{"integralVoucher":"lots"}}"#);
        assert!(result.is_err());

        let result: Result<AssetsEnvelope, _> = serde_json::from_str(r#"{"data":"x"}"#);
        assert!(result.is_err());

        let result: Result<SignInEnvelope, _> = serde_json::from_str(r#"{"success":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_sign_in_envelope_defaults() {
        let envelope: SignInEnvelope = serde_json::from_str("{}").unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.message(), "");
        assert_eq!(envelope.gain_num(), 0);
        assert_eq!(envelope.status(), 0);

        let envelope: SignInEnvelope = serde_json::from_str(
            r#"{"success":true,"message":"签到成功","data":{"gainNum":5,"status":1}}"#,
        )
        .unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.gain_num(), 5);
        assert_eq!(envelope.status(), 1);
    }

    #[test]
    fn test_voucher_envelope_null_message() {
        let envelope: VoucherEnvelope =
            serde_json::from_str(r#"{"success":false,"message":null}"#).unwrap();
        assert!(!envelope.is_success());
        assert!(envelope.message.is_none());
    }
}

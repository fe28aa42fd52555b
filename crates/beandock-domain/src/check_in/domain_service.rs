use super::api::ApiError;
use super::outcome::SignInOutcome;
use super::value_objects::{AccountSnapshot, AssetsEnvelope, SignInEnvelope, VoucherEnvelope};

/// Substring the platform uses in its "already signed in today" message.
/// Best-effort: a wording change upstream turns this case into `SignInFailed`.
pub const ALREADY_SIGNED_MARKER: &str = "已经签到";

/// Beans granted by the seven-day streak voucher, used only for the estimated total
pub const SEVEN_DAY_BONUS_BEANS: i64 = 8;

/// What to do after the sign-in call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInDecision {
    Final(SignInOutcome),
    /// Signed in without a direct reward; try the streak voucher
    ClaimBonus,
}

/// Domain service for check-in business rules
/// Contains pure domain logic without infrastructure dependencies
pub struct CheckInDomainService;

impl CheckInDomainService {
    pub fn is_already_signed_message(message: &str) -> bool {
        message.contains(ALREADY_SIGNED_MARKER)
    }

    /// Extract the account snapshot, or the terminal outcome when the
    /// platform returned no asset payload
    pub fn resolve_assets(envelope: &AssetsEnvelope) -> Result<AccountSnapshot, SignInOutcome> {
        match envelope.payload() {
            Some(info) => Ok(AccountSnapshot::from_assets(info)),
            None => Err(SignInOutcome::UserInfoFetchFailed {
                reason: envelope
                    .message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "未知错误".to_string()),
            }),
        }
    }

    pub fn classify_sign_in(snapshot: &AccountSnapshot, response: &SignInEnvelope) -> SignInDecision {
        let account = snapshot.masked_account.clone();

        if !response.is_success() {
            let message = response.message();
            let outcome = if Self::is_already_signed_message(message) {
                SignInOutcome::AlreadySignedIn {
                    account,
                    balance: snapshot.balance,
                }
            } else {
                SignInOutcome::SignInFailed {
                    account,
                    reason: message.to_string(),
                }
            };
            return SignInDecision::Final(outcome);
        }

        let status = response.status();
        let gained = response.gain_num();

        if status <= 0 {
            return SignInDecision::Final(SignInOutcome::StatusUnconfirmed { account, status });
        }

        if gained > 0 {
            SignInDecision::Final(SignInOutcome::SignedInWithReward {
                account,
                gained,
                total: snapshot.balance.saturating_add(gained),
            })
        } else {
            SignInDecision::ClaimBonus
        }
    }

    pub fn classify_voucher(snapshot: &AccountSnapshot, response: &VoucherEnvelope) -> SignInOutcome {
        let account = snapshot.masked_account.clone();

        if response.is_success() {
            SignInOutcome::BonusClaimed {
                account,
                estimated_total: snapshot.balance.saturating_add(SEVEN_DAY_BONUS_BEANS),
            }
        } else {
            SignInOutcome::NoBonusAvailable {
                account,
                message: response.message.clone(),
            }
        }
    }

    /// Map a failed remote call onto the outcome taxonomy
    pub fn outcome_for_error(error: &ApiError) -> SignInOutcome {
        match error {
            ApiError::Unauthorized => SignInOutcome::TokenInvalid,
            ApiError::Transport(detail) => SignInOutcome::NetworkError {
                detail: detail.clone(),
            },
            ApiError::Status { .. } => SignInOutcome::NetworkError {
                detail: error.to_string(),
            },
            ApiError::Decode(_) => SignInOutcome::UnexpectedError {
                detail: error.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check_in::SignInData;

    fn snapshot(balance: i64) -> AccountSnapshot {
        AccountSnapshot {
            masked_account: "AB****CD".to_string(),
            balance,
        }
    }

    fn sign_in(success: bool, message: &str, gain_num: i64, status: i64) -> SignInEnvelope {
        SignInEnvelope {
            success: Some(success),
            message: Some(message.to_string()),
            data: Some(SignInData {
                gain_num: Some(gain_num),
                status: Some(status),
            }),
        }
    }

    #[test]
    fn test_already_signed_in_reports_balance() {
        let decision = CheckInDomainService::classify_sign_in(
            &snapshot(100),
            &sign_in(false, "今日已经签到", 0, 0),
        );
        assert_eq!(
            decision,
            SignInDecision::Final(SignInOutcome::AlreadySignedIn {
                account: "AB****CD".to_string(),
                balance: 100,
            })
        );
    }

    #[test]
    fn test_failure_message_passed_through() {
        let decision =
            CheckInDomainService::classify_sign_in(&snapshot(10), &sign_in(false, "活动已结束", 0, 0));
        assert_eq!(
            decision,
            SignInDecision::Final(SignInOutcome::SignInFailed {
                account: "AB****CD".to_string(),
                reason: "活动已结束".to_string(),
            })
        );
    }

    #[test]
    fn test_reward_adds_to_balance() {
        let decision =
            CheckInDomainService::classify_sign_in(&snapshot(50), &sign_in(true, "", 5, 1));
        assert_eq!(
            decision,
            SignInDecision::Final(SignInOutcome::SignedInWithReward {
                account: "AB****CD".to_string(),
                gained: 5,
                total: 55,
            })
        );
    }

    #[test]
    fn test_zero_gain_requests_bonus_claim() {
        let decision =
            CheckInDomainService::classify_sign_in(&snapshot(50), &sign_in(true, "", 0, 1));
        assert_eq!(decision, SignInDecision::ClaimBonus);

        let no_gain_field = SignInEnvelope {
            success: Some(true),
            message: None,
            data: Some(SignInData {
                gain_num: None,
                status: Some(2),
            }),
        };
        assert_eq!(
            CheckInDomainService::classify_sign_in(&snapshot(50), &no_gain_field),
            SignInDecision::ClaimBonus
        );
    }

    #[test]
    fn test_non_positive_status_is_unconfirmed() {
        for status in [0, -1] {
            let decision =
                CheckInDomainService::classify_sign_in(&snapshot(50), &sign_in(true, "", 5, status));
            assert_eq!(
                decision,
                SignInDecision::Final(SignInOutcome::StatusUnconfirmed {
                    account: "AB****CD".to_string(),
                    status,
                })
            );
        }
    }

    #[test]
    fn test_voucher_claimed_estimates_total() {
        let response = VoucherEnvelope {
            success: Some(true),
            message: None,
        };
        assert_eq!(
            CheckInDomainService::classify_voucher(&snapshot(50), &response),
            SignInOutcome::BonusClaimed {
                account: "AB****CD".to_string(),
                estimated_total: 58,
            }
        );
    }

    #[test]
    fn test_voucher_unavailable_surfaces_message() {
        let response = VoucherEnvelope {
            success: Some(false),
            message: Some("未达到领取条件".to_string()),
        };
        assert_eq!(
            CheckInDomainService::classify_voucher(&snapshot(50), &response),
            SignInOutcome::NoBonusAvailable {
                account: "AB****CD".to_string(),
                message: Some("未达到领取条件".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_assets_payload() {
        let envelope = AssetsEnvelope {
            success: Some(false),
            message: Some("用户不存在".to_string()),
            data: None,
        };
        assert_eq!(
            CheckInDomainService::resolve_assets(&envelope),
            Err(SignInOutcome::UserInfoFetchFailed {
                reason: "用户不存在".to_string()
            })
        );
    }

    #[test]
    fn test_assets_payload_without_known_fields_proceeds() {
        let envelope: AssetsEnvelope =
            serde_json::from_str(r#"{"success":true,"data":{"nickName":"x"}}"#).unwrap();
        assert_eq!(
            CheckInDomainService::resolve_assets(&envelope),
            Ok(AccountSnapshot {
                masked_account: "****".to_string(),
                balance: 0,
            })
        );
    }

    #[test]
    fn test_totals_saturate_at_i64_max() {
        assert_eq!(
            CheckInDomainService::classify_sign_in(&snapshot(i64::MAX), &sign_in(true, "", 1, 1)),
            SignInDecision::Final(SignInOutcome::SignedInWithReward {
                account: "AB****CD".to_string(),
                gained: 1,
                total: i64::MAX,
            })
        );

        let claimed = VoucherEnvelope {
            success: Some(true),
            message: None,
        };
        assert_eq!(
            CheckInDomainService::classify_voucher(&snapshot(i64::MAX - 3), &claimed),
            SignInOutcome::BonusClaimed {
                account: "AB****CD".to_string(),
                estimated_total: i64::MAX,
            }
        );
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            CheckInDomainService::outcome_for_error(&ApiError::Unauthorized),
            SignInOutcome::TokenInvalid
        );
        assert_eq!(
            CheckInDomainService::outcome_for_error(&ApiError::Transport("refused".into())),
            SignInOutcome::NetworkError {
                detail: "refused".to_string()
            }
        );
        assert_eq!(
            CheckInDomainService::outcome_for_error(&ApiError::Status {
                status: 502,
                body: "bad gateway".into()
            }),
            SignInOutcome::NetworkError {
                detail: "HTTP 502: bad gateway".to_string()
            }
        );
        assert!(matches!(
            CheckInDomainService::outcome_for_error(&ApiError::Decode("eof".into())),
            SignInOutcome::UnexpectedError { .. }
        ));
    }
}

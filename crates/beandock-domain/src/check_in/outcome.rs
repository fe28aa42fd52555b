use std::fmt;

/// Classification of one account's sign-in attempt.
///
/// Exactly one outcome is produced per account per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    AlreadySignedIn {
        account: String,
        balance: i64,
    },
    SignedInWithReward {
        account: String,
        gained: i64,
        total: i64,
    },
    /// Streak voucher claimed; the total is an estimate, the platform does not report it
    BonusClaimed {
        account: String,
        estimated_total: i64,
    },
    NoBonusAvailable {
        account: String,
        message: Option<String>,
    },
    /// Sign-in reported success with a non-positive status; meaning unknown
    StatusUnconfirmed {
        account: String,
        status: i64,
    },
    SignInFailed {
        account: String,
        reason: String,
    },
    TokenInvalid,
    UserInfoFetchFailed {
        reason: String,
    },
    NetworkError {
        detail: String,
    },
    UnexpectedError {
        detail: String,
    },
}

/// Summary bucket of an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Succeeded,
    Unconfirmed,
    Failed,
}

impl SignInOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            SignInOutcome::AlreadySignedIn { .. }
            | SignInOutcome::SignedInWithReward { .. }
            | SignInOutcome::BonusClaimed { .. }
            | SignInOutcome::NoBonusAvailable { .. } => OutcomeKind::Succeeded,
            SignInOutcome::StatusUnconfirmed { .. } => OutcomeKind::Unconfirmed,
            SignInOutcome::SignInFailed { .. }
            | SignInOutcome::TokenInvalid
            | SignInOutcome::UserInfoFetchFailed { .. }
            | SignInOutcome::NetworkError { .. }
            | SignInOutcome::UnexpectedError { .. } => OutcomeKind::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind() == OutcomeKind::Succeeded
    }

    /// Stable label for structured logs
    pub fn label(&self) -> &'static str {
        match self {
            SignInOutcome::AlreadySignedIn { .. } => "already_signed_in",
            SignInOutcome::SignedInWithReward { .. } => "signed_in_with_reward",
            SignInOutcome::BonusClaimed { .. } => "bonus_claimed",
            SignInOutcome::NoBonusAvailable { .. } => "no_bonus_available",
            SignInOutcome::StatusUnconfirmed { .. } => "status_unconfirmed",
            SignInOutcome::SignInFailed { .. } => "sign_in_failed",
            SignInOutcome::TokenInvalid => "token_invalid",
            SignInOutcome::UserInfoFetchFailed { .. } => "user_info_fetch_failed",
            SignInOutcome::NetworkError { .. } => "network_error",
            SignInOutcome::UnexpectedError { .. } => "unexpected_error",
        }
    }

    /// Render the run log lines for this outcome.
    ///
    /// `index` is the 1-based account position, used when no masked
    /// account is known yet.
    pub fn render_lines(&self, index: usize) -> Vec<String> {
        match self {
            SignInOutcome::AlreadySignedIn { account, balance } => vec![
                format!("ℹ️ [账号: {account}] 今日已签到"),
                format!("💰 当前金豆: {balance}"),
            ],
            SignInOutcome::SignedInWithReward {
                account,
                gained,
                total,
            } => vec![
                format!("✅ [账号: {account}] 签到成功"),
                format!("🎁 获得金豆: {gained} 个"),
                format!("💰 当前总数: {total}"),
            ],
            SignInOutcome::BonusClaimed {
                account,
                estimated_total,
            } => vec![
                format!("🎉 [账号: {account}] 七天连签奖励领取成功！"),
                format!("💰 当前总数: {estimated_total} (预估)"),
            ],
            SignInOutcome::NoBonusAvailable { account, message } => match message {
                Some(message) if !message.is_empty() => {
                    vec![format!("ℹ️ [账号: {account}] 无奖励可领取 或 {message}")]
                }
                _ => vec![format!("ℹ️ [账号: {account}] 无奖励可领取")],
            },
            SignInOutcome::StatusUnconfirmed { account, .. } => {
                vec![format!("ℹ️ [账号: {account}] 状态码异常，可能已签到")]
            }
            SignInOutcome::SignInFailed { account, reason } => {
                vec![format!("❌ [账号: {account}] 签到失败: {reason}")]
            }
            SignInOutcome::TokenInvalid => {
                vec![format!("❌ [账号{index}] Token 已失效，请重新抓包")]
            }
            SignInOutcome::UserInfoFetchFailed { reason } => {
                vec![format!("❌ [账号{index}] 获取用户信息失败: {reason}")]
            }
            SignInOutcome::NetworkError { detail } => {
                vec![format!("❌ [账号{index}] 网络请求失败: {detail}")]
            }
            SignInOutcome::UnexpectedError { detail } => {
                vec![format!("❌ [账号{index}] 脚本执行出错: {detail}")]
            }
        }
    }
}

impl fmt::Display for SignInOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! Error taxonomy of the report client.
//!
//! `Display` output is the message shown to the operator, so it is written in
//! the operator's language (Korean).

use thiserror::Error;

/// Form inputs the controller validates before issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StartDate,
    EndDate,
    Password,
    Account,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::StartDate => "시작 날짜",
            FormField::EndDate => "종료 날짜",
            FormField::Password => "패스워드",
            FormField::Account => "광고 계정",
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            FormField::StartDate => "시작 날짜를 입력해주세요.",
            FormField::EndDate => "종료 날짜를 입력해주세요.",
            FormField::Password => "패스워드를 입력해주세요.",
            FormField::Account => "광고 계정을 선택해주세요.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", .0.missing_message())]
    Missing(FormField),
    #[error("{}의 형식이 올바르지 않습니다 (YYYY-MM-DD).", .0.label())]
    InvalidDate(FormField),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Blocked locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never produced an HTTP response.
    #[error("서버에 연결할 수 없습니다: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the `error` field when the body had one.
    #[error("{}", server_message(.status, .message))]
    Server { status: u16, message: Option<String> },

    /// 2xx response whose body carries an `error` field.
    #[error("{0}")]
    Application(String),

    /// The accounts endpoint rejected the password (403).
    #[error("비밀번호가 올바르지 않습니다. 다시 확인해주세요.")]
    Credential,

    /// The body could not be decoded as the expected payload.
    #[error("서버 응답을 해석하지 못했습니다: {0}")]
    Malformed(String),
}

impl ReportError {
    pub fn is_network_failure(&self) -> bool {
        matches!(self, ReportError::Network(_) | ReportError::Server { .. })
    }
}

fn server_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("서버 오류 ({}): {}", status, message),
        None => format!("서버 오류 ({})", status),
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    // Common
    Success,
    InvalidRequest,
    UnsupportedLikeTarget,
    InternalServerError,

    // Members
    MembersIllegalId,

    // Designers
    DesignersIllegalId,

    // Identity
    MemberIdentityMissing,

    // Products
    ProductsIllegalId,
    SearchKeywordLengthTooShort,
}

impl ResponseStatus {
    pub fn code(&self) -> u32 {
        match self {
            Self::Success => 1000,
            Self::InvalidRequest => 1001,
            Self::UnsupportedLikeTarget => 1002,
            Self::InternalServerError => 1004,
            Self::MembersIllegalId => 2001,
            Self::DesignersIllegalId => 3001,
            Self::MemberIdentityMissing => 4000,
            Self::ProductsIllegalId => 6001,
            Self::SearchKeywordLengthTooShort => 6002,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Request succeeded.",
            Self::InvalidRequest => "Invalid request.",
            Self::UnsupportedLikeTarget => "Unsupported like target.",
            Self::InternalServerError => "Internal server error.",
            Self::MembersIllegalId => "Member id does not exist.",
            Self::DesignersIllegalId => "Designer id does not exist.",
            Self::MemberIdentityMissing => "Member identity is missing or invalid.",
            Self::ProductsIllegalId => "Product id does not exist.",
            Self::SearchKeywordLengthTooShort => "Search keyword is too short.",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::Success => 200,
            Self::InvalidRequest
            | Self::UnsupportedLikeTarget
            | Self::SearchKeywordLengthTooShort => 400,
            Self::MemberIdentityMissing => 401,
            Self::MembersIllegalId | Self::DesignersIllegalId | Self::ProductsIllegalId => 404,
            Self::InternalServerError => 500,
        }
    }
}

/// Uniform envelope every endpoint answers with.
#[derive(Debug, Serialize, Deserialize)]
pub struct BaseResponse<T> {
    pub is_success: bool,
    pub code: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> BaseResponse<T> {
    pub fn ok(result: T) -> Self {
        Self::with_status(ResponseStatus::Success, result)
    }

    pub fn failure(status: ResponseStatus, result: T) -> Self {
        Self::with_status(status, result)
    }

    fn with_status(status: ResponseStatus, result: T) -> Self {
        Self {
            is_success: status == ResponseStatus::Success,
            code: status.code(),
            message: status.message().to_string(),
            result: Some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let body = serde_json::to_value(BaseResponse::ok(json!({"liked": true}))).unwrap();
        assert_eq!(body["is_success"], true);
        assert_eq!(body["code"], 1000);
        assert_eq!(body["result"]["liked"], true);
    }

    #[test]
    fn failure_envelope_is_not_success() {
        let res = BaseResponse::failure(ResponseStatus::DesignersIllegalId, ());
        assert!(!res.is_success);
        assert_eq!(res.code, 3001);
        assert_eq!(res.message, ResponseStatus::DesignersIllegalId.message());
    }
}

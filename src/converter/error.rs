//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 转换链路只有三类失败：输入无效、解码失败、编码/写入失败。
//! 使用单一错误枚举承载，调用侧可按分支匹配；通过 `thiserror` 保持人类可读消息，
//! 消息中携带底层库的原始错误文本。

/// 图标转换统一错误类型。
///
/// 该类型会在节点层被上转为 `NodeError`，最终透传给宿主。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("输入无效：{0}")]
    InvalidInput(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),
}

impl ConvertError {
    /// 稳定的机器可读错误码，供宿主侧分类展示。
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::Decode(_) => "decode",
            Self::Encode(_) => "encode",
        }
    }

    /// 出错所在的处理阶段。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "validate",
            Self::Decode(_) => "decode",
            Self::Encode(_) => "encode",
        }
    }
}

/// 转换配置持久化错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("序列化配置失败: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("写入配置文件失败: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::ConvertError;

    #[test]
    fn code_and_stage_follow_variant() {
        let cases = [
            (ConvertError::InvalidInput("x".into()), "invalid_input", "validate"),
            (ConvertError::Decode("x".into()), "decode", "decode"),
            (ConvertError::Encode("x".into()), "encode", "encode"),
        ];

        for (error, code, stage) in cases {
            assert_eq!(error.code(), code);
            assert_eq!(error.stage(), stage);
        }
    }

    #[test]
    fn display_carries_underlying_message() {
        let error = ConvertError::Decode("Format error decoding Png: invalid signature".into());
        assert!(error.to_string().contains("invalid signature"));

        let message = ConvertError::InvalidInput("/missing.png".into()).to_string();
        assert!(message.contains("/missing.png"));
    }
}

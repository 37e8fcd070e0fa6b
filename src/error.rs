//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义面向宿主的统一错误类型 `NodeError`。节点注册、入参解析、图标转换中的
//! 所有失败都汇聚到这里，宿主只需处理一种错误类型。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ConvertError` 与 `ConfigError` 提供 `From` 转换，`?` 即可上转。
//! - 实现 `Serialize` 将错误序列化为字符串，便于宿主跨边界透传。

use serde::Serialize;

use crate::converter::{ConfigError, ConvertError};

/// 节点级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// 图标转换流水线错误（输入 / 解码 / 编码）
    #[error("{0}")]
    Convert(#[from] ConvertError),

    /// 入参不满足节点声明的 schema
    #[error("节点入参无效: {0}")]
    InvalidInput(String),

    /// 注册表中不存在该节点
    #[error("未注册的节点: {0}")]
    UnknownNode(String),

    /// 节点名称重复注册
    #[error("节点名称重复: {0}")]
    DuplicateNode(String),

    /// 配置读写失败
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl NodeError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Convert(err) => err.code(),
            Self::InvalidInput(_) => "invalid_input",
            Self::UnknownNode(_) => "unknown_node",
            Self::DuplicateNode(_) => "duplicate_node",
            Self::Config(_) => "config",
        }
    }
}

/// 宿主边界要求返回值可序列化，统一输出为人类可读字符串。
impl Serialize for NodeError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_error_passes_through_message_and_code() {
        let err: NodeError = ConvertError::Decode("bad crc".into()).into();
        assert_eq!(err.code(), "decode");
        assert_eq!(err.to_string(), ConvertError::Decode("bad crc".into()).to_string());
    }

    #[test]
    fn serializes_as_plain_string() {
        let err = NodeError::UnknownNode("Missing".into());
        let json = serde_json::to_string(&err).expect("serialize error");
        assert_eq!(json, "\"未注册的节点: Missing\"");
    }
}

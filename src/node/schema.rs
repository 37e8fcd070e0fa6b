//! # 节点 schema 模块
//!
//! ## 设计思路
//!
//! 用显式的带标签结构描述每个入参：名称、类型、默认值、整数约束、占位提示。
//! 宿主可直接序列化 schema 渲染节点面板；入参解析时按同一份 schema 校验。
//!
//! ## 实现思路
//!
//! - `NodeValue` 使用 `untagged`，宿主传入的 JSON 值可直接反序列化。
//! - 缺省入参取声明的默认值，类型不符或越界均返回 `NodeError::InvalidInput`。
//! - 整数步长以 `min` 为起点计算（16~256 步长 16 即 16, 32, ..., 256）。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::NodeError;

/// 节点入参集合（字段名 → 值）。
pub type NodeInputs = HashMap<String, NodeValue>;

/// 节点输出，顺序与 `output_schema` 一致。
pub type NodeOutputs = Vec<NodeValue>;

/// 字段类型标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "INT")]
    Integer,
}

/// 节点间传递的值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeValue {
    Integer(i64),
    String(String),
}

impl NodeValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Integer(_) => FieldKind::Integer,
            Self::String(_) => FieldKind::String,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::String(_) => None,
        }
    }
}

impl From<&str> for NodeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for NodeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for NodeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// 整数字段约束。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntConstraints {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl IntConstraints {
    /// 校验值落在 `min..=max` 且位于以 `min` 为起点的步长网格上。
    pub fn check(&self, value: i64) -> Result<(), String> {
        if value < self.min || value > self.max {
            return Err(format!("取值 {} 超出范围 {}~{}", value, self.min, self.max));
        }
        if self.step > 1 && (value - self.min) % self.step != 0 {
            return Err(format!(
                "取值 {} 不在步长网格上（起点 {}，步长 {}）",
                value, self.min, self.step
            ));
        }
        Ok(())
    }
}

/// 入参字段声明。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: NodeValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<IntConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    pub fn string(name: &'static str, default: &str) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            default: NodeValue::from(default),
            constraints: None,
            placeholder: None,
        }
    }

    pub fn integer(name: &'static str, default: i64) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            default: NodeValue::Integer(default),
            constraints: None,
            placeholder: None,
        }
    }

    pub fn with_constraints(mut self, min: i64, max: i64, step: i64) -> Self {
        self.constraints = Some(IntConstraints { min, max, step });
        self
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 从入参集合中解析本字段：缺省取默认值，再做类型与约束校验。
    pub fn resolve(&self, inputs: &NodeInputs) -> Result<NodeValue, NodeError> {
        let value = inputs
            .get(self.name)
            .cloned()
            .unwrap_or_else(|| self.default.clone());

        if value.kind() != self.kind {
            return Err(NodeError::InvalidInput(format!(
                "字段 {} 期望 {:?}，实际为 {:?}",
                self.name,
                self.kind,
                value.kind()
            )));
        }

        if let (Some(constraints), NodeValue::Integer(number)) = (&self.constraints, &value) {
            constraints
                .check(*number)
                .map_err(|reason| NodeError::InvalidInput(format!("字段 {}：{}", self.name, reason)))?;
        }

        Ok(value)
    }
}

/// 输出字段声明。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl OutputSpec {
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_field() -> FieldSpec {
        FieldSpec::integer("icon_size", 256).with_constraints(16, 256, 16)
    }

    #[test]
    fn missing_input_uses_default() {
        let inputs = NodeInputs::new();
        assert_eq!(size_field().resolve(&inputs).unwrap(), NodeValue::Integer(256));
        assert_eq!(
            FieldSpec::string("path", "").resolve(&inputs).unwrap(),
            NodeValue::from("")
        );
    }

    #[test]
    fn step_grid_starts_at_min() {
        let constraints = IntConstraints { min: 16, max: 256, step: 16 };
        for ok in [16, 32, 48, 128, 240, 256] {
            assert!(constraints.check(ok).is_ok(), "{ok} should pass");
        }
        for bad in [0, 8, 17, 100, 257, 272, -16] {
            assert!(constraints.check(bad).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let mut inputs = NodeInputs::new();
        inputs.insert("icon_size".into(), NodeValue::from("64"));
        assert!(matches!(size_field().resolve(&inputs), Err(NodeError::InvalidInput(_))));
    }

    #[test]
    fn values_deserialize_from_host_json() {
        let inputs: NodeInputs =
            serde_json::from_str(r#"{ "input_image_path": "/a/b.png", "icon_size": 32 }"#)
                .expect("parse inputs");
        assert_eq!(inputs["input_image_path"], NodeValue::from("/a/b.png"));
        assert_eq!(inputs["icon_size"], NodeValue::Integer(32));
    }

    #[test]
    fn field_spec_serializes_with_type_tags() {
        let field = size_field().with_placeholder("size");
        let json = serde_json::to_value(&field).expect("serialize field");
        assert_eq!(json["kind"], "INT");
        assert_eq!(json["default"], 256);
        assert_eq!(json["constraints"]["step"], 16);
        assert_eq!(json["placeholder"], "size");

        let plain = serde_json::to_value(FieldSpec::string("p", "")).expect("serialize field");
        assert!(plain.get("constraints").is_none());
        assert_eq!(plain["kind"], "STRING");
    }
}

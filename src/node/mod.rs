//! # 插件节点模块（node）
//!
//! ## 设计思路
//!
//! 宿主的插件契约由三部分组成：入参 schema、输出 schema、可调用入口。
//! 这里用静态 trait `PluginNode` 表达契约，具体节点实现该 trait，
//! 在启动阶段显式注册到宿主持有的 `NodeRegistry` 中，不依赖隐式全局状态。
//!
//! - `schema`：字段声明、值类型与约束校验
//! - `registry`：显式持有的节点注册表
//! - `png_to_ico`：PNG → ICO 转换节点

mod png_to_ico;
mod registry;
mod schema;

use serde::Serialize;

use crate::error::NodeError;

pub use png_to_ico::{PngToIcoNode, NODE_NAME as PNG_TO_ICO_NODE};
pub use registry::{register_builtin_nodes, NodeRegistry};
pub use schema::{FieldKind, FieldSpec, IntConstraints, NodeInputs, NodeOutputs, NodeValue, OutputSpec};

/// 插件节点契约。
///
/// 实现必须可在多线程间共享：宿主可能在不同图执行中并发调用同一节点。
pub trait PluginNode: Send + Sync {
    /// 注册表中的唯一名称。
    fn name(&self) -> &'static str;

    /// 面向用户的显示名称。
    fn display_name(&self) -> &'static str {
        self.name()
    }

    fn input_schema(&self) -> Vec<FieldSpec>;

    fn output_schema(&self) -> Vec<OutputSpec>;

    /// 执行节点，输出与 `output_schema` 一一对应。
    fn invoke(&self, inputs: &NodeInputs) -> Result<NodeOutputs, NodeError>;

    fn describe(&self) -> NodeDescriptor {
        NodeDescriptor {
            name: self.name(),
            display_name: self.display_name(),
            inputs: self.input_schema(),
            outputs: self.output_schema(),
        }
    }
}

/// 节点的可序列化描述，供宿主渲染节点面板。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub inputs: Vec<FieldSpec>,
    pub outputs: Vec<OutputSpec>,
}

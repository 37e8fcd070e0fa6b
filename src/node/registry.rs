//! # 节点注册表
//!
//! 由宿主显式创建并持有；启动时调用 [`register_builtin_nodes`] 注册本 crate 的节点，
//! 之后在进程生命周期内只读使用。名称唯一，重复注册返回错误而不是静默覆盖。

use std::collections::BTreeMap;

use super::{NodeDescriptor, NodeInputs, NodeOutputs, PluginNode, PngToIcoNode};
use crate::converter::ConverterConfig;
use crate::error::NodeError;

#[derive(Default)]
pub struct NodeRegistry {
    nodes: BTreeMap<&'static str, Box<dyn PluginNode>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, node: Box<dyn PluginNode>) -> Result<(), NodeError> {
        let name = node.name();
        if self.nodes.contains_key(name) {
            return Err(NodeError::DuplicateNode(name.to_string()));
        }

        log::info!("🔌 注册节点：{}", name);
        self.nodes.insert(name, node);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn PluginNode> {
        self.nodes.get(name).map(|node| node.as_ref())
    }

    /// 已注册节点名称（按字典序）。
    pub fn names(&self) -> Vec<&'static str> {
        self.nodes.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn describe(&self) -> Vec<NodeDescriptor> {
        self.nodes.values().map(|node| node.describe()).collect()
    }

    /// 按名称调用节点。
    pub fn invoke(&self, name: &str, inputs: &NodeInputs) -> Result<NodeOutputs, NodeError> {
        let node = self
            .get(name)
            .ok_or_else(|| NodeError::UnknownNode(name.to_string()))?;
        node.invoke(inputs)
    }
}

/// 注册本 crate 提供的全部节点。
pub fn register_builtin_nodes(
    registry: &mut NodeRegistry,
    config: ConverterConfig,
) -> Result<(), NodeError> {
    registry.register(Box::new(PngToIcoNode::new(config)))
}

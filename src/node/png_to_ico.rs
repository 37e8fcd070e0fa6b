//! # PNG → ICO 节点
//!
//! ## 设计思路
//!
//! 节点层只做入参解析与 schema 校验，实际转换交由 `IconConverter`。
//! `icon_size` 会按声明的 16~256 / 步长 16 重新校验，
//! 即使调用方绕过了宿主 UI 的约束也不会把越界值交给编码器。

use super::{FieldSpec, NodeInputs, NodeOutputs, NodeValue, OutputSpec, PluginNode};
use crate::converter::{ConverterConfig, IconConverter};
use crate::error::NodeError;

pub const NODE_NAME: &str = "PNGToICONode";

const INPUT_IMAGE_PATH: &str = "input_image_path";
const ICON_SIZE: &str = "icon_size";
const OUTPUT_IMAGE_PATH: &str = "output_image_path";

/// 将 PNG 文件转换为同目录同名 ICO 文件的节点。
#[derive(Debug, Clone, Default)]
pub struct PngToIcoNode {
    converter: IconConverter,
}

impl PngToIcoNode {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            converter: IconConverter::new(config),
        }
    }

    fn path_field() -> FieldSpec {
        FieldSpec::string(INPUT_IMAGE_PATH, "")
            .with_placeholder("Path to the PNG file (e.g., /path/to/image.png)")
    }

    fn size_field() -> FieldSpec {
        FieldSpec::integer(ICON_SIZE, 256)
            .with_constraints(16, 256, 16)
            .with_placeholder("Size of the ICO icon (16, 32, 48, 256, etc.)")
    }
}

impl PluginNode for PngToIcoNode {
    fn name(&self) -> &'static str {
        NODE_NAME
    }

    fn display_name(&self) -> &'static str {
        "PNG to ICO"
    }

    fn input_schema(&self) -> Vec<FieldSpec> {
        vec![Self::path_field(), Self::size_field()]
    }

    fn output_schema(&self) -> Vec<OutputSpec> {
        vec![OutputSpec::string(OUTPUT_IMAGE_PATH)]
    }

    fn invoke(&self, inputs: &NodeInputs) -> Result<NodeOutputs, NodeError> {
        let path = Self::path_field().resolve(inputs)?;
        let size = Self::size_field().resolve(inputs)?;

        let path = path
            .as_str()
            .ok_or_else(|| NodeError::InvalidInput(format!("字段 {} 必须为字符串", INPUT_IMAGE_PATH)))?;
        let size = size
            .as_integer()
            .and_then(|value| u32::try_from(value).ok())
            .ok_or_else(|| NodeError::InvalidInput(format!("字段 {} 必须为正整数", ICON_SIZE)))?;

        let output_path = self.converter.convert(path, size)?;
        Ok(vec![NodeValue::String(output_path.to_string_lossy().into_owned())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::ConvertError;

    #[test]
    fn schema_matches_declared_contract() {
        let node = PngToIcoNode::default();
        let inputs = node.input_schema();

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].name, "input_image_path");
        assert_eq!(inputs[0].default, NodeValue::from(""));
        assert!(inputs[0].placeholder.is_some());

        assert_eq!(inputs[1].name, "icon_size");
        assert_eq!(inputs[1].default, NodeValue::Integer(256));
        let constraints = inputs[1].constraints.expect("icon_size constraints");
        assert_eq!((constraints.min, constraints.max, constraints.step), (16, 256, 16));

        let outputs = node.output_schema();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].name, "output_image_path");
    }

    #[test]
    fn default_empty_path_is_invalid_input() {
        let result = PngToIcoNode::default().invoke(&NodeInputs::new());
        assert!(matches!(
            result,
            Err(NodeError::Convert(ConvertError::InvalidInput(_)))
        ));
    }

    #[test]
    fn off_grid_size_is_rejected_before_conversion() {
        let mut inputs = NodeInputs::new();
        inputs.insert(INPUT_IMAGE_PATH.into(), NodeValue::from("/does/not/exist.png"));

        for bad in [0, 15, 100, 272] {
            inputs.insert(ICON_SIZE.into(), NodeValue::Integer(bad));
            let result = PngToIcoNode::default().invoke(&inputs);
            assert!(matches!(result, Err(NodeError::InvalidInput(_))), "size={bad}");
        }
    }
}

//! # 请求与中间模型
//!
//! ## 设计思路
//!
//! 将“外部请求”和“流水线中间结果”解耦：
//! - `ConversionRequest` 表示一次转换的输入
//! - `RawImageData` 表示已读取但未解码的字节
//! - `DecodedImage` 表示已解码、尚未归一化色彩模式的图像
//! - `PreparedIcon` 表示已归一化为 RGBA 并缩放到目标尺寸的像素
//! - `ConversionOutcome` 表示成功结果与诊断信息

use std::path::PathBuf;

use image::{ColorType, DynamicImage, ImageFormat, RgbaImage};

/// 一次 PNG → ICO 转换请求。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// 源图片路径。
    pub input_path: PathBuf,
    /// 目标图标边长（像素）。
    pub icon_size: u32,
}

impl ConversionRequest {
    pub fn new(input_path: impl Into<PathBuf>, icon_size: u32) -> Self {
        Self {
            input_path: input_path.into(),
            icon_size,
        }
    }
}

/// 加载阶段输出：原始字节、签名识别出的 MIME 类型与扩展名格式提示。
pub(crate) struct RawImageData {
    pub(crate) bytes: Vec<u8>,
    /// 签名识别结果（仅用于日志与诊断）。
    pub(crate) mime_type: Option<&'static str>,
    /// 由扩展名推断的格式，内容无法识别时作为解码兜底。
    pub(crate) format_hint: Option<ImageFormat>,
}

/// 解码阶段输出。
pub(crate) struct DecodedImage {
    pub(crate) image: DynamicImage,
    /// 解码器给出的原始色彩模式。
    pub(crate) color: ColorType,
}

/// 编码前的最终像素：RGBA8，边长等于目标图标尺寸。
pub(crate) struct PreparedIcon {
    pub(crate) rgba: RgbaImage,
    pub(crate) source_width: u32,
    pub(crate) source_height: u32,
    /// 若发生了色彩模式转换，记录转换前的模式。
    pub(crate) converted_from: Option<ColorType>,
}

/// 转换成功后的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// 写入的 ICO 文件路径。
    pub output_path: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub icon_size: u32,
    /// 源图片不是 RGBA8 时为 `Some(原始模式)`。
    pub converted_from: Option<ColorType>,
    /// 写入 ICO 文件的字节数。
    pub bytes_written: usize,
}

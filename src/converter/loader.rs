//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验，尽快失败，保证失败时不产生任何输出文件。
//!
//! ## 实现思路
//!
//! - 路径：非空 + 存在 + 普通文件（跟随符号链接）。
//! - 输出路径：同目录同名，扩展名替换为 `.ico`；永远不允许覆盖输入文件本身。
//! - 读取：权限等 I/O 失败归类为解码失败（文件无法被解释为图片）。
//! - 格式提示：记录扩展名对应的格式，供无魔数的格式（如 TGA）在解码时兜底。
//! - 签名：`infer` 只用于日志诊断，能否解码交给 `image` 决定。

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use super::source::RawImageData;
use super::{ConvertError, IconConverter};

pub(crate) const ICO_EXTENSION: &str = "ico";

impl IconConverter {
    /// 校验输入路径非空且指向已存在的普通文件。
    pub(super) fn validate_input_path(path: &Path) -> Result<(), ConvertError> {
        if path.as_os_str().is_empty() {
            return Err(ConvertError::InvalidInput("未提供 PNG 文件路径".to_string()));
        }

        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => Ok(()),
            Ok(_) => Err(ConvertError::InvalidInput(format!(
                "路径不是普通文件：{}",
                path.display()
            ))),
            Err(_) => Err(ConvertError::InvalidInput(format!(
                "文件不存在：{}",
                path.display()
            ))),
        }
    }

    /// 推导输出路径：同目录、同文件名，扩展名替换为 `.ico`。
    ///
    /// 输入本身已是 `.ico`（不区分大小写）时拒绝，避免覆盖输入文件。
    pub(super) fn derive_output_path(input: &Path) -> Result<PathBuf, ConvertError> {
        let is_ico = input
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(ICO_EXTENSION));
        if is_ico {
            return Err(ConvertError::InvalidInput(format!(
                "输出路径与输入文件相同：{}",
                input.display()
            )));
        }

        Ok(input.with_extension(ICO_EXTENSION))
    }

    /// 从本地路径加载图片原始字节。
    pub(super) fn load_from_file(&self, path: &Path) -> Result<RawImageData, ConvertError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        let bytes = fs::read(path)
            .map_err(|e| ConvertError::Decode(format!("无法读取图片文件：{}", e)))?;
        if bytes.is_empty() {
            return Err(ConvertError::Decode("图片内容为空".to_string()));
        }

        let mime_type = Self::sniff_mime_type(&bytes);
        let format_hint = ImageFormat::from_path(path).ok();

        log::debug!(
            "🔎 文件签名: {} 扩展名格式: {:?} - {} bytes",
            mime_type.unwrap_or("未知"),
            format_hint,
            bytes.len()
        );

        Ok(RawImageData {
            bytes,
            mime_type,
            format_hint,
        })
    }

    /// 按字节签名识别 MIME 类型，识别不出时返回 `None`。
    fn sniff_mime_type(bytes: &[u8]) -> Option<&'static str> {
        infer::get(bytes).map(|kind| kind.mime_type())
    }
}

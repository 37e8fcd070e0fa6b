//! # ICO 编码与写入模块
//!
//! ## 设计思路
//!
//! 先在内存中完成编码，再一次性写入目标路径：编码器拒绝时不会留下残缺文件。
//! ICO 目录项的宽高字段只有一个字节（0 表示 256），因此单边上限为 256。
//!
//! ## 实现思路
//!
//! - 使用 `image::codecs::ico::IcoEncoder` 写出单个 RGBA 条目（PNG 压缩载荷）。
//! - 目标路径已存在时直接覆盖。

use std::fs;
use std::path::Path;

use image::codecs::ico::IcoEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::source::PreparedIcon;
use super::{ConvertError, IconConverter};

/// ICO 目录项可表示的最大边长。
pub const ICO_MAX_DIMENSION: u32 = 256;

impl IconConverter {
    /// 编码器自身的尺寸约束（与节点 schema 校验无关）。
    pub(super) fn ensure_encodable_size(icon_size: u32) -> Result<(), ConvertError> {
        if !(1..=ICO_MAX_DIMENSION).contains(&icon_size) {
            return Err(ConvertError::Encode(format!(
                "ICO 不支持的图标尺寸：{}x{}（允许 1~{}）",
                icon_size, icon_size, ICO_MAX_DIMENSION
            )));
        }
        Ok(())
    }

    /// 将 RGBA 像素编码为只含一个条目的 ICO 字节流。
    pub(super) fn encode_ico(prepared: &PreparedIcon) -> Result<Vec<u8>, ConvertError> {
        let (width, height) = prepared.rgba.dimensions();
        let mut buffer = Vec::new();

        IcoEncoder::new(&mut buffer)
            .write_image(prepared.rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
            .map_err(|e| ConvertError::Encode(format!("ICO 编码失败：{}", e)))?;

        log::debug!("📦 ICO 编码完成 - {}x{} {} bytes", width, height, buffer.len());
        Ok(buffer)
    }

    /// 写出 ICO 文件，已存在时覆盖。
    pub(super) fn write_icon(output_path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
        fs::write(output_path, bytes).map_err(|e| {
            ConvertError::Encode(format!(
                "无法写入 ICO 文件 {}：{}",
                output_path.display(),
                e
            ))
        })
    }
}

//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → RGBA → 目标尺寸”的过程集中管理。
//! 解码阶段通过 `image::Limits` 约束内存，超限时按解码失败处理。
//!
//! ## 实现思路
//!
//! 1. 先采用扩展名格式提示，再按内容猜测（内容可识别时优先），在配置的资源上限内完整解码
//! 2. 非 RGBA8 的色彩模式（灰度、调色板、RGB、16 位等）统一转换为 RGBA8
//! 3. 使用 `fast_image_resize` 缩放到 `size × size`，失败时回退 `image::imageops::resize`
//! 4. 源图不含 alpha 时，缩放后 alpha 平面保持全不透明

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView, ImageReader, RgbaImage};
use std::io::Cursor;

use super::source::{DecodedImage, PreparedIcon, RawImageData};
use super::{ConvertError, IconConverter};

impl IconConverter {
    /// 在资源上限内将原始字节解码为图像。
    pub(super) fn decode_image(&self, raw: &RawImageData) -> Result<DecodedImage, ConvertError> {
        let mut reader = ImageReader::new(Cursor::new(raw.bytes.as_slice()));
        if let Some(format) = raw.format_hint {
            reader.set_format(format);
        }
        let mut reader = reader
            .with_guessed_format()
            .map_err(|e| ConvertError::Decode(format!("无法识别图片格式：{}", e)))?;
        reader.limits(self.config.to_limits());

        let image = reader
            .decode()
            .map_err(|e| ConvertError::Decode(format!("图片解码失败：{}", e)))?;
        let color = image.color();
        let (width, height) = image.dimensions();

        log::info!(
            "✅ 图片解码成功 - 类型: {} 尺寸: {}x{} 色彩模式: {:?}",
            raw.mime_type.unwrap_or("未知"),
            width,
            height,
            color
        );

        Ok(DecodedImage { image, color })
    }

    /// 归一化为 RGBA8 并缩放到目标图标尺寸。
    pub(super) fn prepare_icon(
        &self,
        decoded: DecodedImage,
        icon_size: u32,
    ) -> Result<PreparedIcon, ConvertError> {
        let (source_width, source_height) = decoded.image.dimensions();
        let source_has_alpha = decoded.color.has_alpha();

        let (rgba, converted_from) = Self::normalize_to_rgba(decoded.image);
        let mut rgba = self.scale_to_icon(rgba, icon_size);

        if !source_has_alpha {
            for pixel in rgba.pixels_mut() {
                pixel[3] = u8::MAX;
            }
        }

        Ok(PreparedIcon {
            rgba,
            source_width,
            source_height,
            converted_from,
        })
    }

    /// 非 RGBA8 时转换色彩模式，返回转换前的模式。
    pub(super) fn normalize_to_rgba(image: DynamicImage) -> (RgbaImage, Option<ColorType>) {
        let color = image.color();
        if color == ColorType::Rgba8 {
            return (image.into_rgba8(), None);
        }

        log::debug!("🎨 色彩模式转换：{:?} -> Rgba8", color);
        (image.into_rgba8(), Some(color))
    }

    fn scale_to_icon(&self, rgba: RgbaImage, icon_size: u32) -> RgbaImage {
        let (width, height) = rgba.dimensions();
        if width == icon_size && height == icon_size {
            return rgba;
        }

        let filter = self.config.resize_quality.filter();
        log::info!(
            "🧩 缩放到图标尺寸：{}x{} -> {}x{}（filter={:?}）",
            width,
            height,
            icon_size,
            icon_size,
            filter
        );

        match Self::resize_with_fast_image_resize(&rgba, icon_size, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
                image::imageops::resize(&rgba, icon_size, icon_size, filter)
            }
        }
    }

    fn resize_with_fast_image_resize(
        src: &RgbaImage,
        icon_size: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, ConvertError> {
        let (src_width, src_height) = src.dimensions();

        let src_image = fr::images::ImageRef::new(
            src_width,
            src_height,
            src.as_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| ConvertError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(icon_size, icon_size, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| ConvertError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbaImage::from_raw(icon_size, icon_size, dst_image.into_vec())
            .ok_or_else(|| ConvertError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconConverter` 只负责流程编排，不与宿主绑定。处理链路固定为：
//! 1. 校验输入路径并推导输出路径
//! 2. 读取原始字节并记录格式提示
//! 3. 解码、归一化为 RGBA 并缩放到目标尺寸
//! 4. 内存中编码 ICO 后一次性写入
//!
//! ## 实现思路
//!
//! - 处理器构造后不可变，可在多个线程间共享，多次调用之间没有共享可变状态。
//! - 并发转换同一个输出路径时，最终写入存在竞争，由调用方避免。
//! - 记录 `load/decode/encode/total` 阶段耗时，便于性能诊断。

use std::path::{Path, PathBuf};
use std::time::Instant;

use super::source::{ConversionOutcome, ConversionRequest};
use super::{ConvertError, ConverterConfig};

/// PNG → ICO 转换器。
#[derive(Debug, Clone, Default)]
pub struct IconConverter {
    pub(super) config: ConverterConfig,
}

impl IconConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// 转换主入口：返回写出的 ICO 文件路径。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use png_to_ico_node::converter::{ConverterConfig, IconConverter};
    ///
    /// let converter = IconConverter::new(ConverterConfig::default());
    /// let output = converter.convert("photo.png", 64)?;
    /// assert_eq!(output, std::path::PathBuf::from("photo.ico"));
    /// # Ok::<(), png_to_ico_node::converter::ConvertError>(())
    /// ```
    pub fn convert(
        &self,
        input_path: impl AsRef<Path>,
        icon_size: u32,
    ) -> Result<PathBuf, ConvertError> {
        let request = ConversionRequest::new(input_path.as_ref(), icon_size);
        self.convert_detailed(&request)
            .map(|outcome| outcome.output_path)
    }

    /// 执行转换并返回完整诊断信息。
    pub fn convert_detailed(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionOutcome, ConvertError> {
        let result = self.run(request);
        if let Err(err) = &result {
            log::warn!(
                "❌ 图标转换失败 - code={} stage={} 路径: {} 原因: {}",
                err.code(),
                err.stage(),
                request.input_path.display(),
                err
            );
        }
        result
    }

    fn run(&self, request: &ConversionRequest) -> Result<ConversionOutcome, ConvertError> {
        let total_start = Instant::now();

        Self::validate_input_path(&request.input_path)?;
        let output_path = Self::derive_output_path(&request.input_path)?;

        let load_start = Instant::now();
        let raw = self.load_from_file(&request.input_path)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let decoded = self.decode_image(&raw)?;
        drop(raw);
        Self::ensure_encodable_size(request.icon_size)?;
        let prepared = self.prepare_icon(decoded, request.icon_size)?;
        let decode_elapsed = decode_start.elapsed();

        let encode_start = Instant::now();
        let bytes = Self::encode_ico(&prepared)?;
        Self::write_icon(&output_path, &bytes)?;
        let encode_elapsed = encode_start.elapsed();

        log::info!(
            "✅ 图标转换完成 - {} -> {} ({}x{}) load={}ms decode={}ms encode={}ms total={}ms",
            request.input_path.display(),
            output_path.display(),
            request.icon_size,
            request.icon_size,
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(ConversionOutcome {
            output_path,
            source_width: prepared.source_width,
            source_height: prepared.source_height,
            icon_size: request.icon_size,
            converted_from: prepared.converted_from,
            bytes_written: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, DynamicImage, ImageBuffer, ImageFormat, Rgb, Rgba};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("png-to-ico-handler-{tag}-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn write_rgb_png(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8])
        });
        DynamicImage::ImageRgb8(img)
            .save_with_format(path, ImageFormat::Png)
            .expect("failed to write test png");
    }

    #[test]
    fn convert_reports_outcome_details() {
        let dir = unique_temp_dir("outcome");
        let input = dir.join("photo.png");
        write_rgb_png(&input, 512, 512);

        let converter = IconConverter::default();
        let outcome = converter
            .convert_detailed(&ConversionRequest::new(&input, 64))
            .expect("conversion should succeed");

        assert_eq!(outcome.output_path, dir.join("photo.ico"));
        assert_eq!((outcome.source_width, outcome.source_height), (512, 512));
        assert_eq!(outcome.icon_size, 64);
        assert_eq!(outcome.converted_from, Some(ColorType::Rgb8));
        let written = std::fs::metadata(&outcome.output_path).expect("output exists");
        assert_eq!(written.len() as usize, outcome.bytes_written);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn oversized_icon_is_encode_error_without_output() {
        let dir = unique_temp_dir("oversized");
        let input = dir.join("big.png");
        DynamicImage::ImageRgba8(ImageBuffer::from_pixel(8, 8, Rgba([1, 1, 1, 255])))
            .save_with_format(&input, ImageFormat::Png)
            .expect("failed to write test png");

        let result = IconConverter::default().convert(&input, 512);
        assert!(matches!(result, Err(ConvertError::Encode(_))));
        assert!(!dir.join("big.ico").exists());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn decode_error_wins_over_bad_size() {
        let dir = unique_temp_dir("order");
        let input = dir.join("fake.png");
        std::fs::write(&input, "definitely not a png").expect("write fake png");

        let result = IconConverter::default().convert(&input, 0);
        assert!(matches!(result, Err(ConvertError::Decode(_))));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn converter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconConverter>();
    }
}

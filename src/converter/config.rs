//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `ConverterConfig`，保证运行时行为可观测、可调整、可测试。
//! 缩放质量档位（quality / balanced / speed）作为高层语义，映射到底层滤镜。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用的配置（与 Pillow 保存 ICO 时同样使用 Lanczos 滤镜）。
//! - `ResizeQuality` 负责档位字符串解析与反向输出，并参与 serde 序列化。
//! - `load_from_path` 读取 JSON 配置，文件缺失或损坏时回退默认值。
//! - `to_limits` 将内存上限转换为 `image::Limits`，在解码阶段生效。

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use super::{ConfigError, ConvertError};

/// 图标转换配置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// 缩放到目标图标尺寸时使用的质量档位。
    pub resize_quality: ResizeQuality,
    /// 解码阶段允许的内存分配上限（字节）。
    ///
    /// 默认值覆盖单边上限内最大的 RGBA8 源图（16384² × 4 字节）。
    pub max_decoded_bytes: u64,
    /// 源图片单边尺寸上限（像素）。
    pub max_source_dimension: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            resize_quality: ResizeQuality::Quality,
            max_decoded_bytes: 1024 * 1024 * 1024,
            max_source_dimension: 16_384,
        }
    }
}

/// 缩放质量档位。
///
/// - `Quality`：Lanczos3，边缘最锐利
/// - `Balanced`：CatmullRom
/// - `Speed`：Triangle（双线性）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeQuality {
    Quality,
    Balanced,
    Speed,
}

impl ResizeQuality {
    /// 从外部字符串解析档位。
    ///
    /// # 示例
    /// ```rust
    /// use png_to_ico_node::converter::ResizeQuality;
    ///
    /// let q = ResizeQuality::from_str(" Balanced ")?;
    /// assert_eq!(q.as_str(), "balanced");
    /// # Ok::<(), png_to_ico_node::converter::ConvertError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(quality: &str) -> Result<Self, ConvertError> {
        match quality.trim().to_lowercase().as_str() {
            "quality" => Ok(Self::Quality),
            "balanced" => Ok(Self::Balanced),
            "speed" => Ok(Self::Speed),
            other => Err(ConvertError::InvalidInput(format!(
                "未知缩放档位：{}（可选：quality / balanced / speed）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Balanced => "balanced",
            Self::Speed => "speed",
        }
    }

    /// 档位对应的 `image` 滤镜。
    pub fn filter(self) -> FilterType {
        match self {
            Self::Quality => FilterType::Lanczos3,
            Self::Balanced => FilterType::CatmullRom,
            Self::Speed => FilterType::Triangle,
        }
    }
}

impl ConverterConfig {
    /// 从 JSON 文件加载配置。
    ///
    /// 文件不存在、无法读取或内容非法时回退为默认配置。
    pub fn load_from_path(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(config_path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("⚠️ 转换配置解析失败，使用默认配置：{}", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("⚠️ 转换配置读取失败，使用默认配置：{}", e);
                Self::default()
            }
        }
    }

    /// 将配置以 JSON 写入文件。
    pub fn save_to_path(&self, config_path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub(crate) fn to_limits(&self) -> image::Limits {
        let mut limits = image::Limits::default();
        limits.max_alloc = Some(self.max_decoded_bytes);
        limits.max_image_width = Some(self.max_source_dimension);
        limits.max_image_height = Some(self.max_source_dimension);
        limits
    }
}

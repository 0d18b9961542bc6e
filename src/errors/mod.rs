/*
 * @Author       : 老董
 * @Date         : 2026-08-12
 * @Description  : 可视化工具的错误类型与输出相关类型
 */

use std::path::PathBuf;
use thiserror::Error;

/// 可视化操作错误类型
#[derive(Error, Debug)]
pub enum VisError {
    /// 输出基础路径不应携带后缀（库会自动补全 `.dot` 与图像后缀）
    #[error("输出路径无效：{0}")]
    InvalidOutputPath(String),

    /// Graphviz 渲染阶段失败
    #[error("渲染失败：{0}")]
    RenderFailed(String),

    /// 文件读写失败
    #[error("IO错误：{0}")]
    Io(#[from] std::io::Error),

    /// 图像编码/保存失败
    #[error("图像处理失败：{0}")]
    Image(#[from] image::ImageError),
}

// ========== 可视化输出相关类型 ==========

/// 图像输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// PNG 格式（默认）
    #[default]
    Png,
    /// SVG 矢量格式
    Svg,
    /// PDF 格式
    Pdf,
}

impl ImageFormat {
    /// 获取文件扩展名（不含点号）
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }

    /// 从扩展名解析格式（用于错误提示）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// 可视化输出结果
#[derive(Debug)]
pub struct VisualizationOutput {
    /// DOT 文件路径（始终生成）
    pub dot_path: PathBuf,
    /// 图像文件路径（仅当 Graphviz 可用时生成）
    pub image_path: Option<PathBuf>,
    /// Graphviz 是否可用
    pub graphviz_available: bool,
    /// 如果 Graphviz 不可用，提供安装提示
    pub graphviz_hint: Option<String>,
}

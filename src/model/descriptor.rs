/*
 * @Author       : 老董
 * @Date         : 2026-08-12
 * @Description  : 模型描述符（Model Descriptor）
 *                 可序列化的模型结构中间表示，用于加载、保存与可视化
 */

use super::ModuleSource;
use serde::{Deserialize, Serialize};

/// 模型的可序列化描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    /// 模型名称
    pub name: String,
    /// 所有子模块描述（声明顺序）
    pub modules: Vec<ModuleDescriptor>,
}

/// 子模块描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// 子模块名称（如 "fc1"）
    pub name: String,
    /// 子模块类型
    pub kind: ModuleKind,
}

/// 子模块类型描述（包含类型特定参数）
///
/// 可视化核心只认 `Linear`；其余类型在层提取时被跳过，
/// 保留它们是为了让描述文件能完整记录模型结构。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModuleKind {
    Linear {
        in_features: usize,
        out_features: usize,
    },
    Sigmoid,
    Softmax,
    Tanh,
    ReLU,
    LeakyReLU {
        alpha: f32,
    },
    Flatten,
    Dropout {
        p: f32,
    },
    Conv2d {
        in_channels: usize,
        out_channels: usize,
        kernel_size: (usize, usize),
    },
    MaxPool2d {
        kernel_size: (usize, usize),
    },
}

impl ModelDescriptor {
    /// 创建新的模型描述符
    pub fn new(name: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: name.to_string(),
            modules: Vec::new(),
        }
    }

    /// 追加子模块描述（按声明顺序）
    pub fn add_module(&mut self, name: &str, kind: ModuleKind) {
        self.modules.push(ModuleDescriptor {
            name: name.to_string(),
            kind,
        });
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ModuleSource for ModelDescriptor {
    fn named_modules(&self) -> Vec<(String, ModuleKind)> {
        self.modules
            .iter()
            .map(|m| (m.name.clone(), m.kind.clone()))
            .collect()
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-08-13
 * @Description  : Graph 模块的类型定义
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 提取出的全连接层规格
///
/// 提取后不可变，被图构建器消费一次后即可丢弃。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearLayerSpec {
    /// 层名称（全图唯一的稳定标识，如 "fc1"）
    pub name: String,
    /// 输入特征维度
    pub in_features: usize,
    /// 输出特征维度
    pub out_features: usize,
    /// 在提取序列中的位置（0 起始）
    pub order_index: usize,
}

/// 神经元节点角色（仅用于可视化着色，由层位置推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeuronRole {
    /// 合成输入层的节点
    Input,
    /// 中间层的输出节点
    Hidden,
    /// 最后一层的输出节点
    Output,
}

/// 神经元节点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronNode {
    /// 全图唯一的稳定 ID（编码层名 + 神经元序号，如 "fc1_out_3"）
    pub id: String,
    /// 所属层的名称（合成输入层用哨兵值 "input"）
    pub layer: String,
    /// 节点角色
    pub role: NeuronRole,
    /// 二维坐标（x 按层序，y 按层内居中）
    pub position: (f32, f32),
}

/// 有向边（无权重；完全二分生成保证不会重复）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// 起点节点 ID
    pub from: String,
    /// 终点节点 ID
    pub to: String,
}

/// 神经元连接图
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkGraph {
    /// 所有节点（创建顺序：合成输入层在前，随后按层序）
    pub nodes: Vec<NeuronNode>,
    /// 所有有向边
    pub edges: Vec<Edge>,
}

impl NetworkGraph {
    /// 图是否为空（未提取到任何全连接层时为 true）
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 节点数量
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 按 ID 查找节点
    pub fn get_node(&self, id: &str) -> Option<&NeuronNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// 二维布局：节点 ID 到坐标的全覆盖映射
///
/// 与图一起由构建器产出，仅供渲染使用，不属于图的结构信息。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    positions: HashMap<String, (f32, f32)>,
}

impl Layout {
    /// 记录节点坐标
    pub(in crate::graph) fn insert(&mut self, id: &str, position: (f32, f32)) {
        self.positions.insert(id.to_string(), position);
    }

    /// 获取节点坐标
    pub fn get(&self, id: &str) -> Option<(f32, f32)> {
        self.positions.get(id).copied()
    }

    /// 布局中的节点数量
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// 布局是否为空
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// 所有坐标的包围盒 (min_x, min_y, max_x, max_y)
    pub fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let mut iter = self.positions.values();
        let &(x0, y0) = iter.next()?;
        let mut bounds = (x0, y0, x0, y0);
        for &(x, y) in iter {
            bounds.0 = bounds.0.min(x);
            bounds.1 = bounds.1.min(y);
            bounds.2 = bounds.2.max(x);
            bounds.3 = bounds.3.max(y);
        }
        Some(bounds)
    }
}

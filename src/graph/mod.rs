/*
 * @Author       : 老董
 * @Date         : 2026-08-13
 * @Description  : Graph 模块：神经元连接图的核心实现
 *
 * 公开 API：
 * - `extract_linear_layers`: 从模型遍历中提取有序的全连接层
 * - `build_graph_and_layout`: 构建节点/边图与二维布局
 * - `graph_from_model`: 上述两步的组合入口（含空模型短路）
 */

mod build;
mod extract;
mod types;

pub use build::{build_graph_and_layout, graph_from_model};
pub use extract::extract_linear_layers;
pub use types::{Edge, Layout, LinearLayerSpec, NetworkGraph, NeuronNode, NeuronRole};

#[cfg(test)]
mod tests;

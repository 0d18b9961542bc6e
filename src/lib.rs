//! # NN Vis
//!
//! `nn_vis`是一个把前馈神经网络的神经元级连接画成分层有向图的小工具：
//! 从模型描述中按声明顺序提取全连接（Linear）层，为每个神经元生成节点与
//! 确定性的二维布局，在相邻层之间做完全二分连接，并按输入/隐藏/输出角色
//! 着色渲染（Graphviz DOT 或 PNG 位图）。
//!
//! 只关心线性层的宽度信息：不把激活函数等非线性结构表示为图结构，
//! 不做权重大小可视化，完全二分连接的开销也只适合小型网络的结构检查。

pub mod errors;
pub mod graph;
pub mod model;
pub mod render;

pub use errors::{ImageFormat, VisError, VisualizationOutput};
pub use graph::{
    Edge, Layout, LinearLayerSpec, NetworkGraph, NeuronNode, NeuronRole, build_graph_and_layout,
    extract_linear_layers, graph_from_model,
};
pub use model::{ModelDescriptor, ModuleDescriptor, ModuleKind, ModuleSource};
pub use render::Canvas;

/*
 * @Author       : 老董
 * @Date         : 2026-08-13
 * @Description  : 图构建与布局：神经元节点、完全二分边与确定性二维坐标
 */

use super::{Edge, Layout, LinearLayerSpec, NetworkGraph, NeuronNode, NeuronRole};
use crate::model::ModuleSource;

/// 层内相邻神经元的纵向间距
const Y_SPACING: f32 = 1.0;
/// 相邻层的横向间距
const X_SPACING: f32 = 2.0;

/// 合成输入层的哨兵层名
const INPUT_LAYER: &str = "input";

/// 由有序的全连接层序列构建连接图与二维布局
///
/// # 算法
/// 1. 合成输入层：按第一层的 `in_features` 生成节点，ID 为 `input_{i}`，
///    x = 0，y = `(i - in_features/2) * 间距`（各层按自身宽度独立绕 y=0
///    居中，不同层中 y 相同的神经元并无对应关系）
/// 2. 各层输出节点：第 k 层（0 起始）生成 `out_features` 个节点，
///    ID 为 `{层名}_out_{j}`，x = `(k+1) * 2.0`；最后一层角色为
///    `Output`，其余为 `Hidden`
/// 3. 边：输入层 → 第 0 层、第 k-1 层 → 第 k 层各做完全二分连接；
///    不跨层、不在层内连边
///
/// 坐标与 ID 只由 `layers` 的内容和顺序决定，相同输入产出完全相同的
/// 图与布局。居中用实数除法，奇偶宽度都能精确居中。
///
/// # 已知缺陷
/// 某层宽度为 0 时该侧不产生节点，图中会出现一个断开的空层；
/// 此处沿用原始行为，不做显式校验。
pub fn build_graph_and_layout(layers: &[LinearLayerSpec]) -> (NetworkGraph, Layout) {
    let mut graph = NetworkGraph::default();
    let mut layout = Layout::default();

    let Some(first) = layers.first() else {
        return (graph, layout);
    };

    // 1. 合成输入层节点
    for neuron_idx in 0..first.in_features {
        let id = format!("input_{neuron_idx}");
        let y = (neuron_idx as f32 - first.in_features as f32 / 2.0) * Y_SPACING;
        layout.insert(&id, (0.0, y));
        graph.nodes.push(NeuronNode {
            id,
            layer: INPUT_LAYER.to_string(),
            role: NeuronRole::Input,
            position: (0.0, y),
        });
    }

    // 2. 各层输出节点
    for layer in layers {
        let x = (layer.order_index + 1) as f32 * X_SPACING;
        let role = if layer.order_index == layers.len() - 1 {
            NeuronRole::Output
        } else {
            NeuronRole::Hidden
        };

        for neuron_idx in 0..layer.out_features {
            let id = format!("{}_out_{neuron_idx}", layer.name);
            let y = (neuron_idx as f32 - layer.out_features as f32 / 2.0) * Y_SPACING;
            layout.insert(&id, (x, y));
            graph.nodes.push(NeuronNode {
                id,
                layer: layer.name.clone(),
                role,
                position: (x, y),
            });
        }
    }

    // 3. 相邻层间的完全二分边
    for (i, layer) in layers.iter().enumerate() {
        if i == 0 {
            // 输入层 → 第 0 层
            for in_neuron in 0..layer.in_features {
                for out_neuron in 0..layer.out_features {
                    graph.edges.push(Edge {
                        from: format!("input_{in_neuron}"),
                        to: format!("{}_out_{out_neuron}", layer.name),
                    });
                }
            }
        } else {
            // 第 i-1 层 → 第 i 层
            let prev = &layers[i - 1];
            for in_neuron in 0..prev.out_features {
                for out_neuron in 0..layer.out_features {
                    graph.edges.push(Edge {
                        from: format!("{}_out_{in_neuron}", prev.name),
                        to: format!("{}_out_{out_neuron}", layer.name),
                    });
                }
            }
        }
    }

    (graph, layout)
}

/// 从模型一步构建连接图与布局（含空模型短路）
///
/// 提取全连接层后调用 [`build_graph_and_layout`]；模型中没有全连接层时
/// 打印提示并直接返回空图与空布局，不会调用构建器。
pub fn graph_from_model(model: &impl ModuleSource) -> (NetworkGraph, Layout) {
    let layers = super::extract_linear_layers(model);
    if layers.is_empty() {
        println!("模型中未找到全连接层，没有可画的内容");
        return (NetworkGraph::default(), Layout::default());
    }
    build_graph_and_layout(&layers)
}

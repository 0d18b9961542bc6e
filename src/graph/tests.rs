use super::{
    LinearLayerSpec, NeuronRole, build_graph_and_layout, extract_linear_layers, graph_from_model,
};
use crate::model::{ModelDescriptor, ModuleKind, ModuleSource};
use approx::assert_abs_diff_eq;

fn specs(widths: &[(&str, usize, usize)]) -> Vec<LinearLayerSpec> {
    widths
        .iter()
        .enumerate()
        .map(|(order_index, &(name, in_features, out_features))| LinearLayerSpec {
            name: name.to_string(),
            in_features,
            out_features,
            order_index,
        })
        .collect()
}

#[test]
fn test_extract_preserves_order_and_skips_non_linear() {
    let mut model = ModelDescriptor::new("mlp");
    model.add_module(
        "fc1",
        ModuleKind::Linear {
            in_features: 4,
            out_features: 8,
        },
    );
    model.add_module("act1", ModuleKind::Tanh);
    model.add_module(
        "fc2",
        ModuleKind::Linear {
            in_features: 8,
            out_features: 2,
        },
    );
    model.add_module("sm", ModuleKind::Softmax);

    let layers = extract_linear_layers(&model);

    // 遍历覆盖全部 4 个子模块，但只保留 Linear，
    // 顺序与声明一致，order_index 按过滤后位置赋值
    assert_eq!(model.num_modules(), 4);
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].name, "fc1");
    assert_eq!((layers[0].in_features, layers[0].out_features), (4, 8));
    assert_eq!(layers[0].order_index, 0);
    assert_eq!(layers[1].name, "fc2");
    assert_eq!(layers[1].order_index, 1);
}

#[test]
fn test_build_determinism() {
    let layers = specs(&[("fc1", 3, 5), ("fc2", 5, 2)]);

    let (graph_a, layout_a) = build_graph_and_layout(&layers);
    let (graph_b, layout_b) = build_graph_and_layout(&layers);

    // 两次独立构建：节点、边、坐标完全一致
    assert_eq!(graph_a, graph_b);
    assert_eq!(layout_a, layout_b);
}

#[test]
fn test_node_and_edge_counts() {
    // 节点数 = in_0 + Σ out_k；边数 = in_0*out_0 + Σ out_{k-1}*out_k
    let layers = specs(&[("fc1", 4, 6), ("fc2", 6, 3), ("fc3", 3, 2)]);
    let (graph, layout) = build_graph_and_layout(&layers);

    assert_eq!(graph.node_count(), 4 + 6 + 3 + 2);
    assert_eq!(graph.edge_count(), 4 * 6 + 6 * 3 + 3 * 2);
    // 布局覆盖每个节点
    assert_eq!(layout.len(), graph.node_count());
    for node in &graph.nodes {
        assert_eq!(layout.get(&node.id), Some(node.position));
    }
}

#[test]
fn test_role_partition() {
    let layers = specs(&[("fc1", 4, 6), ("fc2", 6, 3)]);
    let (graph, _) = build_graph_and_layout(&layers);

    let inputs = graph
        .nodes
        .iter()
        .filter(|n| n.role == NeuronRole::Input)
        .count();
    let hiddens = graph
        .nodes
        .iter()
        .filter(|n| n.role == NeuronRole::Hidden)
        .count();
    let outputs = graph
        .nodes
        .iter()
        .filter(|n| n.role == NeuronRole::Output)
        .count();

    // 三种角色恰好划分全部节点
    assert_eq!(inputs, 4);
    assert_eq!(hiddens, 6);
    assert_eq!(outputs, 3);
    assert_eq!(inputs + hiddens + outputs, graph.node_count());
}

#[test]
fn test_layer_centering() {
    // 每层（输入/隐藏/输出）的 y 坐标均值恒为 -0.5，
    // 与各层宽度的奇偶无关（对称性检查）
    let layers = specs(&[("fc1", 5, 4), ("fc2", 4, 3), ("fc3", 3, 1)]);
    let (graph, _) = build_graph_and_layout(&layers);

    for layer in ["input", "fc1", "fc2", "fc3"] {
        let ys: Vec<f32> = graph
            .nodes
            .iter()
            .filter(|n| n.layer == layer)
            .map(|n| n.position.1)
            .collect();
        assert!(!ys.is_empty());
        let mean = ys.iter().sum::<f32>() / ys.len() as f32;
        assert_abs_diff_eq!(mean, -0.5, epsilon = 1e-6);
    }
}

#[test]
fn test_coordinates() {
    let layers = specs(&[("fc1", 3, 2), ("fc2", 2, 1)]);
    let (graph, layout) = build_graph_and_layout(&layers);

    // x 按层序：输入层 0，第 k 层 (k+1)*2.0
    assert_eq!(layout.get("input_0"), Some((0.0, -1.5)));
    assert_eq!(layout.get("input_2"), Some((0.0, 0.5)));
    assert_eq!(layout.get("fc1_out_0"), Some((2.0, -1.0)));
    assert_eq!(layout.get("fc2_out_0"), Some((4.0, -0.5)));
    // 节点自身记录的坐标与布局一致
    assert_eq!(graph.get_node("fc1_out_1").unwrap().position, (2.0, 0.0));
}

#[test]
fn test_no_skip_and_no_intra_layer_edges() {
    let layers = specs(&[("fc1", 2, 3), ("fc2", 3, 2)]);
    let (graph, _) = build_graph_and_layout(&layers);

    for edge in &graph.edges {
        let from = graph.get_node(&edge.from).unwrap();
        let to = graph.get_node(&edge.to).unwrap();
        // 每条边都恰好跨一个相邻层（x 差恰为层间距）
        assert_abs_diff_eq!(to.position.0 - from.position.0, 2.0, epsilon = 1e-6);
    }
}

#[test]
fn test_empty_model_short_circuit() {
    // 没有全连接层的模型：提取得到空序列，入口直接返回空图
    let mut model = ModelDescriptor::new("act_only");
    model.add_module("act", ModuleKind::Sigmoid);

    assert!(extract_linear_layers(&model).is_empty());

    let (graph, layout) = graph_from_model(&model);
    assert!(graph.is_empty());
    assert!(layout.is_empty());
}

#[test]
fn test_degenerate_zero_width_layer() {
    // 宽度为 0 的层不产生节点（沿用原始的静默行为，不报错）
    let layers = specs(&[("fc1", 3, 0), ("fc2", 0, 2)]);
    let (graph, _) = build_graph_and_layout(&layers);

    assert_eq!(graph.node_count(), 3 + 0 + 2);
    assert_eq!(graph.edge_count(), 0);
}

//! # MLP 连接可视化示例
//!
//! 展示 nn_vis 的完整流程：
//! - 构建模型描述（`ModelDescriptor`）
//! - 生成连接图与布局（`graph_from_model`）
//! - 保存 DOT/图像（`save_visualization`）与 PNG 位图（`Canvas`）
//!
//! ## 运行
//! ```bash
//! cargo run --example mlp
//! ```

use nn_vis::{Canvas, ModelDescriptor, ModuleKind, VisError, graph_from_model};

fn main() -> Result<(), VisError> {
    println!("=== MLP 连接可视化示例 ===\n");

    // 1. 构建模型描述：4 -> 8 -> 8 -> 3 的小型 MLP
    let mut model = ModelDescriptor::new("iris_mlp");
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
            out_features: 8,
        },
    );
    model.add_module("act2", ModuleKind::Tanh);
    model.add_module(
        "fc3",
        ModuleKind::Linear {
            in_features: 8,
            out_features: 3,
        },
    );

    // 2. 生成连接图与布局
    let (graph, layout) = graph_from_model(&model);
    println!(
        "图已生成：{} 个神经元节点，{} 条连接",
        graph.node_count(),
        graph.edge_count()
    );

    // 3. 保存 DOT（Graphviz 可用时额外生成 PNG）
    std::fs::create_dir_all("outputs")?;
    let output = graph.save_visualization(&layout, "outputs/iris_mlp", None)?;
    println!("DOT 已保存：{}", output.dot_path.display());
    match (&output.image_path, &output.graphviz_hint) {
        (Some(path), _) => println!("图像已保存：{}", path.display()),
        (None, Some(hint)) => println!("{hint}"),
        _ => {}
    }

    // 4. 位图渲染（不依赖 Graphviz）
    let mut canvas = Canvas::new(1200, 800);
    canvas.draw_graph(&graph, &layout);
    canvas.save("outputs/iris_mlp_canvas.png")?;
    println!("位图已保存：outputs/iris_mlp_canvas.png");

    Ok(())
}

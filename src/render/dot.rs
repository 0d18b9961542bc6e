/*
 * @Author       : 老董
 * @Date         : 2026-08-14
 * @Description  : NetworkGraph 的 Graphviz DOT 可视化
 */

use crate::errors::{ImageFormat, VisError, VisualizationOutput};
use crate::graph::{Layout, NetworkGraph, NeuronRole};
use std::path::Path;
use std::process::Command;

/// DOT 坐标缩放因子（布局单位 → Graphviz 点单位）
const DOT_SCALE: f32 = 72.0;
/// 层标签相对最低神经元的纵向偏移（布局单位）
const LABEL_Y_OFFSET: f32 = 1.5;

impl NetworkGraph {
    /// 生成 Graphviz DOT 格式的图描述字符串
    ///
    /// 节点坐标取自 `layout` 并以 `pos="x,y!"` 固定，需用 `neato -n2`
    /// 渲染才能保持分层布局。返回的字符串也可用于：
    /// - 在线预览：<https://dreampuf.github.io/GraphvizOnline/>
    /// - 自定义保存逻辑
    ///
    /// # 推荐
    /// 如果只需保存可视化文件，推荐使用 [`save_visualization`] 方法，
    /// 它会自动生成 `.dot` 文件，并在 Graphviz 可用时生成图像。
    ///
    /// # 节点样式
    /// - **Input**: 浅蓝色
    /// - **Hidden**: 浅绿色
    /// - **Output**: 浅珊瑚色
    ///
    /// [`save_visualization`]: NetworkGraph::save_visualization
    pub fn to_dot(&self, layout: &Layout) -> String {
        let mut dot = String::new();

        // 图头部
        dot.push_str("digraph Model {\n");
        dot.push_str("    label=\"Neural Network Architecture (Neurons Only)\";\n");
        dot.push_str("    labelloc=\"t\";\n");
        dot.push_str("    fontname=\"Microsoft YaHei,SimHei,Arial\";\n");
        dot.push_str("    node [fontname=\"Microsoft YaHei,SimHei,Arial\"];\n");
        dot.push_str("    edge [color=\"#AAAAAA\" arrowsize=0.5];\n");
        dot.push('\n');

        // 节点定义（坐标固定，圆形，按角色着色）
        for node in &self.nodes {
            let (x, y) = layout.get(&node.id).unwrap_or(node.position);
            let fillcolor = Self::dot_node_color(node.role);
            dot.push_str(&format!(
                "    \"{}\" [label=\"\" shape=circle style=filled fillcolor=\"{}\" width=0.3 pos=\"{},{}!\"];\n",
                node.id,
                fillcolor,
                x * DOT_SCALE,
                y * DOT_SCALE
            ));
        }
        dot.push('\n');

        // 层边界文字标签（置于图下方）
        let label_y = self.label_baseline(layout);
        for (idx, (label, x)) in self.layer_labels().into_iter().enumerate() {
            dot.push_str(&format!(
                "    \"__label_{idx}\" [label=\"{label}\" shape=plaintext fontsize=10 pos=\"{},{}!\"];\n",
                x * DOT_SCALE,
                label_y * DOT_SCALE
            ));
        }
        dot.push('\n');

        // 边定义
        for edge in &self.edges {
            dot.push_str(&format!("    \"{}\" -> \"{}\";\n", edge.from, edge.to));
        }

        dot.push_str("}\n");

        dot
    }

    /// 获取节点角色对应的填充颜色
    const fn dot_node_color(role: NeuronRole) -> &'static str {
        match role {
            NeuronRole::Input => "#ADD8E6",  // 浅蓝
            NeuronRole::Hidden => "#90EE90", // 浅绿
            NeuronRole::Output => "#F08080", // 浅珊瑚
        }
    }

    /// 收集各层的边界标签及其 x 坐标（按层序）
    ///
    /// 合成输入层标为 "Input"；其余按角色标为 "Hidden {k} ({层名})"
    /// 或 "Output ({层名})"。
    fn layer_labels(&self) -> Vec<(String, f32)> {
        let mut labels: Vec<(String, f32)> = Vec::new();
        let mut seen: Vec<&str> = Vec::new();
        let mut hidden_count = 0usize;

        for node in &self.nodes {
            if seen.contains(&node.layer.as_str()) {
                continue;
            }
            seen.push(&node.layer);

            let text = match node.role {
                NeuronRole::Input => "Input".to_string(),
                NeuronRole::Hidden => {
                    hidden_count += 1;
                    format!("Hidden {hidden_count}\\n({})", node.layer)
                }
                NeuronRole::Output => format!("Output\\n({})", node.layer),
            };
            labels.push((text, node.position.0));
        }

        labels
    }

    /// 标签行的 y 坐标（最低神经元再往下偏移一段）
    fn label_baseline(&self, layout: &Layout) -> f32 {
        let min_y = layout.bounds().map_or(0.0, |(_, min_y, _, _)| min_y);
        min_y - LABEL_Y_OFFSET
    }

    /// 将 DOT 保存到文件（内部方法）
    fn save_dot<P: AsRef<Path>>(&self, layout: &Layout, path: P) -> Result<(), VisError> {
        std::fs::write(path.as_ref(), self.to_dot(layout))?;
        Ok(())
    }

    /// 保存连接图可视化
    ///
    /// 自动生成 `.dot` 文件，若系统安装了 Graphviz 则额外生成图像文件。
    ///
    /// # 参数
    /// - `layout`: 与本图一同产出的布局
    /// - `base_path`: 基础路径（**不含后缀**），如 `"outputs/model"`
    /// - `format`: 可选的图像格式，默认为 PNG
    ///
    /// # 行为
    /// - 始终生成 `{base_path}.dot`
    /// - 若 Graphviz 可用，额外生成 `{base_path}.{format}`（如 `.png`）
    /// - 若 Graphviz 不可用，返回结果中包含安装提示
    ///
    /// # 错误
    /// - 若路径包含后缀（如 `.dot`、`.png`），返回错误并提示正确用法
    pub fn save_visualization<P: AsRef<Path>>(
        &self,
        layout: &Layout,
        base_path: P,
        format: Option<ImageFormat>,
    ) -> Result<VisualizationOutput, VisError> {
        let path = base_path.as_ref();

        // 1. 检查是否包含后缀（不应该有）
        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            let hint = if ImageFormat::from_extension(&ext_str).is_some() || ext_str == "dot" {
                format!(
                    "请提供不含后缀的基础路径。\n\
                     例如: \"outputs/model\" 而不是 \"outputs/model.{ext_str}\"\n\
                     库会自动生成 .dot 和图像文件。"
                )
            } else {
                format!(
                    "检测到未知后缀 '.{ext_str}'，请提供不含后缀的基础路径。\n\
                     例如: \"outputs/model\"\n\
                     支持的图像格式: png, svg, pdf"
                )
            };
            return Err(VisError::InvalidOutputPath(hint));
        }

        // 2. 生成 .dot 文件
        let dot_path = path.with_extension("dot");
        self.save_dot(layout, &dot_path)?;

        // 3. 尝试生成图像（如果 Graphviz 可用）
        let format = format.unwrap_or_default();
        let image_path = path.with_extension(format.extension());

        let (graphviz_available, graphviz_hint, final_image_path) =
            match render_with_graphviz(&dot_path, &image_path, format) {
                Ok(()) => (true, None, Some(image_path)),
                Err(hint) => (false, Some(hint), None),
            };

        Ok(VisualizationOutput {
            dot_path,
            image_path: final_image_path,
            graphviz_available,
            graphviz_hint,
        })
    }
}

/// 检测 Graphviz 是否可用
///
/// 固定坐标布局需要 `neato`，故探测它而不是 `dot`。
fn is_graphviz_available() -> bool {
    Command::new("neato")
        .arg("-V")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// 使用 Graphviz（neato，固定坐标模式）渲染 DOT 文件为图像
fn render_with_graphviz(
    dot_path: &Path,
    output_path: &Path,
    format: ImageFormat,
) -> Result<(), String> {
    if !is_graphviz_available() {
        return Err("Graphviz 未安装或不在 PATH 中。\n\
             安装方式:\n\
             - Windows: winget install graphviz 或 choco install graphviz\n\
             - macOS: brew install graphviz\n\
             - Linux: sudo apt install graphviz\n\
             安装后可用在线预览: https://dreampuf.github.io/GraphvizOnline/"
            .to_string());
    }

    let output = Command::new("neato")
        .arg("-n2")
        .arg(format!("-T{}", format.extension()))
        .arg(dot_path)
        .arg("-o")
        .arg(output_path)
        .output();

    match output {
        Ok(result) if result.status.success() => Ok(()),
        Ok(result) => {
            let stderr = String::from_utf8_lossy(&result.stderr);
            Err(format!("Graphviz 渲染失败: {stderr}"))
        }
        Err(e) => Err(format!("执行 Graphviz 命令失败: {e}")),
    }
}

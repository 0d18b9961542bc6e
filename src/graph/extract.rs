/*
 * @Author       : 老董
 * @Date         : 2026-08-13
 * @Description  : 层提取：从模型遍历中过滤出有序的全连接层
 */

use super::LinearLayerSpec;
use crate::model::{ModuleKind, ModuleSource};

/// 从模型中提取有序的全连接层序列
///
/// 按声明顺序遍历所有带名称的子模块，保留其中的 `Linear`，
/// `order_index` 按过滤后的位置赋值。
///
/// # 返回
/// 有序的 [`LinearLayerSpec`] 序列；模型中没有全连接层时返回空序列，
/// 这不是错误，表示"没有可画的内容"，调用方应短路处理（见
/// [`graph_from_model`](super::graph_from_model)）。
///
/// # 说明
/// 纯读取模型元信息，不触发前向计算。声明顺序被当作数据流顺序的代理，
/// 详见 [`ModuleSource`] 的已知假设。
pub fn extract_linear_layers(model: &impl ModuleSource) -> Vec<LinearLayerSpec> {
    model
        .named_modules()
        .into_iter()
        .filter_map(|(name, kind)| match kind {
            ModuleKind::Linear {
                in_features,
                out_features,
            } => Some((name, in_features, out_features)),
            _ => None,
        })
        .enumerate()
        .map(
            |(order_index, (name, in_features, out_features))| LinearLayerSpec {
                name,
                in_features,
                out_features,
                order_index,
            },
        )
        .collect()
}

/*
 * @Author       : 老董
 * @Date         : 2026-08-12
 * @Description  : ModuleSource trait 定义
 */

use super::ModuleKind;

/// 模型遍历 trait
///
/// # 设计原则
/// - 这是可视化工具对模型侧的**唯一**依赖：一个只读的、有序的
///   `(名称, 子模块类型)` 遍历能力，不触发任何前向计算
/// - 每种模型描述格式（JSON 描述文件、手工构建的模块列表…）各自实现
///   一个适配器，而不是依赖运行时反射
/// - 遍历需展平嵌套子模块，顺序为声明顺序
///
/// # 已知假设
/// 声明顺序被当作数据流顺序的代理。对于声明顺序与实际前向顺序不一致的
/// 模型（如乱序使用的层、多路径容器），生成的图在架构上会是错的；
/// 本工具不做前向追踪来推断真实数据流。
pub trait ModuleSource {
    /// 按声明顺序返回所有带名称的子模块
    fn named_modules(&self) -> Vec<(String, ModuleKind)>;

    /// 获取子模块数量
    fn num_modules(&self) -> usize {
        self.named_modules().len()
    }
}

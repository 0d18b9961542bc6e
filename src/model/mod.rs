/*
 * @Author       : 老董
 * @Date         : 2026-08-12
 * @Description  : Model 模块：模型结构的描述与遍历接口
 *
 * 公开 API：
 * - `ModuleSource`: 模型遍历 trait（适配器接口）
 * - `ModelDescriptor` / `ModuleDescriptor` / `ModuleKind`: 可序列化的模型描述
 */

mod descriptor;
mod source;

pub use descriptor::{ModelDescriptor, ModuleDescriptor, ModuleKind};
pub use source::ModuleSource;

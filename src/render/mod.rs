/*
 * @Author       : 老董
 * @Date         : 2026-08-14
 * @Description  : Render 模块：连接图的下游渲染（DOT 与位图两种形式）
 *
 * 公开 API：
 * - `NetworkGraph::to_dot` / `NetworkGraph::save_visualization`（见 dot.rs）
 * - `Canvas`: 显式的位图绘制上下文
 */

mod canvas;
mod dot;

pub use canvas::Canvas;

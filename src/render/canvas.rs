/*
 * @Author       : 老董
 * @Date         : 2026-08-14
 * @Description  : 位图画布：不依赖 Graphviz 的 PNG 渲染
 */

use crate::errors::VisError;
use crate::graph::{Layout, NetworkGraph, NeuronRole};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use std::path::Path;

/// 画布边距（像素）
const MARGIN: f32 = 40.0;
/// 神经元圆点半径（像素）
const NODE_RADIUS: i32 = 8;

/// 位图绘制上下文
///
/// 显式持有画布状态：由 [`Canvas::new`] 创建，绘制操作作用在其上，
/// 最后由 [`Canvas::save`] 落盘，没有任何隐式全局画布。
///
/// # 使用示例
/// ```ignore
/// let (graph, layout) = graph_from_model(&model);
/// let mut canvas = Canvas::new(1200, 800);
/// canvas.draw_graph(&graph, &layout);
/// canvas.save("outputs/model.png")?;
/// ```
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// 创建指定像素尺寸的白底画布
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, Rgb([255, 255, 255])),
        }
    }

    /// 将连接图按布局坐标绘制到画布上
    ///
    /// 布局坐标会等比缩放并平移到画布内（保留边距，y 轴翻转为屏幕朝向）。
    /// 先画边（灰色线段）再画节点（按角色着色的实心圆点），避免线段盖住圆点。
    /// 空图不产生任何绘制。
    pub fn draw_graph(&mut self, graph: &NetworkGraph, layout: &Layout) {
        let Some(to_pixel) = self.world_to_pixel(layout) else {
            return;
        };

        // 1. 边：灰色线段
        for edge in &graph.edges {
            let (Some(from), Some(to)) = (layout.get(&edge.from), layout.get(&edge.to)) else {
                continue;
            };
            draw_line_segment_mut(
                &mut self.img,
                to_pixel(from),
                to_pixel(to),
                Rgb([170, 170, 170]),
            );
        }

        // 2. 节点：按角色着色的实心圆点 + 深色描边
        for node in &graph.nodes {
            let Some(pos) = layout.get(&node.id) else {
                continue;
            };
            let (px, py) = to_pixel(pos);
            let center = (px.round() as i32, py.round() as i32);
            draw_filled_circle_mut(&mut self.img, center, NODE_RADIUS, Self::role_color(node.role));
            draw_hollow_circle_mut(&mut self.img, center, NODE_RADIUS, Rgb([100, 100, 100]));
        }
    }

    /// 保存画布到图像文件（格式由后缀决定）
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), VisError> {
        self.img.save(path.as_ref())?;
        Ok(())
    }

    /// 画布像素尺寸 (宽, 高)
    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// 读取指定像素（主要用于测试）
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.img.get_pixel(x, y).0
    }

    /// 获取节点角色对应的填充颜色
    const fn role_color(role: NeuronRole) -> Rgb<u8> {
        match role {
            NeuronRole::Input => Rgb([173, 216, 230]),  // 浅蓝
            NeuronRole::Hidden => Rgb([144, 238, 144]), // 浅绿
            NeuronRole::Output => Rgb([240, 128, 128]), // 浅珊瑚
        }
    }

    /// 构造布局坐标到像素坐标的等比映射（含边距与 y 轴翻转）
    ///
    /// 布局为空时返回 None；单点布局（两轴跨度皆为零）不缩放，
    /// 落在画布中心。
    ///
    /// 返回的闭包只捕获拷贝出来的浮点常量（`use<>`），
    /// 不持有对画布的借用。
    fn world_to_pixel(
        &self,
        layout: &Layout,
    ) -> Option<impl Fn((f32, f32)) -> (f32, f32) + use<>> {
        let (min_x, min_y, max_x, max_y) = layout.bounds()?;
        let (width, height) = self.img.dimensions();

        let span_x = max_x - min_x;
        let span_y = max_y - min_y;
        let scale_x = if span_x > 0.0 {
            (width as f32 - 2.0 * MARGIN) / span_x
        } else {
            f32::INFINITY
        };
        let scale_y = if span_y > 0.0 {
            (height as f32 - 2.0 * MARGIN) / span_y
        } else {
            f32::INFINITY
        };
        let scale = match scale_x.min(scale_y) {
            s if s.is_finite() => s,
            _ => 0.0,
        };

        // 等比缩放后在画布内居中
        let offset_x = (width as f32 - span_x * scale) / 2.0;
        let offset_y = (height as f32 - span_y * scale) / 2.0;

        Some(move |(x, y): (f32, f32)| {
            let px = (x - min_x) * scale + offset_x;
            let py = (max_y - y) * scale + offset_y;
            (px, py)
        })
    }
}
